//! Config module contains the initial configuration of the app.

use std::env;

use config_crate::{Config as RawConfig, ConfigError, Environment, File};

/// Basic settings - server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: Server,
}

/// Server settings
#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: String,
    pub thread_count: usize,
}

impl Config {
    /// Creates config from `config/base.toml`, optionally overwritten by
    /// `config/<env>.toml`, where env is one of development, test, production.
    /// After that it could be overwritten by environment variables like `COUPONS_SERVER_PORT`.
    pub fn new() -> Result<Self, ConfigError> {
        let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut s = RawConfig::new();
        s.merge(File::with_name("config/base"))?;
        s.merge(File::with_name(&format!("config/{}", env)).required(false))?;

        // Add in settings from the environment (with a prefix of COUPONS)
        s.merge(Environment::with_prefix("COUPONS"))?;

        s.try_into()
    }
}
