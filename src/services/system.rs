//! System service, responsible for common endpoints like healthcheck

use futures::future;

use super::types::ServiceFuture;

pub trait SystemService {
    /// Healthcheck
    fn healthcheck(&self) -> ServiceFuture<String>;
}

#[derive(Clone, Default)]
pub struct SystemServiceImpl;

impl SystemServiceImpl {
    pub fn new() -> Self {
        Self {}
    }
}

impl SystemService for SystemServiceImpl {
    /// Healthcheck
    fn healthcheck(&self) -> ServiceFuture<String> {
        Box::new(future::ok("Ok".to_string()))
    }
}
