//! Coupons is a microservice responsible for managing coupons
//! The layered structure of the app is
//!
//! `Application -> Controller -> Service -> Repo`
//!
//! Each layer translates errors of the layer below into its own
//! error type. Errors that reach the `Application` layer are rendered
//! into http responses with a status code reflecting the error kind.

extern crate config as config_crate;
#[macro_use]
extern crate failure;
extern crate futures;
extern crate futures_cpupool;
extern crate hyper;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate tokio_core;
extern crate tokio_signal;
extern crate uuid;
extern crate validator;
#[macro_use]
extern crate validator_derive;

#[macro_use]
pub mod macros;
pub mod config;
pub mod controller;
pub mod models;
pub mod repos;
pub mod router;
pub mod services;

use std::process;
use std::sync::{Arc, Mutex};

use futures::{future, Future, Stream};
use futures_cpupool::CpuPool;
use hyper::server::Http;
use tokio_core::reactor::Core;

use config::Config;
use controller::application::Application;
use repos::types::CouponsStore;
use services::coupons::{CouponsService, CouponsServiceImpl};
use services::system::{SystemService, SystemServiceImpl};

/// Starts new web service from provided `Config`
pub fn start_server<F: FnOnce() + 'static>(config: Config, port: &Option<String>, callback: F) {
    // Prepare reactor
    let mut core = Core::new().expect("Unexpected error creating event loop core");
    let handle = Arc::new(core.handle());

    let thread_count = config.server.thread_count;

    // Prepare CPU pool
    let cpu_pool = CpuPool::new(thread_count);

    // Prepare server
    let address = {
        let port = port.as_ref().unwrap_or(&config.server.port);
        format!("{}:{}", config.server.host, port).parse().expect("Could not parse address")
    };

    // Prepare coupon store shared between requests
    let store: CouponsStore = Arc::new(Mutex::new(Vec::new()));

    let coupons_service: Arc<CouponsService> = Arc::new(CouponsServiceImpl::new(store, cpu_pool));
    let system_service: Arc<SystemService> = Arc::new(SystemServiceImpl::new());

    let serve = Http::new()
        .serve_addr_handle(&address, &handle, move || {
            // Prepare application
            let controller = controller::Controller::new(coupons_service.clone(), system_service.clone());
            let app = Application::new(controller);

            Ok(app)
        }).unwrap_or_else(|why| {
            error!("Http Server Initialization Error: {}", why);
            process::exit(1);
        });

    let handle_arc2 = handle.clone();
    handle.spawn(
        serve
            .for_each(move |conn| {
                handle_arc2.spawn(conn.map(|_| ()).map_err(|why| error!("Server Error: {}", why)));
                Ok(())
            }).map_err(|_| ()),
    );

    info!("Listening on http://{}, threads: {}", address, thread_count);
    handle.spawn_fn(move || {
        callback();
        future::ok(())
    });

    core.run(tokio_signal::ctrl_c().flatten_stream().take(1u64).for_each(|()| {
        info!("Ctrl+C received. Exit");

        Ok(())
    })).unwrap();
}
