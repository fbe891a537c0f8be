//! Coupons is a microservice responsible for managing coupons.
//! This crate is for running the service from `coupons_lib`. See `coupons_lib` for details.

extern crate coupons_lib;
extern crate env_logger;

fn main() {
    // Prepare logger
    env_logger::init();

    let config = coupons_lib::config::Config::new().expect("Can't load app config!");

    coupons_lib::start_server(config, &None, || ());
}
