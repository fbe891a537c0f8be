//! `Controller` is a top layer that handles all http-related
//! stuff like reading bodies, parsing params, forming a response.
//! Basically it provides inputs to `Service` layer and converts outputs
//! of `Service` layer to http responses

pub mod application;
pub mod error;
pub mod routes;
pub mod types;
pub mod utils;

use std::sync::Arc;

use futures::future;
use futures::Future;
use hyper::server::Request;
use hyper::{Get, Post};
use serde_json;

use self::error::ControllerError as Error;
use self::routes::{create_route_parser, Route};
use self::types::ControllerFuture;
use self::utils::parse_body;
use models::NewCoupon;
use router::RouteParser;
use services::coupons::CouponsService;
use services::system::SystemService;

/// Controller handles route parsing and calling `Service` layer
pub struct Controller {
    pub route_parser: Arc<RouteParser<Route>>,
    pub coupons_service: Arc<CouponsService>,
    pub system_service: Arc<SystemService>,
}

macro_rules! serialize_future {
    ($e:expr) => {
        Box::new(
            $e.map_err(Error::from)
                .and_then(|resp| serde_json::to_string(&resp).map_err(Error::from)),
        )
    };
}

impl Controller {
    /// Create a new controller based on services
    pub fn new(coupons_service: Arc<CouponsService>, system_service: Arc<SystemService>) -> Self {
        let route_parser = Arc::new(create_route_parser());
        Self {
            route_parser,
            coupons_service,
            system_service,
        }
    }

    /// Handle a request and get future response
    pub fn call(&self, req: Request) -> ControllerFuture {
        let (method, uri, _, _, body) = req.deconstruct();

        match (&method, self.route_parser.test(uri.path())) {
            // GET /healthcheck
            (&Get, Some(Route::Healthcheck)) => serialize_future!(self.system_service.healthcheck()),

            // GET /coupons/<coupon_id>
            (&Get, Some(Route::Coupon(coupon_id))) => serialize_future!(self.coupons_service.get_coupon(coupon_id)),

            // GET /coupons
            (&Get, Some(Route::Coupons)) => {
                let query = uri.query().unwrap_or_default();
                if query.contains("limit") {
                    if let (Some(limit),) = parse_query!(query, "limit" => i64) {
                        serialize_future!(self.coupons_service.list_coupons(Some(limit)))
                    } else {
                        Box::new(future::err(Error::UnprocessableEntity(format_err!(
                            "Error parsing limit query parameter"
                        ))))
                    }
                } else {
                    serialize_future!(self.coupons_service.list_coupons(None))
                }
            }

            // POST /coupons
            (&Post, Some(Route::Coupons)) => {
                let coupons_service = self.coupons_service.clone();
                serialize_future!(
                    parse_body::<NewCoupon>(body)
                        .map_err(|_| Error::UnprocessableEntity(format_err!("Error parsing coupon payload body")))
                        .and_then(move |new_coupon| coupons_service.create_coupon(new_coupon).map_err(Error::from))
                )
            }

            // Fallback
            _ => Box::new(future::err(Error::NotFound)),
        }
    }
}
