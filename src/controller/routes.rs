use models::CouponId;
use router::RouteParser;

/// List of all routes with params for the app
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Healthcheck,
    Coupons,
    Coupon(CouponId),
}

pub fn create_route_parser() -> RouteParser<Route> {
    let mut router = RouteParser::default();

    // Healthcheck
    router.add_route(r"^/healthcheck$", || Route::Healthcheck);

    // Coupons routes
    router.add_route(r"^/coupons$", || Route::Coupons);

    // Coupons/:id route
    router.add_route_with_params(r"^/coupons/([A-Za-z0-9-]+)$", |params| {
        params
            .get(0)
            .map(|string_id| Route::Coupon(CouponId(string_id.to_string())))
    });

    router
}
