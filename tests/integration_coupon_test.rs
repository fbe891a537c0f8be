include!("integration_tests_setup.rs");

use std::str::FromStr;

use hyper::header::{ContentLength, ContentType};
use hyper::{Method, Request, StatusCode, Uri};

use coupons_lib::controller::error::ErrorMessage;
use coupons_lib::models::Coupon;

fn run_request(context: &mut Context, req: Request) -> (StatusCode, String) {
    context
        .core
        .run(context.client.request(req).and_then(|resp| {
            let status = resp.status();
            read_body(resp.body()).map(move |body| (status, body))
        })).unwrap()
}

fn post_coupon(context: &mut Context, body: &str) -> (StatusCode, String) {
    let url = Uri::from_str(&format!("{}/coupons", context.base_url)).unwrap();
    let mut req = Request::new(Method::Post, url);
    req.headers_mut().set(ContentType::json());
    req.headers_mut().set(ContentLength(body.len() as u64));
    req.set_body(body.to_string());
    run_request(context, req)
}

fn get(context: &mut Context, path: &str) -> (StatusCode, String) {
    let url = Uri::from_str(&format!("{}{}", context.base_url, path)).unwrap();
    run_request(context, Request::new(Method::Get, url))
}

#[test]
fn create_and_retrieve_coupon() {
    let mut context = setup();

    let (status, body) = post_coupon(
        &mut context,
        r#"{"code":"SAVE10","title":"Save ten percent","percent":10,"quantity":1}"#,
    );
    assert_eq!(status, StatusCode::Ok);
    let coupon: Coupon = serde_json::from_str(&body).unwrap();
    assert!(!coupon.id.0.is_empty());
    assert_eq!(coupon.code.0, "SAVE10");
    assert_eq!(coupon.title, "Save ten percent");

    let (status, body) = get(&mut context, &format!("/coupons/{}", coupon.id));
    assert_eq!(status, StatusCode::Ok);
    let retrieved: Coupon = serde_json::from_str(&body).unwrap();
    assert_eq!(retrieved.id, coupon.id);
    assert_eq!(retrieved.code, coupon.code);
    assert_eq!(retrieved.title, coupon.title);
}

#[test]
fn retrieve_unknown_coupon_returns_not_found() {
    let mut context = setup();

    let (status, body) = get(&mut context, "/coupons/doesnotexist");
    assert_eq!(status, StatusCode::NotFound);
    let message: ErrorMessage = serde_json::from_str(&body).unwrap();
    assert_eq!(message.code, 404);
    assert_eq!(message.message, "Not found");
}

#[test]
fn list_coupons_respects_limit() {
    let mut context = setup();

    for code in &["FIRST1", "SECOND2", "THIRD3"] {
        let body = format!(r#"{{"code":"{}","title":"title","percent":10,"quantity":1}}"#, code);
        let (status, _) = post_coupon(&mut context, &body);
        assert_eq!(status, StatusCode::Ok);
    }

    let (status, body) = get(&mut context, "/coupons?limit=2");
    assert_eq!(status, StatusCode::Ok);
    let coupons: Vec<Coupon> = serde_json::from_str(&body).unwrap();
    assert_eq!(coupons.len(), 2);

    let (status, body) = get(&mut context, "/coupons");
    assert_eq!(status, StatusCode::Ok);
    let coupons: Vec<Coupon> = serde_json::from_str(&body).unwrap();
    let codes = coupons.into_iter().map(|coupon| coupon.code.0).collect::<Vec<_>>();
    assert_eq!(codes, vec!["FIRST1", "SECOND2", "THIRD3"]);

    let (status, body) = get(&mut context, "/coupons?limit=0");
    assert_eq!(status, StatusCode::Ok);
    let coupons: Vec<Coupon> = serde_json::from_str(&body).unwrap();
    assert!(coupons.is_empty());
}

#[test]
fn list_coupons_with_negative_limit_returns_bad_request() {
    let mut context = setup();

    let (status, body) = get(&mut context, "/coupons?limit=-1");
    assert_eq!(status, StatusCode::BadRequest);
    let message: ErrorMessage = serde_json::from_str(&body).unwrap();
    assert_eq!(message.code, 400);
}

#[test]
fn list_coupons_with_malformed_limit_returns_unprocessable_entity() {
    let mut context = setup();

    let (status, _) = get(&mut context, "/coupons?limit=ten");
    assert_eq!(status, StatusCode::UnprocessableEntity);
}

#[test]
fn create_coupon_with_invalid_percent_returns_bad_request() {
    let mut context = setup();

    let (status, body) = post_coupon(
        &mut context,
        r#"{"code":"SAVE10","title":"title","percent":1000,"quantity":1}"#,
    );
    assert_eq!(status, StatusCode::BadRequest);
    let message: ErrorMessage = serde_json::from_str(&body).unwrap();
    assert_eq!(message.code, 400);
}

#[test]
fn create_coupon_with_malformed_body_returns_unprocessable_entity() {
    let mut context = setup();

    let (status, _) = post_coupon(&mut context, "not a json");
    assert_eq!(status, StatusCode::UnprocessableEntity);
}
