use std::borrow::Cow;
use std::collections::HashMap;

use regex::Regex;
use validator::ValidationError;

use models::{Coupon, CouponCode};

pub fn validate_coupon_code(code: &CouponCode) -> Result<(), ValidationError> {
    lazy_static! {
        static ref COUPON_CODE_RE: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
    }

    let length = code.0.chars().count();
    if length < Coupon::MIN_LENGTH_CODE || length > Coupon::MAX_LENGTH_CODE {
        return Err(ValidationError {
            code: Cow::from("code"),
            message: Some(Cow::from("Coupon code length must be from 4 to 32 symbols")),
            params: HashMap::new(),
        });
    }

    if COUPON_CODE_RE.is_match(&code.0) {
        Ok(())
    } else {
        Err(ValidationError {
            code: Cow::from("code"),
            message: Some(Cow::from("Coupon code can only contain latin letters, digits, '_' or '-'")),
            params: HashMap::new(),
        })
    }
}

pub fn validate_coupon_quantity(quantity: &i32) -> Result<(), ValidationError> {
    if *quantity >= 0 {
        Ok(())
    } else {
        Err(ValidationError {
            code: Cow::from("quantity"),
            message: Some(Cow::from("Quantity must be non negative.")),
            params: HashMap::new(),
        })
    }
}
