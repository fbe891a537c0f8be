//! Model coupons
use std::fmt;
use std::time::SystemTime;

use uuid::Uuid;

use models::validation_rules::*;

/// Coupon identifier, assigned by the service on creation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct CouponId(pub String);

impl CouponId {
    pub fn new() -> Self {
        CouponId(Uuid::new_v4().hyphenated().to_string())
    }
}

impl fmt::Display for CouponId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coupon code
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct CouponCode(pub String);

impl fmt::Display for CouponCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coupon with id assigned on creation
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Coupon {
    pub id: CouponId,
    pub code: CouponCode,
    pub title: String,
    pub percent: i32,
    pub quantity: i32,
    pub expired_at: Option<SystemTime>,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

impl Coupon {
    pub const MIN_LENGTH_CODE: usize = 4;
    pub const MAX_LENGTH_CODE: usize = 32;

    pub fn new(id: CouponId, payload: NewCoupon) -> Self {
        let now = SystemTime::now();

        Self {
            id,
            code: payload.code,
            title: payload.title,
            percent: payload.percent,
            quantity: payload.quantity,
            expired_at: payload.expired_at,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for creating coupon
#[derive(Serialize, Deserialize, Clone, Validate, Debug)]
pub struct NewCoupon {
    #[validate(custom = "validate_coupon_code")]
    pub code: CouponCode,
    pub title: String,
    #[validate(range(min = "0", max = "100"))]
    pub percent: i32,
    #[validate(custom = "validate_coupon_quantity")]
    pub quantity: i32,
    pub expired_at: Option<SystemTime>,
}
