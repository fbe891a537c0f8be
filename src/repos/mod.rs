//! Repos is a module responsible for interacting with the coupon store
pub mod coupons;
pub mod error;
pub mod types;

pub use self::coupons::*;
pub use self::types::*;
