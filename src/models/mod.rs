//! Models contains all structures that are used in different
//! modules of the app

pub mod coupon;
pub mod validation_rules;

pub use self::coupon::*;
pub use self::validation_rules::*;
