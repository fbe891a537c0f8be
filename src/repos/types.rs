use std::sync::{Arc, Mutex};

use models::Coupon;
use repos::error::Error;

/// Repos layer Result
pub type RepoResult<T> = Result<T, Error>;

/// In-memory coupon store shared between requests, keeps coupons in creation order
pub type CouponsStore = Arc<Mutex<Vec<Coupon>>>;
