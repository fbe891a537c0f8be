//! Coupons Services, presents operations with coupons

use futures::future;
use futures::future::IntoFuture;
use futures::Future;
use futures_cpupool::CpuPool;
use validator::Validate;

use super::error::ServiceError as Error;
use super::types::ServiceFuture;
use models::{Coupon, CouponId, NewCoupon};
use repos::coupons::{CouponsRepo, CouponsRepoImpl};
use repos::types::CouponsStore;

pub trait CouponsService {
    /// Creates new coupon
    fn create_coupon(&self, payload: NewCoupon) -> ServiceFuture<Coupon>;
    /// Lists coupons in creation order limited by `limit` parameter
    fn list_coupons(&self, limit: Option<i64>) -> ServiceFuture<Vec<Coupon>>;
    /// Returns coupon by id
    fn get_coupon(&self, id_arg: CouponId) -> ServiceFuture<Coupon>;
}

/// Coupons service, responsible for Coupon-related operations
pub struct CouponsServiceImpl {
    pub store: CouponsStore,
    pub cpu_pool: CpuPool,
}

impl CouponsServiceImpl {
    pub fn new(store: CouponsStore, cpu_pool: CpuPool) -> Self {
        Self { store, cpu_pool }
    }
}

impl CouponsService for CouponsServiceImpl {
    /// Creates new coupon
    fn create_coupon(&self, payload: NewCoupon) -> ServiceFuture<Coupon> {
        let store = self.store.clone();
        let cpu_pool = self.cpu_pool.clone();

        Box::new(
            payload
                .validate()
                .map_err(Error::Validate)
                .into_future()
                .and_then(move |_| {
                    cpu_pool.spawn_fn(move || {
                        let coupons_repo = CouponsRepoImpl::new(store);
                        coupons_repo.create(payload).map_err(Error::from)
                    })
                }),
        )
    }

    /// Lists coupons in creation order limited by `limit` parameter
    fn list_coupons(&self, limit: Option<i64>) -> ServiceFuture<Vec<Coupon>> {
        let store = self.store.clone();

        let count = match limit {
            Some(limit) if limit < 0 => {
                return Box::new(future::err(Error::InvalidArgument(format!(
                    "Limit must be non negative, got {}",
                    limit
                ))))
            }
            Some(limit) => Some(limit as usize),
            None => None,
        };

        Box::new(self.cpu_pool.spawn_fn(move || {
            let coupons_repo = CouponsRepoImpl::new(store);
            coupons_repo.list(count).map_err(Error::from)
        }))
    }

    /// Returns coupon by id
    fn get_coupon(&self, id_arg: CouponId) -> ServiceFuture<Coupon> {
        let store = self.store.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            let coupons_repo = CouponsRepoImpl::new(store);
            coupons_repo
                .get(id_arg)
                .map_err(Error::from)
                .and_then(|coupon| coupon.ok_or(Error::NotFound))
        }))
    }
}
