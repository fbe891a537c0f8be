//! Coupons repo, presents operations with the coupon store

use models::{Coupon, CouponCode, CouponId, NewCoupon};
use repos::types::{CouponsStore, RepoResult};

/// Coupons repository, responsible for handling coupons
pub struct CouponsRepoImpl {
    pub store: CouponsStore,
}

pub trait CouponsRepo {
    /// Creates new coupon
    fn create(&self, payload: NewCoupon) -> RepoResult<Coupon>;

    /// Lists coupons in creation order limited by `count` parameter
    fn list(&self, count: Option<usize>) -> RepoResult<Vec<Coupon>>;

    /// Get coupon by id
    fn get(&self, id_arg: CouponId) -> RepoResult<Option<Coupon>>;
}

impl CouponsRepoImpl {
    pub fn new(store: CouponsStore) -> Self {
        Self { store }
    }
}

impl CouponsRepo for CouponsRepoImpl {
    /// Creates new coupon
    fn create(&self, payload: NewCoupon) -> RepoResult<Coupon> {
        debug!("Create new coupon {:?}.", payload);
        let mut payload = payload;
        payload.code = CouponCode(payload.code.0.to_uppercase());

        let coupon = Coupon::new(CouponId::new(), payload);

        let mut coupons = self.store.lock()?;
        coupons.push(coupon.clone());

        Ok(coupon)
    }

    /// Lists coupons in creation order limited by `count` parameter
    fn list(&self, count: Option<usize>) -> RepoResult<Vec<Coupon>> {
        debug!("Find all coupons with count {:?}.", count);
        let coupons = self.store.lock()?;

        let coupons = match count {
            Some(count) => coupons.iter().take(count).cloned().collect(),
            None => coupons.clone(),
        };

        Ok(coupons)
    }

    /// Get coupon by id
    fn get(&self, id_arg: CouponId) -> RepoResult<Option<Coupon>> {
        debug!("Find in coupons with id {}.", id_arg);
        let coupons = self.store.lock()?;

        Ok(coupons.iter().find(|coupon| coupon.id == id_arg).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use models::*;

    fn create_repo() -> CouponsRepoImpl {
        CouponsRepoImpl::new(Arc::new(Mutex::new(Vec::new())))
    }

    fn create_new_coupon(code: &str) -> NewCoupon {
        NewCoupon {
            code: CouponCode(code.to_string()),
            title: "title".to_string(),
            percent: 10,
            quantity: 1,
            expired_at: None,
        }
    }

    #[test]
    fn test_create_uppercases_code() {
        let repo = create_repo();
        let coupon = repo.create(create_new_coupon("save10")).unwrap();
        assert_eq!(coupon.code, CouponCode("SAVE10".to_string()));
    }

    #[test]
    fn test_list_keeps_creation_order() {
        let repo = create_repo();
        repo.create(create_new_coupon("FIRST1")).unwrap();
        repo.create(create_new_coupon("SECOND2")).unwrap();
        repo.create(create_new_coupon("THIRD3")).unwrap();

        let coupons = repo.list(None).unwrap();
        let codes = coupons.into_iter().map(|coupon| coupon.code.0).collect::<Vec<_>>();
        assert_eq!(codes, vec!["FIRST1", "SECOND2", "THIRD3"]);

        let limited = repo.list(Some(2)).unwrap();
        assert_eq!(limited.len(), 2);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let repo = create_repo();
        assert!(repo.get(CouponId("missing".to_string())).unwrap().is_none());
    }
}
