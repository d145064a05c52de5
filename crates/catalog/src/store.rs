//! Catalog-side policy storage abstraction.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use maxqty_core::ProductId;

use crate::policy::QuantityPolicy;

/// Read + administrative write access to per-product cap configuration.
///
/// The read path backs every evaluation; the write path is the catalog
/// administration surface that persists a product's cap settings.
pub trait PolicyStore: Send + Sync {
    /// Current policy for a product, if the catalog has one configured.
    fn policy_for(&self, product_id: ProductId) -> Option<QuantityPolicy>;

    /// Create or replace the policy for `policy.product_id()`.
    fn put_policy(&self, policy: QuantityPolicy);

    /// Remove a product's policy; the product becomes unrestricted.
    fn remove_policy(&self, product_id: ProductId);
}

impl<S> PolicyStore for Arc<S>
where
    S: PolicyStore + ?Sized,
{
    fn policy_for(&self, product_id: ProductId) -> Option<QuantityPolicy> {
        (**self).policy_for(product_id)
    }

    fn put_policy(&self, policy: QuantityPolicy) {
        (**self).put_policy(policy)
    }

    fn remove_policy(&self, product_id: ProductId) {
        (**self).remove_policy(product_id)
    }
}

/// In-memory policy store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryPolicyStore {
    inner: RwLock<HashMap<ProductId, QuantityPolicy>>,
}

impl InMemoryPolicyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PolicyStore for InMemoryPolicyStore {
    fn policy_for(&self, product_id: ProductId) -> Option<QuantityPolicy> {
        let map = self.inner.read().ok()?;
        map.get(&product_id).cloned()
    }

    fn put_policy(&self, policy: QuantityPolicy) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(policy.product_id(), policy);
        }
    }

    fn remove_policy(&self, product_id: ProductId) {
        if let Ok(mut map) = self.inner.write() {
            map.remove(&product_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_read_back() {
        let store = InMemoryPolicyStore::new();
        let product_id = ProductId::new();
        let policy = QuantityPolicy::capped(product_id, 3, true).unwrap();

        store.put_policy(policy.clone());
        assert_eq!(store.policy_for(product_id), Some(policy));
        assert_eq!(store.policy_for(ProductId::new()), None);
    }

    #[test]
    fn put_replaces_and_remove_clears() {
        let store = InMemoryPolicyStore::new();
        let product_id = ProductId::new();

        store.put_policy(QuantityPolicy::capped(product_id, 3, false).unwrap());
        store.put_policy(QuantityPolicy::capped(product_id, 8, true).unwrap());
        let current = store.policy_for(product_id).unwrap();
        assert_eq!(current.max_quantity(), Some(8));
        assert!(current.is_per_customer());

        store.remove_policy(product_id);
        assert_eq!(store.policy_for(product_id), None);
    }
}
