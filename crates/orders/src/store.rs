//! Order storage query abstraction.

use std::sync::{Arc, RwLock};

use thiserror::Error;

use maxqty_core::{AccountId, EmailAddress};

use crate::order::{OrderRecord, OrderStatus};

/// Order storage failure (connectivity, backend error).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("order storage unavailable: {0}")]
pub struct OrderStoreError(pub String);

/// Read-only query capability over historical orders.
///
/// Implementations filter by one identity channel and a status set; the
/// engine never writes through this trait.
pub trait OrderStore: Send + Sync {
    /// Orders whose billing email matches, restricted to `statuses`.
    fn find_by_billing_email(
        &self,
        email: &EmailAddress,
        statuses: &[OrderStatus],
    ) -> Result<Vec<OrderRecord>, OrderStoreError>;

    /// Orders placed by the account, restricted to `statuses`.
    fn find_by_account(
        &self,
        account: AccountId,
        statuses: &[OrderStatus],
    ) -> Result<Vec<OrderRecord>, OrderStoreError>;
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn find_by_billing_email(
        &self,
        email: &EmailAddress,
        statuses: &[OrderStatus],
    ) -> Result<Vec<OrderRecord>, OrderStoreError> {
        (**self).find_by_billing_email(email, statuses)
    }

    fn find_by_account(
        &self,
        account: AccountId,
        statuses: &[OrderStatus],
    ) -> Result<Vec<OrderRecord>, OrderStoreError> {
        (**self).find_by_account(account, statuses)
    }
}

/// In-memory order store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    inner: RwLock<Vec<OrderRecord>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, order: OrderRecord) {
        if let Ok(mut orders) = self.inner.write() {
            orders.push(order);
        }
    }
}

impl OrderStore for InMemoryOrderStore {
    fn find_by_billing_email(
        &self,
        email: &EmailAddress,
        statuses: &[OrderStatus],
    ) -> Result<Vec<OrderRecord>, OrderStoreError> {
        let orders = self
            .inner
            .read()
            .map_err(|_| OrderStoreError("order store lock poisoned".to_string()))?;
        Ok(orders
            .iter()
            .filter(|o| o.billing_email.as_ref() == Some(email) && statuses.contains(&o.status))
            .cloned()
            .collect())
    }

    fn find_by_account(
        &self,
        account: AccountId,
        statuses: &[OrderStatus],
    ) -> Result<Vec<OrderRecord>, OrderStoreError> {
        let orders = self
            .inner
            .read()
            .map_err(|_| OrderStoreError("order store lock poisoned".to_string()))?;
        Ok(orders
            .iter()
            .filter(|o| o.account == Some(account) && statuses.contains(&o.status))
            .cloned()
            .collect())
    }
}
