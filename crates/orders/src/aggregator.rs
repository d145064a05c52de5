//! Cumulative purchase totals per customer and product.

use std::collections::HashSet;

use thiserror::Error;

use maxqty_core::{CustomerIdentity, ProductId};

use crate::order::OrderStatus;
use crate::store::{OrderStore, OrderStoreError};

/// Historical-order lookup failed; the caller decides how to degrade.
///
/// The evaluator treats this as "prior total unknown, assume zero" so that a
/// storage outage never blocks the purchase flow.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("purchase total aggregation unavailable: {0}")]
pub struct AggregationUnavailable(#[from] pub OrderStoreError);

/// Total quantity of `product_id` the customer has already purchased across
/// qualifying historical orders.
///
/// Both identity channels are queried. An order reachable through both (same
/// billing email and same account) is counted exactly once: the set of order
/// ids seen in the email pass excludes those orders from the account pass.
/// Anonymous customers have no history to aggregate; the total is 0 and
/// storage is not touched.
pub fn total_purchased<S>(
    store: &S,
    identity: &CustomerIdentity,
    product_id: ProductId,
) -> Result<u64, AggregationUnavailable>
where
    S: OrderStore + ?Sized,
{
    if identity.is_anonymous() {
        return Ok(0);
    }

    let statuses = OrderStatus::qualifying();
    let mut seen = HashSet::new();
    let mut total: u64 = 0;

    if let Some(email) = &identity.email {
        for order in store.find_by_billing_email(email, statuses)? {
            if seen.insert(order.id) {
                total = total.saturating_add(order.quantity_of(product_id));
            }
        }
    }

    if let Some(account) = identity.account {
        for order in store.find_by_account(account, statuses)? {
            if seen.insert(order.id) {
                total = total.saturating_add(order.quantity_of(product_id));
            }
        }
    }

    Ok(total)
}
