//! Cart API response augmentation.
//!
//! The public commerce API renders cart contents; capped lines gain a
//! `quantity_limits.maximum` block so clients can constrain their quantity
//! widgets without a second round-trip.

use serde::{Deserialize, Serialize};

use maxqty_catalog::PolicyStore;
use maxqty_core::{CustomerIdentity, ProductId};
use maxqty_limits::{Allowance, LimitEvaluator};
use maxqty_orders::OrderStore;

/// `quantity_limits` block attached to a cart item in the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityLimits {
    pub maximum: u64,
}

/// Cart item as rendered in the commerce API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub quantity: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_limits: Option<QuantityLimits>,
}

impl CartItemView {
    pub fn new(product_id: ProductId, quantity: u64) -> Self {
        Self {
            product_id,
            quantity,
            quantity_limits: None,
        }
    }
}

/// Populate `quantity_limits.maximum` on every capped line.
///
/// The maximum is the evaluator's remaining allowance for the line's product
/// and this customer (which equals the flat cap for unscoped policies).
/// Lines for uncapped products are left untouched.
pub fn annotate_cart_items<P, S>(
    evaluator: &LimitEvaluator<P, S>,
    identity: &CustomerIdentity,
    items: &mut [CartItemView],
) where
    P: PolicyStore,
    S: OrderStore,
{
    for item in items {
        let decision = evaluator.evaluate(identity, item.product_id, 0, 0);
        if let Allowance::Limited(maximum) = decision.remaining {
            item.quantity_limits = Some(QuantityLimits { maximum });
        }
    }
}
