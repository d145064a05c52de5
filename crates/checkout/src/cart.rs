//! Active cart contents as exposed by cart state.

use serde::{Deserialize, Serialize};

use maxqty_core::ProductId;

/// A line of the customer's active cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u64,
}

impl CartLine {
    pub fn new(product_id: ProductId, quantity: u64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Quantity of `product_id` currently in the cart, across all of its lines.
pub fn quantity_in_cart(lines: &[CartLine], product_id: ProductId) -> u64 {
    lines
        .iter()
        .filter(|line| line.product_id == product_id)
        .fold(0u64, |acc, line| acc.saturating_add(line.quantity))
}
