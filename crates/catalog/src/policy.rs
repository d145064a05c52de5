//! Quantity cap policy attached to a product.

use serde::{Deserialize, Serialize};

use maxqty_core::{DomainError, DomainResult, ProductId};

/// Per-product purchase-quantity cap configuration.
///
/// Read-only to the enforcement engine. An unset `max_quantity` means no cap
/// applies, regardless of `per_customer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityPolicy {
    product_id: ProductId,
    max_quantity: Option<u32>,
    per_customer: bool,
}

impl QuantityPolicy {
    /// Policy with a flat cap.
    ///
    /// A cap of zero is rejected; the catalog's admin field has a minimum of
    /// one (a product nobody may buy is delisted, not capped at zero).
    pub fn capped(
        product_id: ProductId,
        max_quantity: u32,
        per_customer: bool,
    ) -> DomainResult<Self> {
        if max_quantity == 0 {
            return Err(DomainError::validation("max_quantity must be at least 1"));
        }
        Ok(Self {
            product_id,
            max_quantity: Some(max_quantity),
            per_customer,
        })
    }

    /// Policy present in the catalog but with no cap configured.
    pub fn uncapped(product_id: ProductId) -> Self {
        Self {
            product_id,
            max_quantity: None,
            per_customer: false,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn max_quantity(&self) -> Option<u32> {
        self.max_quantity
    }

    /// Whether the cap accumulates across the customer's historical orders.
    pub fn is_per_customer(&self) -> bool {
        self.per_customer
    }

    pub fn is_capped(&self) -> bool {
        self.max_quantity.is_some()
    }
}
