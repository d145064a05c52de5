//! Historical orders as read from order storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maxqty_core::{AccountId, EmailAddress, OrderId, ProductId};

/// Storefront order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Processing,
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
}

impl OrderStatus {
    /// Whether an order in this status counts toward cumulative purchase
    /// totals. An order is "completed enough" once it is paid: completed or
    /// processing.
    pub fn counts_toward_totals(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Processing)
    }

    /// The qualifying-status filter passed to order storage queries.
    pub fn qualifying() -> &'static [OrderStatus] {
        &[OrderStatus::Completed, OrderStatus::Processing]
    }
}

/// Order line: product reference and quantity.
///
/// For variable products the line carries both the parent product id and the
/// variation's own product id; caps are keyed by the parent, so a line
/// matches the target by either reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub variant_id: Option<ProductId>,
    pub quantity: u32,
}

impl OrderLine {
    pub fn simple(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            variant_id: None,
            quantity,
        }
    }

    /// Whether this line references the target product, directly or through
    /// one of its variations.
    pub fn references(&self, target: ProductId) -> bool {
        self.product_id == target || self.variant_id == Some(target)
    }
}

/// Historical order as returned by the order storage query capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub billing_email: Option<EmailAddress>,
    pub account: Option<AccountId>,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    pub placed_at: DateTime<Utc>,
}

impl OrderRecord {
    /// Total quantity of `target` across this order's lines.
    pub fn quantity_of(&self, target: ProductId) -> u64 {
        self.lines
            .iter()
            .filter(|line| line.references(target))
            .fold(0u64, |acc, line| acc.saturating_add(u64::from(line.quantity)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_order(lines: Vec<OrderLine>) -> OrderRecord {
        OrderRecord {
            id: OrderId::new(),
            billing_email: None,
            account: None,
            status: OrderStatus::Completed,
            lines,
            placed_at: Utc::now(),
        }
    }

    #[test]
    fn only_paid_statuses_qualify() {
        assert!(OrderStatus::Completed.counts_toward_totals());
        assert!(OrderStatus::Processing.counts_toward_totals());
        assert!(!OrderStatus::Pending.counts_toward_totals());
        assert!(!OrderStatus::Cancelled.counts_toward_totals());
        assert!(!OrderStatus::Refunded.counts_toward_totals());

        for status in OrderStatus::qualifying() {
            assert!(status.counts_toward_totals());
        }
    }

    #[test]
    fn quantity_of_sums_matching_lines_only() {
        let target = ProductId::new();
        let other = ProductId::new();
        let order = test_order(vec![
            OrderLine::simple(target, 2),
            OrderLine::simple(other, 9),
            OrderLine::simple(target, 3),
        ]);
        assert_eq!(order.quantity_of(target), 5);
        assert_eq!(order.quantity_of(ProductId::new()), 0);
    }

    #[test]
    fn line_matches_by_variation_reference() {
        let parent = ProductId::new();
        let variation = ProductId::new();
        let line = OrderLine {
            product_id: parent,
            variant_id: Some(variation),
            quantity: 1,
        };
        assert!(line.references(parent));
        assert!(line.references(variation));
        assert!(!line.references(ProductId::new()));
    }
}
