//! The three evaluator call sites in the purchase flow.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use maxqty_catalog::PolicyStore;
use maxqty_core::{CustomerIdentity, ProductId};
use maxqty_limits::{Allowance, LimitEvaluator};
use maxqty_orders::OrderStore;

use crate::cart::{CartLine, quantity_in_cart};

/// Numeric payload of a cap rejection.
///
/// Message wording and pluralization are a localization concern of the
/// surrounding storefront; the engine supplies only the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapRejection {
    pub product_id: ProductId,
    pub requested: u64,
    pub remaining: u64,
}

/// Outcome of a single-product checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckpointDecision {
    Allowed,
    Rejected(CapRejection),
}

impl CheckpointDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CheckpointDecision::Allowed)
    }
}

/// Outcome of whole-cart checkout validation: every violating line, in cart
/// order. Checkout may proceed only when the report is clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReport {
    pub rejections: Vec<CapRejection>,
}

impl CheckoutReport {
    pub fn is_clear(&self) -> bool {
        self.rejections.is_empty()
    }
}

/// The checkpoints invoked synchronously by the purchase-flow orchestrator.
///
/// All inputs (identity, product, quantities, cart) are explicit
/// parameters; nothing is discovered from ambient state.
#[derive(Debug)]
pub struct EnforcementCheckpoints<P, S> {
    evaluator: LimitEvaluator<P, S>,
}

impl<P, S> EnforcementCheckpoints<P, S>
where
    P: PolicyStore,
    S: OrderStore,
{
    pub fn new(evaluator: LimitEvaluator<P, S>) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &LimitEvaluator<P, S> {
        &self.evaluator
    }

    /// Upper bound for the storefront quantity input.
    ///
    /// Asks "how much may this customer still request" (`requested = 0`) and
    /// clamps the storefront-supplied maximum to the remaining allowance.
    /// Product-page callers pass `already_held = 0`; cart-page callers pass
    /// the line's current quantity.
    pub fn selectable_max(
        &self,
        identity: &CustomerIdentity,
        product_id: ProductId,
        storefront_max: u64,
        already_held: u64,
    ) -> u64 {
        let decision = self.evaluator.evaluate(identity, product_id, 0, already_held);
        decision.remaining.clamp_max(storefront_max)
    }

    /// Validate a single add-to-cart request.
    ///
    /// The quantity of the same product already in `cart` counts toward the
    /// cap, so repeated small adds cannot walk past the limit.
    pub fn validate_add_to_cart(
        &self,
        identity: &CustomerIdentity,
        product_id: ProductId,
        requested: u64,
        cart: &[CartLine],
    ) -> CheckpointDecision {
        let already_held = quantity_in_cart(cart, product_id);
        self.decide(identity, product_id, requested, already_held)
    }

    /// Validate every line of the cart at checkout.
    ///
    /// Lines of the same product accumulate: the first line of a product is
    /// evaluated on its own, later lines see the quantity of the earlier
    /// ones as already held, so a cap cannot be bypassed by splitting it
    /// across lines. All violations are collected; none stops the walk.
    pub fn validate_checkout(
        &self,
        identity: &CustomerIdentity,
        cart: &[CartLine],
    ) -> CheckoutReport {
        let mut held_so_far: HashMap<ProductId, u64> = HashMap::new();
        let mut rejections = Vec::new();

        for line in cart {
            let already_held = held_so_far.get(&line.product_id).copied().unwrap_or(0);
            if let CheckpointDecision::Rejected(rejection) =
                self.decide(identity, line.product_id, line.quantity, already_held)
            {
                rejections.push(rejection);
            }
            let held = held_so_far.entry(line.product_id).or_insert(0);
            *held = held.saturating_add(line.quantity);
        }

        CheckoutReport { rejections }
    }

    fn decide(
        &self,
        identity: &CustomerIdentity,
        product_id: ProductId,
        requested: u64,
        already_held: u64,
    ) -> CheckpointDecision {
        let decision = self
            .evaluator
            .evaluate(identity, product_id, requested, already_held);
        if decision.allowed {
            return CheckpointDecision::Allowed;
        }
        // A denial always carries a bounded remaining allowance.
        let remaining = match decision.remaining {
            Allowance::Limited(n) => n,
            Allowance::Unbounded => 0,
        };
        CheckpointDecision::Rejected(CapRejection {
            product_id,
            requested,
            remaining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maxqty_catalog::{InMemoryPolicyStore, QuantityPolicy};
    use maxqty_core::EmailAddress;
    use maxqty_orders::InMemoryOrderStore;

    fn shopper() -> CustomerIdentity {
        CustomerIdentity::from_email(EmailAddress::parse("shopper@example.com").unwrap())
    }

    fn checkpoints_with_flat_cap(
        cap: u32,
    ) -> (
        EnforcementCheckpoints<InMemoryPolicyStore, InMemoryOrderStore>,
        ProductId,
    ) {
        let policies = InMemoryPolicyStore::new();
        let product_id = ProductId::new();
        policies.put_policy(QuantityPolicy::capped(product_id, cap, false).unwrap());
        let evaluator = LimitEvaluator::new(policies, InMemoryOrderStore::new());
        (EnforcementCheckpoints::new(evaluator), product_id)
    }

    #[test]
    fn selectable_max_clamps_to_remaining_allowance() {
        let (checkpoints, product_id) = checkpoints_with_flat_cap(5);
        let identity = shopper();

        // Storefront would allow 99; the cap wins.
        assert_eq!(checkpoints.selectable_max(&identity, product_id, 99, 0), 5);
        // A tighter storefront bound wins over the cap.
        assert_eq!(checkpoints.selectable_max(&identity, product_id, 3, 0), 3);
        // Cart contents shrink the allowance.
        assert_eq!(checkpoints.selectable_max(&identity, product_id, 99, 4), 1);
        // Uncapped product: storefront max passes through untouched.
        assert_eq!(
            checkpoints.selectable_max(&identity, ProductId::new(), 99, 0),
            99
        );
    }

    #[test]
    fn add_to_cart_counts_quantity_already_in_cart() {
        let (checkpoints, product_id) = checkpoints_with_flat_cap(5);
        let identity = shopper();
        let cart = [CartLine::new(product_id, 3)];

        assert!(checkpoints
            .validate_add_to_cart(&identity, product_id, 2, &cart)
            .is_allowed());

        match checkpoints.validate_add_to_cart(&identity, product_id, 3, &cart) {
            CheckpointDecision::Rejected(rejection) => {
                assert_eq!(rejection.product_id, product_id);
                assert_eq!(rejection.requested, 3);
                assert_eq!(rejection.remaining, 2);
            }
            CheckpointDecision::Allowed => panic!("expected a rejection"),
        }
    }

    #[test]
    fn checkout_accumulates_lines_of_the_same_product() {
        // Scenario D: two lines, each under the cap alone, over it together.
        let (checkpoints, product_id) = checkpoints_with_flat_cap(5);
        let identity = shopper();
        let cart = [CartLine::new(product_id, 4), CartLine::new(product_id, 3)];

        let report = checkpoints.validate_checkout(&identity, &cart);
        assert!(!report.is_clear());
        assert_eq!(report.rejections.len(), 1);
        assert_eq!(report.rejections[0].requested, 3);
        assert_eq!(report.rejections[0].remaining, 1);

        // Either line alone, given the other as held, is also rejected.
        let other_line = [CartLine::new(product_id, 4)];
        assert!(!checkpoints
            .validate_add_to_cart(&identity, product_id, 3, &other_line)
            .is_allowed());
    }

    #[test]
    fn checkout_collects_all_violations_without_stopping() {
        let policies = InMemoryPolicyStore::new();
        let capped_a = ProductId::new();
        let capped_b = ProductId::new();
        let uncapped = ProductId::new();
        policies.put_policy(QuantityPolicy::capped(capped_a, 2, false).unwrap());
        policies.put_policy(QuantityPolicy::capped(capped_b, 1, false).unwrap());
        let evaluator = LimitEvaluator::new(policies, InMemoryOrderStore::new());
        let checkpoints = EnforcementCheckpoints::new(evaluator);

        let cart = [
            CartLine::new(capped_a, 3),
            CartLine::new(uncapped, 50),
            CartLine::new(capped_b, 2),
        ];
        let report = checkpoints.validate_checkout(&shopper(), &cart);
        assert_eq!(report.rejections.len(), 2);
        assert_eq!(report.rejections[0].product_id, capped_a);
        assert_eq!(report.rejections[1].product_id, capped_b);
    }

    #[test]
    fn clear_checkout_report_for_a_cart_within_caps() {
        let (checkpoints, product_id) = checkpoints_with_flat_cap(5);
        let cart = [CartLine::new(product_id, 2), CartLine::new(product_id, 3)];
        let report = checkpoints.validate_checkout(&shopper(), &cart);
        assert!(report.is_clear());
    }
}
