//! The limit evaluator: policy + purchase history + requested quantity.

use maxqty_catalog::PolicyStore;
use maxqty_core::{CustomerIdentity, ProductId};
use maxqty_orders::{OrderStore, total_purchased};

use crate::decision::{Allowance, LimitDecision};

/// Combines the product's cap policy, the customer's historical purchase
/// total and the requested quantity into an admit/deny decision with
/// remaining allowance.
///
/// Every call reads policy and order storage fresh, so a decision reflects
/// the state of both at call time. Two near-simultaneous evaluations for the
/// same customer are not serialized against each other; closing that
/// time-of-check gap is a deployment concern, not handled here.
#[derive(Debug)]
pub struct LimitEvaluator<P, S> {
    policies: P,
    orders: S,
}

impl<P, S> LimitEvaluator<P, S>
where
    P: PolicyStore,
    S: OrderStore,
{
    pub fn new(policies: P, orders: S) -> Self {
        Self { policies, orders }
    }

    /// Evaluate a request of `requested` units of `product_id`, with
    /// `already_held` units of the same product in the customer's active
    /// cart.
    ///
    /// Uncapped products short-circuit to unrestricted without touching
    /// order storage. For scoped caps, an anonymous customer or an
    /// unavailable order store degrades to fail-open rather than blocking
    /// the purchase flow; only an actual cap violation denies.
    pub fn evaluate(
        &self,
        identity: &CustomerIdentity,
        product_id: ProductId,
        requested: u64,
        already_held: u64,
    ) -> LimitDecision {
        let Some(policy) = self.policies.policy_for(product_id) else {
            return LimitDecision::unrestricted();
        };
        let Some(cap) = policy.max_quantity() else {
            return LimitDecision::unrestricted();
        };
        let cap = u64::from(cap);

        let prior = if policy.is_per_customer() {
            if identity.is_anonymous() {
                tracing::debug!(
                    %product_id,
                    "scoped cap evaluated for anonymous customer, treating as unrestricted"
                );
                return LimitDecision::unrestricted();
            }
            match total_purchased(&self.orders, identity, product_id) {
                Ok(total) => total,
                Err(err) => {
                    // Fail open on the historical read; only a confirmed cap
                    // violation may block a purchase.
                    tracing::warn!(
                        %product_id,
                        error = %err,
                        "purchase history unavailable, treating prior total as zero"
                    );
                    0
                }
            }
        } else {
            0
        };

        let consumed = prior.saturating_add(already_held);
        LimitDecision {
            allowed: consumed.saturating_add(requested) <= cap,
            remaining: Allowance::Limited(cap.saturating_sub(consumed)),
        }
    }
}
