//! Enforcement checkpoints in the purchase flow.
//!
//! Three call sites consult the limit evaluator: the quantity-input
//! constraint shown on the product page, add-to-cart validation, and
//! whole-cart checkout validation. Checkpoints are stateless consumers of
//! the evaluator; they always return decision values, never errors, so
//! nothing propagates into the surrounding purchase flow.

pub mod cart;
pub mod checkpoints;
pub mod response;

pub use cart::{CartLine, quantity_in_cart};
pub use checkpoints::{CapRejection, CheckoutReport, CheckpointDecision, EnforcementCheckpoints};
pub use response::{CartItemView, QuantityLimits, annotate_cart_items};
