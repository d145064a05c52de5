//! Admit/deny evaluation of requested quantities against cap policies.
//!
//! The evaluator is the single decision point the enforcement checkpoints
//! consult. It is deterministic given the current policy and order storage
//! state, and it never caches: every call reads both fresh.

pub mod decision;
pub mod evaluator;

pub use decision::{Allowance, LimitDecision};
pub use evaluator::LimitEvaluator;
