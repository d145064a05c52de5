//! Decision values produced by the evaluator.

use serde::{Deserialize, Serialize};

/// Quantity still purchasable before a cap is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Allowance {
    /// No cap applies to this evaluation.
    Unbounded,
    /// At most this many more units; never negative (clamped at zero).
    Limited(u64),
}

impl Allowance {
    pub fn is_unbounded(self) -> bool {
        matches!(self, Allowance::Unbounded)
    }

    /// The bounded remaining quantity, if any.
    pub fn limit(self) -> Option<u64> {
        match self {
            Allowance::Unbounded => None,
            Allowance::Limited(n) => Some(n),
        }
    }

    /// Clamp a caller-supplied maximum to this allowance.
    pub fn clamp_max(self, max: u64) -> u64 {
        match self {
            Allowance::Unbounded => max,
            Allowance::Limited(n) => max.min(n),
        }
    }
}

/// Outcome of a single cap evaluation.
///
/// Ephemeral: computed per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitDecision {
    pub allowed: bool,
    pub remaining: Allowance,
}

impl LimitDecision {
    /// Decision for evaluations where no cap applies (policy unset, or a
    /// scoped cap with no identity to scope by).
    pub fn unrestricted() -> Self {
        Self {
            allowed: true,
            remaining: Allowance::Unbounded,
        }
    }
}
