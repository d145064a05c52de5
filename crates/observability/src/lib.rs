//! Tracing/logging setup shared by hosts of the quantity-cap engine.
//!
//! The engine itself only emits `tracing` events (degraded aggregation,
//! anonymous scoped evaluations); this crate wires up a subscriber for
//! binaries and integration harnesses that want to see them.

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init();
}
