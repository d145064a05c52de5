//! Per-product quantity cap configuration, as owned by the product catalog.
//!
//! The enforcement engine only ever reads policies; the write path exists
//! for catalog administration and for wiring up tests.

pub mod policy;
pub mod store;

pub use policy::QuantityPolicy;
pub use store::{InMemoryPolicyStore, PolicyStore};
