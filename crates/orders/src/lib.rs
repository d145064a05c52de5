//! Historical order read model and the cumulative purchase aggregator.
//!
//! The engine treats order storage as a read-only capability: given an
//! identity channel and a status filter it returns matching orders, and the
//! aggregator folds their line quantities into a per-customer total.

pub mod aggregator;
pub mod order;
pub mod store;

pub use aggregator::{AggregationUnavailable, total_purchased};
pub use order::{OrderLine, OrderRecord, OrderStatus};
pub use store::{InMemoryOrderStore, OrderStore, OrderStoreError};
