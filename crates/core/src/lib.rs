//! `maxqty-core` — domain foundation for the quantity-cap engine.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): strongly-typed identifiers, the domain error model, and the
//! customer identity used for per-customer cap evaluation.

pub mod error;
pub mod id;
pub mod identity;

pub use error::{DomainError, DomainResult};
pub use id::{AccountId, OrderId, ProductId};
pub use identity::{CustomerIdentity, EmailAddress};
