//! `forgeabc-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! named decimal types, identifiers and the domain error model.

pub mod decimal;
pub mod error;
pub mod id;

pub use decimal::{Money, Percentage, Quantity};
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use rust_decimal::Decimal;
