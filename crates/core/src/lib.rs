//! `discvr-core` — shared building blocks for the catalog and AI crates.
//!
//! Pure primitives only (no IO, no HTTP).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
