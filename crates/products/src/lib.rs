//! Product catalog domain module.
//!
//! The catalog is loaded once at startup and never mutated. Querying and
//! reconciliation are pure functions of the catalog and their inputs
//! (no IO, no HTTP).

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, ProductFilter};
pub use product::Product;
