//! Catalog loading and storage.
//!
//! The catalog is an immutable, ordered list of entries supplied once per
//! session. This module defines where that list comes from
//! ([`CatalogSource`]) and where it lives while the view is mounted
//! ([`CatalogStore`]).
//!
//! # Modules
//!
//! - `source`: Source trait and the in-memory implementation
//! - `json`: JSON file source
//! - `store`: Immutable store with entry validation and a memoized de-duplicated view

pub mod json;
pub mod source;
pub mod store;

pub use json::JsonCatalog;
pub use source::{CatalogSource, StaticCatalog};
pub use store::CatalogStore;
