//! Domain layer for the catalog engine.
//!
//! This module contains the core record types, independent of how the
//! catalog is loaded or presented.
//!
//! # Organization
//!
//! - [`category`]: Closed category enumeration and its display metadata
//! - [`entry`]: Catalog entry model (projects and certificates)
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use folio_catalog::domain::{CatalogEntry, Category};
//!
//! let entry = CatalogEntry::new("cert-1", "Content Marketing", Category::Education)
//!     .as_certificate("Digital Marketing Institute");
//! assert_eq!(entry.subcategory_or_other(), "Other");
//! ```

pub mod category;
pub mod entry;
pub mod error;

pub use category::Category;
pub use entry::{fold_case, CatalogEntry, EntryId, EntryKind, OTHER_SUBCATEGORY};
pub use error::{CatalogError, Result};
