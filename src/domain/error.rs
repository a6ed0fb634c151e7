//! Error types for the catalog engine.
//!
//! The filter, pagination and gallery code is total over its inputs and never
//! returns an error. Fallibility lives at the edges only: reading a catalog
//! from disk, parsing configuration, and parsing shell commands. Those paths
//! return [`CatalogError`] through the [`Result`] alias.

use thiserror::Error;

/// The main error type for catalog loading and configuration.
///
/// # Examples
///
/// ```
/// use folio_catalog::CatalogError;
///
/// fn validate_page_size(size: usize) -> Result<usize, CatalogError> {
///     if size == 0 {
///         return Err(CatalogError::Config("page_size must be positive".to_string()));
///     }
///     Ok(size)
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading a catalog or configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid catalog JSON.
    #[error("Catalog parse error: {0}")]
    Parse(String),

    /// An entry violates a data invariant (for example, it claims the `All`
    /// category, which is reserved for the "no filter" sentinel).
    #[error("Invalid catalog entry {id}: {reason}")]
    InvalidEntry {
        /// Identifier of the offending entry, rendered for display.
        id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Configuration is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A shell command could not be parsed.
    #[error("Unrecognized command: {0}")]
    Command(String),
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
