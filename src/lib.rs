//! Folio Catalog: the browsing engine behind a portfolio's project and
//! certificate pages.
//!
//! The engine provides:
//! - Two-level filtering by category and subcategory
//! - Case-insensitive text search over title, description and technologies
//! - De-duplication of entries sharing an id
//! - Fixed-size pagination with a collapsing page bar
//! - A detail view gallery with wraparound navigation, zoom and load tracking
//! - Keyboard shortcuts whose registration lifetime matches the detail view

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Command Shell (main.rs, shell)                     │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Query state and gallery state                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Engine        │
//! │ (ui/)         │   │ (catalog/)    │   │ (engine/)     │
//! │ - View models │   │ - JSON source │   │ - Filtering   │
//! │               │   │ - Entry store │   │ - Pagination  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Path expansion (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Entry and category model (domain/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Catalog sources and the immutable entry store
//! - [`domain`]: Core domain types (entries, categories, errors)
//! - [`engine`]: Pure filtering and pagination functions
//! - [`infrastructure`]: Platform utilities (paths)
//! - [`shell`]: Line-oriented command parser for the bundled binary
//! - [`ui`]: View model types
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! ```toml
//! # folio.toml
//! catalog_path = "~/site/catalog.json"
//! page_size = 6
//! trace_level = "info"
//! ```
//!
//! # Examples
//!
//! ```
//! use folio_catalog::catalog::CatalogStore;
//! use folio_catalog::{handle_event, initialize, CatalogEntry, Category, Config, Event};
//!
//! let store = CatalogStore::new(vec![
//!     CatalogEntry::new(1, "Kitchen Hood", Category::Technical)
//!         .with_subcategory("Kitchen Equipment"),
//!     CatalogEntry::new(2, "Portfolio Site", Category::Web),
//! ]);
//! let mut state = initialize(&Config::default(), store);
//!
//! for event in [
//!     Event::SetCategory(Category::Technical),
//!     Event::SetSubcategory("Kitchen Equipment".to_string()),
//! ] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event);
//! }
//!
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.cards.len(), 1);
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod shell;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Key, QueryState, ViewMode};
pub use domain::{CatalogEntry, CatalogError, Category, EntryId, EntryKind, Result};
pub use ui::CatalogViewModel;

use catalog::CatalogStore;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Engine configuration.
///
/// Built either from a string map ([`Config::from_map`], lenient, for hosts
/// that hand over loose key/value settings) or from a TOML file
/// ([`Config::from_toml_file`], strict).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog JSON file. `~` is expanded to the home directory.
    pub catalog_path: Option<PathBuf>,

    /// Entries per page. Default: 6
    pub page_size: usize,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Write logs to this file instead of stderr.
    pub trace_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: app::DEFAULT_PAGE_SIZE,
            trace_level: None,
            trace_file: None,
        }
    }
}

/// On-disk form of [`Config`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    catalog_path: Option<String>,
    page_size: Option<usize>,
    trace_level: Option<String>,
    trace_file: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog_path`, `trace_file`: `~`-expanded paths
    /// - `page_size`: positive integer, falls back to 6 when missing or invalid
    /// - `trace_level`: passed through
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use folio_catalog::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "9".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 9);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(app::DEFAULT_PAGE_SIZE);

        Self {
            catalog_path: config
                .get("catalog_path")
                .map(|p| infrastructure::expand_tilde(p)),
            page_size,
            trace_level: config.get("trace_level").cloned(),
            trace_file: config
                .get("trace_file")
                .map(|p| infrastructure::expand_tilde(p)),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] for malformed TOML, unknown keys, or
    /// a `page_size` of 0.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| CatalogError::Config(e.to_string()))?;

        let page_size = match file.page_size {
            Some(0) => {
                return Err(CatalogError::Config(
                    "page_size must be at least 1".to_string(),
                ))
            }
            Some(size) => size,
            None => app::DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            catalog_path: file.catalog_path.as_deref().map(infrastructure::expand_tilde),
            page_size,
            trace_level: file.trace_level,
            trace_file: file.trace_file.as_deref().map(infrastructure::expand_tilde),
        })
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Config::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }
}

/// Creates the initial application state for a loaded catalog.
///
/// # Example
///
/// ```
/// use folio_catalog::catalog::CatalogStore;
/// use folio_catalog::{initialize, Config};
///
/// let config = Config {
///     page_size: 3,
///     ..Default::default()
/// };
/// let state = initialize(&config, CatalogStore::default());
/// assert_eq!(state.query.page_size(), 3);
/// assert!(state.filtered.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config, store: CatalogStore) -> AppState {
    tracing::debug!(
        entries = store.entries().len(),
        page_size = config.page_size,
        "initializing catalog state"
    );
    AppState::new(store, config.page_size)
}
