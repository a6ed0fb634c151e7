//! JSON file catalog source.
//!
//! Reads the static entry list from a human-readable JSON file. Two layouts
//! are accepted: a bare array of entries, or a versioned object with separate
//! `projects` and `certificates` arrays.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "projects": [
//!     {
//!       "id": 1,
//!       "title": "Portfolio Site",
//!       "category": "web",
//!       "subcategory": "Portfolio",
//!       "technologies": ["React"],
//!       "image": "portfolio.png",
//!       "gallery": ["portfolio-2.png"]
//!     }
//!   ],
//!   "certificates": [
//!     {
//!       "id": "cert-1",
//!       "title": "Content Marketing",
//!       "category": "education",
//!       "issuer": "Digital Marketing Institute",
//!       "image": "content-marketing.png"
//!     }
//!   ]
//! }
//! ```

use crate::catalog::source::CatalogSource;
use crate::domain::error::{CatalogError, Result};
use crate::domain::{CatalogEntry, EntryKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Versioned catalog container.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogData {
    /// Version of the file format.
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default)]
    projects: Vec<CatalogEntry>,

    /// Entries here are treated as certificates regardless of their `kind`.
    #[serde(default)]
    certificates: Vec<CatalogEntry>,
}

const fn default_version() -> u32 {
    1
}

/// JSON file catalog.
///
/// The file is read on every [`CatalogSource::load_entries`] call; callers
/// load once per session and hand the result to
/// [`CatalogStore`](crate::catalog::CatalogStore).
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
}

impl JsonCatalog {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Parses catalog JSON from a string.
    ///
    /// A document starting with `[` is read as a bare entry array, anything
    /// else as the versioned object. Category rules are checked later by
    /// [`CatalogStore::load`](crate::catalog::CatalogStore::load).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON, unknown top-level
    /// keys, and entries missing required fields. The message carries serde's
    /// field name and position.
    pub fn parse(contents: &str) -> Result<Vec<CatalogEntry>> {
        let entries = if contents.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<CatalogEntry>>(contents).map_err(parse_error)?
        } else {
            let data: CatalogData = serde_json::from_str(contents).map_err(parse_error)?;
            tracing::debug!(
                version = data.version,
                projects = data.projects.len(),
                certificates = data.certificates.len(),
                "parsed versioned catalog"
            );
            let mut entries = data.projects;
            entries.extend(data.certificates.into_iter().map(|mut cert| {
                cert.kind = EntryKind::Certificate;
                cert
            }));
            entries
        };

        Ok(entries)
    }
}

impl CatalogSource for JsonCatalog {
    fn load_entries(&self) -> Result<Vec<CatalogEntry>> {
        let _span = tracing::debug_span!("json_load_entries", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let entries = Self::parse(&contents)?;

        tracing::debug!(count = entries.len(), "catalog loaded");
        Ok(entries)
    }
}

fn parse_error(e: serde_json::Error) -> CatalogError {
    CatalogError::Parse(format!("failed to parse catalog JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, EntryId};

    #[test]
    fn parses_bare_array() {
        let entries = JsonCatalog::parse(
            r#"[{"id": 1, "title": "Portfolio Site", "category": "web", "technologies": ["React"]}]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, Category::Web);
    }

    #[test]
    fn versioned_file_appends_certificates_after_projects() {
        let entries = JsonCatalog::parse(
            r#"{
                "version": 1,
                "projects": [{"id": 1, "title": "Site", "category": "web"}],
                "certificates": [{"id": "cert-1", "title": "VA", "category": "education", "issuer": "Amazon"}]
            }"#,
        )
        .unwrap();
        assert_eq!(entries[0].kind, EntryKind::Project);
        assert_eq!(entries[1].id, EntryId::Text("cert-1".to_string()));
        assert_eq!(entries[1].kind, EntryKind::Certificate);
    }

    #[test]
    fn duplicate_ids_are_tolerated() {
        let entries = JsonCatalog::parse(
            r#"[{"id": 1, "title": "A", "category": "web"}, {"id": 1, "title": "B", "category": "demo"}]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(JsonCatalog::parse("{not json"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn misspelled_top_level_key_is_reported() {
        let err = JsonCatalog::parse(
            r#"{"version": 1, "project": [{"id": 1, "title": "A", "category": "web"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().contains("unknown field `project`"), "{err}");
    }

    #[test]
    fn entry_without_title_names_the_field() {
        let bare = JsonCatalog::parse(r#"[{"id": 1, "category": "web"}]"#).unwrap_err();
        assert!(bare.to_string().contains("missing field `title`"), "{bare}");

        let versioned =
            JsonCatalog::parse(r#"{"projects": [{"id": 1, "category": "web"}]}"#).unwrap_err();
        assert!(versioned.to_string().contains("missing field `title`"), "{versioned}");
    }

    #[test]
    fn leading_whitespace_before_array() {
        let entries =
            JsonCatalog::parse("\n  [{\"id\": 1, \"title\": \"A\", \"category\": \"demo\"}]").unwrap();
        assert_eq!(entries[0].category, Category::Demo);
    }
}
