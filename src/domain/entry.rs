//! Catalog entry domain model.
//!
//! A [`CatalogEntry`] is one project or certificate shown in the portfolio.
//! Projects and certificates share the same shape for filtering purposes; the
//! certificate-only fields are optional and ignored by the engine.

use super::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subcategory assigned to entries that do not declare one.
pub const OTHER_SUBCATEGORY: &str = "Other";

/// Stable identifier of a catalog entry.
///
/// Source data uses either integers or strings; both are accepted and
/// compared by variant and value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(i64),
    Text(String),
}

impl EntryId {
    /// Parses a user-supplied token, preferring the numeric form.
    ///
    /// ```
    /// use folio_catalog::EntryId;
    ///
    /// assert_eq!(EntryId::parse("7"), EntryId::Number(7));
    /// assert_eq!(EntryId::parse("cert-1"), EntryId::Text("cert-1".to_string()));
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        token
            .parse::<i64>()
            .map_or_else(|_| Self::Text(token.to_string()), Self::Number)
    }
}

impl From<i64> for EntryId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for EntryId {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Whether an entry is a portfolio project or a certificate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    #[default]
    Project,
    Certificate,
}

/// A single project or certificate record.
///
/// # Fields
///
/// - `id`: unique identifier, used for de-duplication and detail lookup
/// - `title`, `description`, `technologies`: searchable text
/// - `category` / `subcategory`: two-level classification
/// - `image` / `gallery`: primary image and additional images
/// - `image_labels`: optional caption per image of the effective sequence
/// - `issuer`, `date`, `link`, `credential_id`: certificate details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_labels: Vec<String>,
    #[serde(default)]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

impl CatalogEntry {
    /// Creates a project entry with only the required fields set.
    ///
    /// ```
    /// use folio_catalog::{CatalogEntry, Category};
    ///
    /// let entry = CatalogEntry::new(1, "Portfolio Site", Category::Web)
    ///     .with_technologies(["React", "Tailwind"])
    ///     .with_image("site.png");
    /// assert_eq!(entry.subcategory_or_other(), "Other");
    /// assert_eq!(entry.effective_images(), vec!["site.png".to_string()]);
    /// ```
    pub fn new(id: impl Into<EntryId>, title: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category,
            subcategory: None,
            technologies: Vec::new(),
            image: None,
            gallery: Vec::new(),
            image_labels: Vec::new(),
            kind: EntryKind::Project,
            issuer: None,
            date: None,
            link: None,
            credential_id: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    #[must_use]
    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_gallery<I, S>(mut self, gallery: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gallery = gallery.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_image_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the entry as a certificate issued by `issuer`.
    #[must_use]
    pub fn as_certificate(mut self, issuer: impl Into<String>) -> Self {
        self.kind = EntryKind::Certificate;
        self.issuer = Some(issuer.into());
        self
    }

    /// The subcategory used for filtering, `"Other"` when none is declared.
    #[must_use]
    pub fn subcategory_or_other(&self) -> &str {
        self.subcategory.as_deref().unwrap_or(OTHER_SUBCATEGORY)
    }

    /// Returns the image sequence shown in the detail view.
    ///
    /// The primary image comes first; gallery images follow in order with
    /// any repeat of the primary image skipped. An entry without a primary
    /// image yields its gallery as-is.
    #[must_use]
    pub fn effective_images(&self) -> Vec<String> {
        let mut images = Vec::with_capacity(self.gallery.len() + 1);
        if let Some(primary) = &self.image {
            images.push(primary.clone());
        }
        images.extend(
            self.gallery
                .iter()
                .filter(|img| self.image.as_ref() != Some(*img))
                .cloned(),
        );
        images
    }

    /// Caption for the image at `index` of the effective sequence.
    ///
    /// Falls back to `"<title> - Image N"` (1-based) when no label exists.
    #[must_use]
    pub fn image_label(&self, index: usize) -> String {
        self.image_labels
            .get(index)
            .filter(|label| !label.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| format!("{} - Image {}", self.title, index + 1))
    }

    /// Case-insensitive substring match against title, description and
    /// technologies. `needle` must already be folded with [`fold_case`]; an
    /// empty needle matches everything.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        fold_case(&self.title).contains(needle)
            || fold_case(&self.description).contains(needle)
            || self
                .technologies
                .iter()
                .any(|tech| fold_case(tech).contains(needle))
    }
}

/// Lower-cases `text` one character at a time.
///
/// Search and title highlighting both fold through here, so a character
/// whose lowercase form is several characters (`İ`) expands the same way in
/// both.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}
