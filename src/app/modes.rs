//! Presentation mode for the catalog listing.
//!
//! The view mode is a layout hint for the presentation layer. Unlike the
//! filter fields it does not change which entries are shown, so switching
//! it leaves the current page untouched.

use serde::Serialize;

/// How the current page of entries is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Card grid with thumbnails.
    #[default]
    Grid,

    /// Compact list with title, category and technologies.
    List,
}

impl ViewMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}
