//! Keyboard shortcuts for the detail view.
//!
//! While a detail view is open, ArrowLeft/ArrowRight step through the images
//! and Escape closes it. The shortcuts are global (not tied to a focused
//! widget), so the host must register them when the view opens and release
//! them when it closes. [`KeyBindings`] tracks that lifetime and produces the
//! register/release actions exactly once each.

use super::actions::Action;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Keys the detail view reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// What a key does in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCommand {
    Previous,
    Next,
    Close,
}

impl Key {
    #[must_use]
    pub const fn command(self) -> GalleryCommand {
        match self {
            Self::ArrowLeft => GalleryCommand::Previous,
            Self::ArrowRight => GalleryCommand::Next,
            Self::Escape => GalleryCommand::Close,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::Escape => "Escape",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a key name is not one of the detail view keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key `{0}` is not bound in the detail view")]
pub struct UnboundKey(pub String);

impl FromStr for Key {
    type Err = UnboundKey;

    /// Accepts DOM-style key names plus the short forms `left`, `right`
    /// and `esc`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arrowleft" | "left" => Ok(Self::ArrowLeft),
            "arrowright" | "right" => Ok(Self::ArrowRight),
            "escape" | "esc" => Ok(Self::Escape),
            _ => Err(UnboundKey(s.to_string())),
        }
    }
}

/// Tracks whether the detail view shortcuts are registered with the host.
///
/// # Examples
///
/// ```
/// use folio_catalog::app::keyboard::KeyBindings;
/// use folio_catalog::Action;
///
/// let mut bindings = KeyBindings::default();
/// assert_eq!(bindings.acquire(), Some(Action::RegisterKeyBindings));
/// assert_eq!(bindings.acquire(), None);
/// assert_eq!(bindings.release(), Some(Action::ReleaseKeyBindings));
/// assert_eq!(bindings.release(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyBindings {
    active: bool,
}

impl KeyBindings {
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.active
    }

    /// Returns the registration action unless the bindings are already active.
    pub fn acquire(&mut self) -> Option<Action> {
        if self.active {
            return None;
        }
        self.active = true;
        tracing::debug!("detail view key bindings registered");
        Some(Action::RegisterKeyBindings)
    }

    /// Returns the release action if the bindings are active.
    pub fn release(&mut self) -> Option<Action> {
        if !self.active {
            return None;
        }
        self.active = false;
        tracing::debug!("detail view key bindings released");
        Some(Action::ReleaseKeyBindings)
    }
}
