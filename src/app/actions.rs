//! Side effects requested by the event handler.
//!
//! The catalog engine never touches the host directly. [`handle_event`]
//! returns a list of [`Action`]s, and the host (a browser shell, a terminal
//! front end, or the bundled command shell) executes them in order.
//!
//! [`handle_event`]: super::handle_event

use serde::Serialize;

/// Commands for the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Start listening for the detail view keys (arrows and Escape).
    ///
    /// Emitted exactly once when a detail view opens.
    RegisterKeyBindings,

    /// Stop listening for the detail view keys.
    ///
    /// Emitted exactly once when the detail view closes.
    ReleaseKeyBindings,

    /// Start loading an image. The host answers with `ImageLoaded` or
    /// `ImageFailed`.
    LoadImage {
        /// Image location as stored in the catalog.
        src: String,
    },
}
