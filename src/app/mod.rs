//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host (a browser shell, the bundled command
//! shell, or tests) and the domain/engine layers. It implements the
//! event-driven architecture behind the interactive catalog.
//!
//! # Architecture
//!
//! ```text
//! Host Input → Events → Event Handler → State Mutations → Actions → Host
//!                           ↑                                  ↓
//!                           └────── ImageLoaded / ImageFailed ─┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`gallery`]: Detail view state machine
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keyboard`]: Detail view shortcuts and their registration lifetime
//! - [`modes`]: Grid/list presentation mode
//! - [`query`]: Filter, search and page selections
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod gallery;
pub mod handler;
pub mod keyboard;
pub mod modes;
pub mod query;
pub mod state;

pub use actions::Action;
pub use gallery::{Gallery, OpenGallery};
pub use handler::{handle_event, Event};
pub use keyboard::{GalleryCommand, Key, KeyBindings};
pub use modes::ViewMode;
pub use query::{QueryState, ALL_SUBCATEGORIES, DEFAULT_PAGE_SIZE};
pub use state::AppState;
