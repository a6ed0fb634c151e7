//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! host notifications, translating them into state changes and action
//! sequences. It is the single entry point through which the catalog state
//! changes.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host (clicks, typing, key presses, image loads)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for the host to execute
//!
//! # Event Types
//!
//! - **Filtering**: `SetCategory`, `SetSubcategory`, `SetSearchQuery`,
//!   `SearchChar`, `Backspace`, `ClearSearch`
//! - **Paging**: `SetPage`, `NextPage`, `PreviousPage`, `ToggleViewMode`
//! - **Detail view**: `OpenDetail`, `CloseDetail`, `NextImage`,
//!   `PreviousImage`, `JumpTo`, `ToggleZoom`, `Key`
//! - **Host notifications**: `ImageLoaded`, `ImageFailed`
//!
//! # Example
//!
//! ```
//! use folio_catalog::catalog::CatalogStore;
//! use folio_catalog::{handle_event, Action, AppState, CatalogEntry, Category, EntryId, Event};
//!
//! let store = CatalogStore::new(vec![
//!     CatalogEntry::new(1, "Portfolio Site", Category::Web).with_image("site.png"),
//! ]);
//! let mut state = AppState::new(store, 6);
//!
//! let (should_render, actions) = handle_event(&mut state, &Event::OpenDetail(EntryId::from(1)));
//! assert!(should_render);
//! assert_eq!(actions[0], Action::RegisterKeyBindings);
//! ```

use super::actions::Action;
use super::gallery::Gallery;
use super::keyboard::{GalleryCommand, Key};
use super::state::AppState;
use crate::domain::{Category, EntryId};

/// Events triggered by user input or the host environment.
///
/// Each event is a discrete occurrence processed to completion before the
/// next one, so state transitions are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Selects a category; resets subcategory and page.
    SetCategory(Category),
    /// Selects a subcategory (`"All"` clears it); resets page.
    SetSubcategory(String),
    /// Replaces the search query; resets page.
    SetSearchQuery(String),
    /// Appends a character to the search query.
    SearchChar(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Empties the search query.
    ClearSearch,

    /// Jumps to a 1-based page, clamped to the available pages.
    SetPage(usize),
    NextPage,
    PreviousPage,
    /// Switches between grid and list layout.
    ToggleViewMode,

    /// Opens the detail view on an entry.
    OpenDetail(EntryId),
    /// Closes the detail view.
    CloseDetail,
    NextImage,
    PreviousImage,
    /// Jumps to a 0-based image index (thumbnail click).
    JumpTo(usize),
    ToggleZoom,
    /// A registered detail view key was pressed.
    Key(Key),

    /// The host finished loading an image.
    ///
    /// `src` names the image when known; completions for an image that is no
    /// longer current are ignored.
    ImageLoaded {
        src: Option<String>,
    },
    /// The host failed to load an image.
    ImageFailed {
        src: Option<String>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the view model changed, and the side
/// effects for the host to run in order. Unknown entries, keys pressed while
/// the detail view is closed, and other no-op events return `(false, [])`.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SetCategory(category) => {
            state.set_category(*category);
            (true, vec![])
        }
        Event::SetSubcategory(subcategory) => {
            state.set_subcategory(subcategory.clone());
            (true, vec![])
        }
        Event::SetSearchQuery(query) => {
            state.set_search_query(query.clone());
            (true, vec![])
        }
        Event::SearchChar(c) => {
            state.push_search_char(*c);
            tracing::trace!(query = %state.query.search_query(), char = %c, "search query updated");
            (true, vec![])
        }
        Event::Backspace => (state.pop_search_char(), vec![]),
        Event::ClearSearch => {
            if state.query.search_query().is_empty() {
                return (false, vec![]);
            }
            state.set_search_query(String::new());
            (true, vec![])
        }
        Event::SetPage(page) => page_changed(state, |state| state.set_page(*page)),
        Event::NextPage => page_changed(state, AppState::next_page),
        Event::PreviousPage => page_changed(state, AppState::previous_page),
        Event::ToggleViewMode => {
            state.toggle_view_mode();
            (true, vec![])
        }
        Event::OpenDetail(id) => state.open_detail(id).map_or_else(
            || {
                tracing::debug!(entry_id = %id, "no such entry");
                (false, vec![])
            },
            |actions| (true, actions),
        ),
        Event::CloseDetail => close(state),
        Event::NextImage => gallery_moved(state, Gallery::next),
        Event::PreviousImage => gallery_moved(state, Gallery::previous),
        Event::JumpTo(index) => gallery_moved(state, |gallery| gallery.jump_to(*index)),
        Event::ToggleZoom => (state.gallery.toggle_zoom(), vec![]),
        Event::Key(key) => {
            if !state.key_bindings.is_active() {
                tracing::debug!(%key, "key ignored, detail view closed");
                return (false, vec![]);
            }
            match key.command() {
                GalleryCommand::Previous => gallery_moved(state, Gallery::previous),
                GalleryCommand::Next => gallery_moved(state, Gallery::next),
                GalleryCommand::Close => close(state),
            }
        }
        Event::ImageLoaded { src } => (state.gallery.image_loaded(src.as_deref()), vec![]),
        Event::ImageFailed { src } => {
            let changed = state.gallery.image_failed(src.as_deref());
            if changed {
                tracing::warn!(src = ?src, "image failed to load");
            }
            (changed, vec![])
        }
    }
}

fn page_changed(state: &mut AppState, f: impl FnOnce(&mut AppState)) -> (bool, Vec<Action>) {
    let before = state.query.current_page();
    f(state);
    (state.query.current_page() != before, vec![])
}

fn gallery_moved(state: &mut AppState, f: impl FnOnce(&mut Gallery) -> bool) -> (bool, Vec<Action>) {
    if !f(&mut state.gallery) {
        return (false, vec![]);
    }
    (true, state.load_current_image().into_iter().collect())
}

fn close(state: &mut AppState) -> (bool, Vec<Action>) {
    let was_open = state.gallery.is_open();
    let actions = state.close_detail();
    (was_open, actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use crate::domain::CatalogEntry;

    fn state() -> AppState {
        let mut entries: Vec<CatalogEntry> = (1..=13)
            .map(|i| CatalogEntry::new(i, format!("Drawing {i}"), Category::Technical))
            .collect();
        entries.push(
            CatalogEntry::new(50, "Portfolio Site", Category::Web)
                .with_image("a.png")
                .with_gallery(["b.png", "c.png"]),
        );
        AppState::new(CatalogStore::new(entries), 6)
    }

    fn load(src: &str) -> Action {
        Action::LoadImage {
            src: src.to_string(),
        }
    }

    #[test]
    fn filter_events_reset_page() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::SetPage(3)), (true, vec![]));
        assert_eq!(state.query.current_page(), 3);

        handle_event(&mut state, &Event::SearchChar('d'));
        assert_eq!(state.query.current_page(), 1);
        assert_eq!(state.filtered.len(), 13);
    }

    #[test]
    fn page_events_report_changes_only() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::PreviousPage), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::NextPage), (true, vec![]));
        assert_eq!(handle_event(&mut state, &Event::SetPage(99)), (true, vec![]));
        assert_eq!(state.query.current_page(), 3);
        assert_eq!(handle_event(&mut state, &Event::NextPage), (false, vec![]));
    }

    #[test]
    fn backspace_and_clear_on_empty_query_do_nothing() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::Backspace), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::ClearSearch), (false, vec![]));
        handle_event(&mut state, &Event::SetSearchQuery("site".to_string()));
        assert_eq!(handle_event(&mut state, &Event::ClearSearch), (true, vec![]));
        assert_eq!(state.filtered.len(), 14);
    }

    #[test]
    fn keys_drive_the_open_gallery() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::OpenDetail(EntryId::from(50)));
        assert_eq!(actions, vec![Action::RegisterKeyBindings, load("a.png")]);

        let (render, actions) = handle_event(&mut state, &Event::Key(Key::ArrowLeft));
        assert!(render);
        assert_eq!(actions, vec![load("c.png")]);

        let (_, actions) = handle_event(&mut state, &Event::Key(Key::ArrowRight));
        assert_eq!(actions, vec![load("a.png")]);

        let (render, actions) = handle_event(&mut state, &Event::Key(Key::Escape));
        assert!(render);
        assert_eq!(actions, vec![Action::ReleaseKeyBindings]);
        assert!(!state.gallery.is_open());
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::Key(Key::Escape)), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::Key(Key::ArrowRight)), (false, vec![]));
    }

    #[test]
    fn reopening_does_not_register_twice() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenDetail(EntryId::from(50)));
        let (_, actions) = handle_event(&mut state, &Event::OpenDetail(EntryId::from(1)));
        assert!(actions.is_empty());

        let (_, actions) = handle_event(&mut state, &Event::CloseDetail);
        assert_eq!(actions, vec![Action::ReleaseKeyBindings]);
        assert_eq!(handle_event(&mut state, &Event::CloseDetail), (false, vec![]));
    }

    #[test]
    fn switching_entries_only_loads_the_new_image() {
        let mut state = AppState::new(
            CatalogStore::new(vec![
                CatalogEntry::new(1, "Hood", Category::Technical)
                    .with_image("a.png")
                    .with_gallery(["b.png", "c.png"]),
                CatalogEntry::new(2, "Kiosk", Category::Design).with_image("x.png"),
            ]),
            6,
        );
        handle_event(&mut state, &Event::OpenDetail(EntryId::from(1)));
        handle_event(&mut state, &Event::NextImage);
        handle_event(&mut state, &Event::ToggleZoom);

        let (render, actions) = handle_event(&mut state, &Event::OpenDetail(EntryId::from(2)));
        assert!(render);
        assert_eq!(actions, vec![load("x.png")]);

        let open = state.gallery.current().expect("open");
        assert_eq!(open.current_index(), 0);
        assert!(!open.is_zoomed());
        assert!(open.is_loading());
        assert!(state.key_bindings.is_active());
    }

    #[test]
    fn unknown_entry_is_ignored() {
        let mut state = state();
        assert_eq!(
            handle_event(&mut state, &Event::OpenDetail(EntryId::from("missing"))),
            (false, vec![])
        );
    }

    #[test]
    fn image_notifications_update_loading() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenDetail(EntryId::from(50)));
        let loaded = Event::ImageLoaded { src: None };
        assert_eq!(handle_event(&mut state, &loaded), (true, vec![]));
        assert_eq!(handle_event(&mut state, &loaded), (false, vec![]));

        handle_event(&mut state, &Event::JumpTo(2));
        let failed = Event::ImageFailed {
            src: Some("c.png".to_string()),
        };
        assert_eq!(handle_event(&mut state, &failed), (true, vec![]));
        let open = state.gallery.current().expect("open");
        assert!(open.load_failed());
        assert!(!open.is_loading());
    }
}
