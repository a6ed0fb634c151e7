//! Detail view gallery state machine.
//!
//! The detail view is either closed or showing one entry's image sequence.
//! Navigation wraps around in both directions; every index change marks the
//! new image as loading until the presentation layer reports it loaded (or
//! failed). Opening a detail view replaces the whole state, so nothing from a
//! previously opened entry can leak into the new one.
//!
//! ```text
//!            open(entry)                 next / previous / jump_to
//!   Closed ─────────────▶ Open { .. } ◀──────────────────────────┐
//!     ▲                      │  │                                 │
//!     └──────── close ───────┘  └─────────────────────────────────┘
//! ```

use crate::domain::{CatalogEntry, EntryId};

/// State of an open detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGallery {
    entry_id: EntryId,
    images: Vec<String>,
    current_index: usize,
    is_zoomed: bool,
    is_loading: bool,
    load_failed: bool,
}

impl OpenGallery {
    fn for_entry(entry: &CatalogEntry) -> Self {
        let images = entry.effective_images();
        let is_loading = !images.is_empty();
        Self {
            entry_id: entry.id.clone(),
            images,
            current_index: 0,
            is_zoomed: false,
            is_loading,
            load_failed: false,
        }
    }

    #[must_use]
    pub const fn entry_id(&self) -> &EntryId {
        &self.entry_id
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current_index).map(String::as_str)
    }

    #[must_use]
    pub const fn is_zoomed(&self) -> bool {
        self.is_zoomed
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub const fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Whether previous/next controls make sense (more than one image).
    #[must_use]
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    fn move_to(&mut self, index: usize) -> bool {
        if index == self.current_index {
            return false;
        }
        self.current_index = index;
        self.is_loading = true;
        self.load_failed = false;
        true
    }

    fn next(&mut self) -> bool {
        if self.images.is_empty() {
            return false;
        }
        self.move_to((self.current_index + 1) % self.images.len())
    }

    fn previous(&mut self) -> bool {
        if self.images.is_empty() {
            return false;
        }
        let len = self.images.len();
        self.move_to((self.current_index + len - 1) % len)
    }

    fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.move_to(index)
    }

    /// Clears the loading flag. `src`, when given, must name the current
    /// image; completions for an image the user already navigated away from
    /// are ignored.
    fn finish_loading(&mut self, src: Option<&str>, failed: bool) -> bool {
        if !self.is_loading {
            return false;
        }
        if src.is_some_and(|src| Some(src) != self.current_image()) {
            tracing::debug!(src = ?src, current = ?self.current_image(), "stale image completion ignored");
            return false;
        }
        self.is_loading = false;
        self.load_failed = failed;
        true
    }
}

/// Gallery lifecycle: closed, or open on one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Gallery {
    #[default]
    Closed,
    Open(OpenGallery),
}

impl Gallery {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The open detail state, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&OpenGallery> {
        match self {
            Self::Open(open) => Some(open),
            Self::Closed => None,
        }
    }

    /// Opens (or re-opens) the detail view on `entry`.
    ///
    /// Index, zoom and loading state always start fresh. Returns `true` when
    /// the gallery was previously closed.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_catalog::{CatalogEntry, Category};
    /// use folio_catalog::app::gallery::Gallery;
    ///
    /// let entry = CatalogEntry::new(1, "Hood", Category::Technical)
    ///     .with_image("a.png")
    ///     .with_gallery(["b.png", "c.png"]);
    ///
    /// let mut gallery = Gallery::default();
    /// assert!(gallery.open(&entry));
    /// gallery.previous();
    /// assert_eq!(gallery.current().and_then(|g| g.current_image()), Some("c.png"));
    /// ```
    pub fn open(&mut self, entry: &CatalogEntry) -> bool {
        let was_closed = !self.is_open();
        *self = Self::Open(OpenGallery::for_entry(entry));
        was_closed
    }

    /// Closes the detail view. Returns `true` when it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }

    /// Advances to the next image, wrapping to the first.
    pub fn next(&mut self) -> bool {
        self.with_open(OpenGallery::next)
    }

    /// Steps back to the previous image, wrapping to the last.
    pub fn previous(&mut self) -> bool {
        self.with_open(OpenGallery::previous)
    }

    /// Jumps to `index`. Out-of-range indices and the current index are no-ops.
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.with_open(|open| open.jump_to(index))
    }

    pub fn toggle_zoom(&mut self) -> bool {
        self.with_open(|open| {
            open.is_zoomed = !open.is_zoomed;
            true
        })
    }

    /// Marks the current image as loaded.
    pub fn image_loaded(&mut self, src: Option<&str>) -> bool {
        self.with_open(|open| open.finish_loading(src, false))
    }

    /// Marks the current image as failed; the view shows a placeholder.
    pub fn image_failed(&mut self, src: Option<&str>) -> bool {
        self.with_open(|open| open.finish_loading(src, true))
    }

    fn with_open(&mut self, f: impl FnOnce(&mut OpenGallery) -> bool) -> bool {
        match self {
            Self::Open(open) => f(open),
            Self::Closed => false,
        }
    }
}
