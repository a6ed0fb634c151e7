//! Presentation layer.
//!
//! The engine does not render anything itself. It produces a
//! [`CatalogViewModel`] that a front end draws however it likes:
//!
//! ```text
//! AppState → compute_viewmodel → CatalogViewModel → (host renders)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable catalog state

pub mod viewmodel;

pub use viewmodel::{
    CardItem, CatalogViewModel, DetailView, EmptyState, FilterOption, HeaderInfo, ImageSlot,
    PaginationBar, SearchBarInfo, Thumbnail,
};
