//! State management modules for the Kibou site.
//!
//! This module contains state-only logic (no UI concerns):
//! - Program showcase (carousel, slide tilts, snowfall)
//! - Story book (page-flip book and its container tilt)
//! - Gallery (tile tilts and badge spotlights)
//! - Contact (form fields, card tilts, pending alert)
//! - Layout (breakpoint and pending section scroll)

mod showcase_state;
mod book_state;
mod gallery_state;
mod contact_state;
mod layout_state;

pub use showcase_state::ShowcaseState;
pub use book_state::BookState;
pub use gallery_state::GalleryState;
pub use contact_state::ContactState;
pub use layout_state::{LayoutState, Section};
