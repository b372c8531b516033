//! Centralized application state for the Kibou site.
//!
//! The state is composed of focused components, one per interactive area of
//! the page, so each section borrows only what it draws. Static copy lives
//! in [`SiteContent`] and is never mutated after startup.

use kibou::timer::earliest;
use kibou::{Result, SiteConfig, SiteContent, TiltSurface};

use crate::state::{BookState, ContactState, GalleryState, LayoutState, ShowcaseState};

/// Identifies one tiltable surface on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    ProgramSlide(usize),
    Book,
    GalleryTile(usize),
    ContactPanel,
    ContactCard(usize),
}

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Static Inputs =====
    pub config: SiteConfig,
    pub content: SiteContent,

    // ===== Focused State Components =====
    /// Program carousel, slide tilts and snowfall
    pub showcase: ShowcaseState,

    /// Story book and its container tilt
    pub story: BookState,

    /// Gallery tile tilts and badge spotlights
    pub gallery: GalleryState,

    /// Contact form, card tilts and alert
    pub contact: ContactState,

    /// Breakpoint and pending navigation
    pub layout: LayoutState,
}

impl AppState {
    /// Builds every widget from the configuration and content.
    ///
    /// Fails when the content has no program slides or no story pages.
    pub fn new(config: SiteConfig, content: SiteContent, now: f64) -> Result<Self> {
        let showcase = ShowcaseState::new(&config, &content, now)?;
        let story = BookState::new(&config, &content, now)?;
        let gallery = GalleryState::new(content.gallery.len());
        let contact = ContactState::new(&config, content.contact_cards.len());

        Ok(Self {
            config,
            content,
            showcase,
            story,
            gallery,
            contact,
            layout: LayoutState::new(),
        })
    }

    /// Tilt surface for `id`, if it currently accepts pointer moves.
    pub fn tilt_mut(&mut self, id: SurfaceId) -> Option<&mut TiltSurface> {
        match id {
            SurfaceId::ProgramSlide(index) => self.showcase.tilt_mut(index),
            SurfaceId::Book => self.story.tilt_mut(),
            SurfaceId::GalleryTile(index) => self.gallery.tilt_mut(index),
            SurfaceId::ContactPanel => Some(self.contact.panel_tilt_mut()),
            SurfaceId::ContactCard(index) => self.contact.card_tilt_mut(index),
        }
    }

    /// Earliest instant any component needs another frame.
    pub fn next_wakeup(&self, now: f64) -> Option<f64> {
        [
            self.showcase.next_wakeup(now),
            self.story.next_wakeup(now),
            self.gallery.next_wakeup(now),
            self.contact.next_wakeup(now),
        ]
        .into_iter()
        .fold(None, earliest)
    }
}
