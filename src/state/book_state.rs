//! Story book state.

use kibou::{BookEvent, BookTiming, PageFlipBook, Result, SiteConfig, SiteContent, StoryPage, TiltProfile, TiltSurface};
use kibou::timer::earliest;

/// The page-flip book and the tilt of its container.
pub struct BookState {
    book: PageFlipBook<StoryPage>,
    tilt: TiltSurface,
}

impl BookState {
    pub fn new(config: &SiteConfig, content: &SiteContent, now: f64) -> Result<Self> {
        let timing = BookTiming::from(&config.timing);
        let profile = TiltProfile::BOOK.with_reset_duration(config.timing.tilt_reset);

        Ok(Self {
            book: PageFlipBook::new(content.story_slides()?, timing, now),
            tilt: TiltSurface::new(profile),
        })
    }

    pub fn book(&self) -> &PageFlipBook<StoryPage> {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut PageFlipBook<StoryPage> {
        &mut self.book
    }

    pub fn tilt(&self) -> &TiltSurface {
        &self.tilt
    }

    /// The container tilt, unless a flip is in flight.
    ///
    /// Pointer moves are ignored while the book is flipping so the page
    /// geometry stays put for the whole transition.
    pub fn tilt_mut(&mut self) -> Option<&mut TiltSurface> {
        if self.book.is_flipping() {
            None
        } else {
            Some(&mut self.tilt)
        }
    }

    /// Leaving the container always resets, even mid-flip.
    pub fn tilt_left(&mut self, now: f64) {
        self.tilt.pointer_left(now);
    }

    pub fn tick(&mut self, now: f64) -> Option<BookEvent> {
        self.tilt.tick(now);
        self.book.tick(now)
    }

    pub fn next_wakeup(&self, now: f64) -> Option<f64> {
        let flip = if self.book.is_flipping() {
            Some(now)
        } else {
            self.book.next_wakeup()
        };
        earliest(flip, self.tilt.next_wakeup(now))
    }
}
