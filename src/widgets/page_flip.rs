//! Book widget with timed page-flip transitions.
//!
//! The book is an explicit two-state machine. Every flip, whether it comes
//! from an arrow, a page indicator or autoplay, goes through
//! [`PageFlipBook::request`], which rejects anything while a flip is in
//! flight. The committed page changes only when the flip completes.

use crate::config::TimingConfig;
use crate::content::SlideSet;
use crate::easing::{self, EASE};
use crate::timer::{earliest, Deadline, Interval};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipDirection {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlipPhase {
    Idle,
    Flipping {
        target: usize,
        direction: FlipDirection,
        started_at: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A flip is already in flight.
    Busy,
    /// The requested page is the one on display.
    AlreadyShowing,
}

/// Result of a flip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    Started {
        target: usize,
        direction: FlipDirection,
    },
    Ignored(IgnoreReason),
}

impl FlipOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, FlipOutcome::Started { .. })
    }
}

/// Something `tick` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookEvent {
    /// A flip finished and its target is now the current page.
    Committed { page: usize },
    /// Autoplay asked for the next page.
    Autoplayed(FlipOutcome),
}

/// Timing constants of a book, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookTiming {
    pub flip_duration: f64,
    pub cooldown: f64,
    pub autoplay_period: f64,
}

impl Default for BookTiming {
    fn default() -> Self {
        Self {
            flip_duration: 0.8,
            cooldown: 3.0,
            autoplay_period: 4.0,
        }
    }
}

impl From<&TimingConfig> for BookTiming {
    fn from(config: &TimingConfig) -> Self {
        Self {
            flip_duration: config.flip_duration,
            cooldown: config.flip_cooldown,
            autoplay_period: config.flip_autoplay,
        }
    }
}

/// Page-flip book state.
#[derive(Debug, Clone)]
pub struct PageFlipBook<T> {
    pages: SlideSet<T>,
    current: usize,
    phase: FlipPhase,
    direction: FlipDirection,
    hovered: bool,
    timing: BookTiming,
    cooldown: Deadline,
    autoplay: Interval,
}

impl<T> PageFlipBook<T> {
    /// Opens on the first page with autoplay armed from `now`.
    pub fn new(pages: SlideSet<T>, timing: BookTiming, now: f64) -> Self {
        let mut autoplay = Interval::new(timing.autoplay_period);
        autoplay.arm(now);
        Self {
            pages,
            current: 0,
            phase: FlipPhase::Idle,
            direction: FlipDirection::Next,
            hovered: false,
            timing,
            cooldown: Deadline::new(),
            autoplay,
        }
    }

    pub fn pages(&self) -> &SlideSet<T> {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> &T {
        self.pages.get(self.current)
    }

    pub fn phase(&self) -> FlipPhase {
        self.phase
    }

    pub fn is_flipping(&self) -> bool {
        matches!(self.phase, FlipPhase::Flipping { .. })
    }

    /// Direction of the flip in flight, or of the last one.
    pub fn direction(&self) -> FlipDirection {
        self.direction
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_cooling_down(&self) -> bool {
        self.cooldown.is_pending()
    }

    /// Autoplay may fire only when idle, not hovered and past the cool-down.
    pub fn is_autoplay_enabled(&self) -> bool {
        !self.hovered && !self.cooldown.is_pending() && !self.is_flipping()
    }

    /// Page being revealed by the flip in flight.
    pub fn incoming_page(&self) -> Option<&T> {
        match self.phase {
            FlipPhase::Flipping { target, .. } => Some(self.pages.get(target)),
            FlipPhase::Idle => None,
        }
    }

    /// Eased flip progress in `[0, 1]`, or `None` when idle.
    pub fn flip_progress(&self, now: f64) -> Option<f32> {
        match self.phase {
            FlipPhase::Flipping { started_at, .. } => Some(EASE.sample(easing::progress(
                started_at,
                self.timing.flip_duration,
                now,
            ))),
            FlipPhase::Idle => None,
        }
    }

    /// The single entry point for changing pages.
    pub fn request(&mut self, target: usize, direction: FlipDirection, now: f64) -> FlipOutcome {
        if self.is_flipping() {
            tracing::debug!(target, "flip request ignored, flip in flight");
            return FlipOutcome::Ignored(IgnoreReason::Busy);
        }

        let target = self.pages.wrap_index(target);
        if target == self.current {
            return FlipOutcome::Ignored(IgnoreReason::AlreadyShowing);
        }

        self.direction = direction;
        self.phase = FlipPhase::Flipping {
            target,
            direction,
            started_at: now,
        };
        self.autoplay.cancel();
        tracing::debug!(from = self.current, target, ?direction, "flip started");

        FlipOutcome::Started { target, direction }
    }

    pub fn next(&mut self, now: f64) -> FlipOutcome {
        self.request(self.pages.next_index(self.current), FlipDirection::Next, now)
    }

    pub fn prev(&mut self, now: f64) -> FlipOutcome {
        self.request(self.pages.prev_index(self.current), FlipDirection::Prev, now)
    }

    /// Page indicator jump; flips forward when the target lies ahead.
    pub fn go_to(&mut self, index: usize, now: f64) -> FlipOutcome {
        let index = self.pages.wrap_index(index);
        let direction = if index > self.current {
            FlipDirection::Next
        } else {
            FlipDirection::Prev
        };
        self.request(index, direction, now)
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
        self.autoplay.cancel();
    }

    pub fn hover_leave(&mut self, now: f64) {
        self.hovered = false;
        self.rearm_autoplay(now);
    }

    /// Advances timers. Commits a finished flip before considering autoplay,
    /// so autoplay never observes a half-finished transition.
    pub fn tick(&mut self, now: f64) -> Option<BookEvent> {
        if let FlipPhase::Flipping {
            target, started_at, ..
        } = self.phase
        {
            let done_at = started_at + self.timing.flip_duration;
            if now < done_at {
                return None;
            }
            self.current = target;
            self.phase = FlipPhase::Idle;
            self.cooldown.schedule(done_at, self.timing.cooldown);
            tracing::debug!(page = target, "flip committed");
            return Some(BookEvent::Committed { page: target });
        }

        if let Some(cleared_at) = self.cooldown.poll(now) {
            self.rearm_autoplay(cleared_at);
        }

        if self.is_autoplay_enabled() && self.autoplay.poll(now) {
            let outcome = self.next(now);
            tracing::trace!(?outcome, "book autoplay");
            return Some(BookEvent::Autoplayed(outcome));
        }

        None
    }

    fn rearm_autoplay(&mut self, now: f64) {
        if self.is_autoplay_enabled() {
            self.autoplay.arm(now);
        }
    }

    /// Earliest instant at which `tick` has something to do.
    pub fn next_wakeup(&self) -> Option<f64> {
        match self.phase {
            FlipPhase::Flipping { started_at, .. } => Some(started_at + self.timing.flip_duration),
            FlipPhase::Idle => {
                let autoplay = if self.is_autoplay_enabled() {
                    self.autoplay.next_due()
                } else {
                    None
                };
                let cooldown = if self.hovered { None } else { self.cooldown.due() };
                earliest(autoplay, cooldown)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> PageFlipBook<u32> {
        PageFlipBook::new(
            SlideSet::new(vec![10, 11, 12, 13]).unwrap(),
            BookTiming::default(),
            0.0,
        )
    }

    #[test]
    fn commit_happens_exactly_at_duration() {
        let mut b = book();
        assert!(b.request(2, FlipDirection::Next, 1.0).is_started());
        assert_eq!(b.tick(1.79), None);
        assert_eq!(b.current_index(), 0);
        assert_eq!(b.tick(1.8), Some(BookEvent::Committed { page: 2 }));
        assert_eq!(b.current_index(), 2);
        assert!(!b.is_flipping());
    }

    #[test]
    fn requests_during_flip_are_ignored() {
        let mut b = book();
        b.request(2, FlipDirection::Next, 0.0);
        assert_eq!(
            b.request(3, FlipDirection::Prev, 0.1),
            FlipOutcome::Ignored(IgnoreReason::Busy)
        );
        assert_eq!(b.direction(), FlipDirection::Next);
        assert_eq!(b.incoming_page(), Some(&12));
        b.tick(0.8);
        assert_eq!(b.current_index(), 2);
        assert!(!b.is_flipping());
    }

    #[test]
    fn incoming_page_is_the_flip_target() {
        let mut b = book();
        b.next(0.0);
        assert_eq!(b.incoming_page(), Some(&11));
        b.tick(0.8);

        // Indicator jump from page 1 to page 3 reveals page 3, not page 2
        b.go_to(3, 5.0);
        assert_eq!(b.direction(), FlipDirection::Next);
        assert_eq!(b.incoming_page(), Some(&13));
    }

    #[test]
    fn go_to_past_isize_range_wraps_modulo_len() {
        let mut b = book();
        // usize::MAX % 4 == 3
        assert_eq!(
            b.go_to(usize::MAX, 0.0),
            FlipOutcome::Started {
                target: 3,
                direction: FlipDirection::Next
            }
        );
    }

    #[test]
    fn requesting_current_page_stays_idle() {
        let mut b = book();
        assert_eq!(
            b.go_to(0, 0.5),
            FlipOutcome::Ignored(IgnoreReason::AlreadyShowing)
        );
        assert!(!b.is_flipping());
        assert_eq!(b.flip_progress(0.5), None);
    }

    #[test]
    fn prev_from_first_page_wraps() {
        let mut b = book();
        assert_eq!(
            b.prev(0.0),
            FlipOutcome::Started {
                target: 3,
                direction: FlipDirection::Prev
            }
        );
    }

    #[test]
    fn go_to_picks_direction_from_position() {
        let mut b = book();
        b.request(3, FlipDirection::Next, 0.0);
        b.tick(1.0);
        assert_eq!(
            b.go_to(1, 2.0),
            FlipOutcome::Started {
                target: 1,
                direction: FlipDirection::Prev
            }
        );
    }

    #[test]
    fn cooldown_follows_commit_then_autoplay_rearms() {
        let mut b = book();
        b.next(0.0);
        b.tick(0.8);
        assert!(b.is_cooling_down());
        assert!(!b.is_autoplay_enabled());

        // Cool-down clears at 3.8, autoplay period restarts from there.
        assert_eq!(b.tick(3.8), None);
        assert!(b.is_autoplay_enabled());
        assert_eq!(b.tick(7.7), None);
        assert!(matches!(b.tick(7.8), Some(BookEvent::Autoplayed(o)) if o.is_started()));
        assert_eq!(b.incoming_page(), Some(&12));
    }

    #[test]
    fn first_autoplay_fires_after_one_period() {
        let mut b = book();
        assert_eq!(b.tick(3.9), None);
        assert!(matches!(b.tick(4.0), Some(BookEvent::Autoplayed(_))));
        assert!(b.is_flipping());
    }

    #[test]
    fn hover_and_cooldown_stack() {
        let mut b = book();
        b.next(0.0);
        b.tick(0.8);
        b.hover_enter();
        b.tick(5.0);
        assert!(!b.is_cooling_down());
        assert!(!b.is_autoplay_enabled());
        assert_eq!(b.tick(100.0), None);

        b.hover_leave(100.0);
        assert!(b.is_autoplay_enabled());
        assert_eq!(b.next_wakeup(), Some(104.0));
    }

    #[test]
    fn leaving_during_cooldown_waits_for_it() {
        let mut b = book();
        b.next(0.0);
        b.hover_enter();
        b.tick(0.8);
        b.hover_leave(1.0);
        assert!(!b.is_autoplay_enabled());
        assert_eq!(b.tick(3.0), None);
        assert!(b.is_cooling_down());
        b.tick(3.8);
        assert!(b.is_autoplay_enabled());
    }

    #[test]
    fn progress_is_eased_and_bounded() {
        let mut b = book();
        b.next(0.0);
        assert_eq!(b.flip_progress(0.0), Some(0.0));
        let mid = b.flip_progress(0.4).unwrap();
        assert!(mid > 0.5 && mid < 1.0);
        assert_eq!(b.flip_progress(5.0), Some(1.0));
    }
}
