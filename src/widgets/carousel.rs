//! Auto-advancing slide carousel.

use crate::content::SlideSet;
use crate::timer::Interval;

/// Carousel over a fixed slide set with timer-driven autoplay.
///
/// Navigation is instant: manual moves may interrupt autoplay at any point
/// and there is no transition lock.
#[derive(Debug, Clone)]
pub struct AutoCarousel<T> {
    slides: SlideSet<T>,
    current: usize,
    autoplay_enabled: bool,
    autoplay: Interval,
}

impl<T> AutoCarousel<T> {
    /// Starts on the first slide with autoplay running from `now`.
    pub fn new(slides: SlideSet<T>, period: f64, now: f64) -> Self {
        let mut autoplay = Interval::new(period);
        autoplay.arm(now);
        Self {
            slides,
            current: 0,
            autoplay_enabled: true,
            autoplay,
        }
    }

    pub fn slides(&self) -> &SlideSet<T> {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &T {
        self.slides.get(self.current)
    }

    pub fn is_autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    pub fn next(&mut self, now: f64) {
        self.go_to(self.slides.next_index(self.current), now);
    }

    pub fn prev(&mut self, now: f64) {
        self.go_to(self.slides.prev_index(self.current), now);
    }

    /// Jumps to `index`, wrapped into range. Jumping to the current slide
    /// changes nothing, not even the autoplay phase.
    pub fn go_to(&mut self, index: usize, now: f64) {
        let index = self.slides.wrap_index(index);
        if index == self.current {
            return;
        }
        self.current = index;
        if self.autoplay_enabled {
            self.autoplay.arm(now);
        }
    }

    /// Pointer entered the carousel: autoplay stops.
    pub fn hover_enter(&mut self) {
        self.autoplay_enabled = false;
        self.autoplay.cancel();
    }

    /// Pointer left the carousel: autoplay resumes with a full period.
    pub fn hover_leave(&mut self, now: f64) {
        self.autoplay_enabled = true;
        self.autoplay.arm(now);
    }

    /// Advances on autoplay expiry. Returns true when the slide changed.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.autoplay_enabled && self.autoplay.poll(now) {
            let before = self.current;
            self.next(now);
            tracing::trace!(from = before, to = self.current, "carousel autoplay");
            return before != self.current;
        }
        false
    }

    /// Horizontal offset of the slide strip, in slide widths.
    pub fn track_offset(&self) -> f32 {
        self.current as f32
    }

    pub fn next_wakeup(&self) -> Option<f64> {
        if self.autoplay_enabled {
            self.autoplay.next_due()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> AutoCarousel<&'static str> {
        AutoCarousel::new(SlideSet::new(vec!["a", "b", "c"]).unwrap(), 5.0, 0.0)
    }

    #[test]
    fn navigation_wraps() {
        let mut c = carousel();
        c.prev(0.0);
        assert_eq!(c.current_index(), 2);
        c.next(0.0);
        assert_eq!(c.current_index(), 0);
        c.go_to(4, 0.0);
        assert_eq!(c.current_index(), 1);
        assert_eq!(*c.current_slide(), "b");

        // usize::MAX % 3 == 0
        c.go_to(usize::MAX, 0.0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn autoplay_advances_each_period() {
        let mut c = carousel();
        assert!(!c.tick(4.9));
        assert!(c.tick(5.0));
        assert_eq!(c.current_index(), 1);
        assert!(c.tick(10.0));
        assert!(c.tick(15.0));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn manual_move_restarts_the_period() {
        let mut c = carousel();
        c.next(4.0);
        assert!(!c.tick(5.0));
        assert!(c.tick(9.0));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn go_to_current_keeps_timer_phase() {
        let mut c = carousel();
        c.go_to(0, 4.0);
        assert!(c.tick(5.0));
    }

    #[test]
    fn hover_suspends_and_resumes() {
        let mut c = carousel();
        c.hover_enter();
        assert!(!c.is_autoplay_enabled());
        assert!(!c.tick(50.0));
        assert_eq!(c.next_wakeup(), None);

        c.hover_leave(50.0);
        assert!(c.is_autoplay_enabled());
        assert!(!c.tick(54.0));
        assert!(c.tick(55.0));
    }

    #[test]
    fn manual_navigation_is_allowed_while_hovered() {
        let mut c = carousel();
        c.hover_enter();
        c.next(1.0);
        c.next(1.1);
        assert_eq!(c.current_index(), 2);
        assert!(!c.is_autoplay_enabled());
    }
}
