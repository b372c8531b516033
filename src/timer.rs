//! Frame-polled timers.
//!
//! Widgets never spawn threads or register callbacks. Each one owns its
//! timers as plain values and polls them with the frame time (seconds since
//! app start, as reported by `egui::InputState::time`). Dropping the widget
//! drops the timers, so nothing can fire against a widget that is gone.

/// Recurring timer, disarmed until [`Interval::arm`] is called.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    period: f64,
    next_due: Option<f64>,
}

impl Interval {
    /// Creates a disarmed interval with the given period in seconds.
    pub fn new(period: f64) -> Self {
        Self {
            period: period.max(0.0),
            next_due: None,
        }
    }

    /// Returns the period in seconds.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// (Re)starts the period from `now`.
    pub fn arm(&mut self, now: f64) {
        self.next_due = Some(now + self.period);
    }

    /// Stops the interval; `poll` returns false until re-armed.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Instant of the next expiry, if armed.
    pub fn next_due(&self) -> Option<f64> {
        self.next_due
    }

    /// Returns true at most once per call when the period has elapsed.
    ///
    /// The next period starts at `now`, so a stalled frame loop produces one
    /// tick instead of a burst of catch-up ticks.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

/// One-shot timer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deadline {
    due: Option<f64>,
}

impl Deadline {
    pub fn new() -> Self {
        Self { due: None }
    }

    /// Schedules the deadline `delay` seconds after `now`, replacing any
    /// pending one.
    pub fn schedule(&mut self, now: f64, delay: f64) {
        self.due = Some(now + delay.max(0.0));
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<f64> {
        self.due
    }

    /// Fires once when `now` reaches the deadline, returning the instant it
    /// was due at.
    pub fn poll(&mut self, now: f64) -> Option<f64> {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                Some(due)
            }
            _ => None,
        }
    }
}

/// Earliest of two optional wake-up instants.
pub fn earliest(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_disarmed_until_armed() {
        let mut interval = Interval::new(5.0);
        assert!(!interval.poll(100.0));

        interval.arm(0.0);
        assert!(!interval.poll(4.9));
        assert!(interval.poll(5.0));
        assert_eq!(interval.next_due(), Some(10.0));
    }

    #[test]
    fn interval_does_not_burst_after_a_stall() {
        let mut interval = Interval::new(1.0);
        interval.arm(0.0);
        assert!(interval.poll(10.0));
        assert!(!interval.poll(10.5));
        assert!(interval.poll(11.0));
    }

    #[test]
    fn cancelled_interval_stays_silent() {
        let mut interval = Interval::new(1.0);
        interval.arm(0.0);
        interval.cancel();
        assert!(!interval.is_armed());
        assert!(!interval.poll(2.0));
    }

    #[test]
    fn deadline_fires_once() {
        let mut deadline = Deadline::new();
        deadline.schedule(1.0, 3.0);
        assert_eq!(deadline.poll(3.9), None);
        assert_eq!(deadline.poll(4.2), Some(4.0));
        assert_eq!(deadline.poll(5.0), None);
        assert!(!deadline.is_pending());
    }

    #[test]
    fn earliest_picks_smallest_instant() {
        assert_eq!(earliest(Some(2.0), Some(1.0)), Some(1.0));
        assert_eq!(earliest(None, Some(1.0)), Some(1.0));
        assert_eq!(earliest(None, None), None);
    }
}
