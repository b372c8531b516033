//! Program showcase state.

use kibou::easing::{self, EASE_IN_OUT};
use kibou::timer::earliest;
use kibou::{AutoCarousel, ProgramSlide, Result, SiteConfig, SiteContent, Snowfall, TiltProfile, TiltSurface};

/// Slide strip motion between two track offsets.
#[derive(Debug, Clone, Copy)]
struct StripMotion {
    from: f32,
    to: f32,
    started_at: f64,
}

/// State behind the program carousel.
///
/// Responsibilities:
/// - Owning the autoplaying carousel of program slides
/// - One bento tilt per slide, so a slide keeps its own pose while it scrolls out
/// - The shared snowfall drawn behind every slide
/// - Easing the slide strip towards the current slide
pub struct ShowcaseState {
    carousel: AutoCarousel<ProgramSlide>,
    tilts: Vec<TiltSurface>,
    snowfall: Snowfall,
    strip: StripMotion,
    slide_duration: f64,
}

impl ShowcaseState {
    pub fn new(config: &SiteConfig, content: &SiteContent, now: f64) -> Result<Self> {
        let slides = content.program_slides()?;
        let tilts = (0..slides.len())
            .map(|_| TiltSurface::new(TiltProfile::BENTO))
            .collect();
        let snowfall = Snowfall::new(
            &mut rand::thread_rng(),
            config.snowfall.flake_count,
            config.timing.snowfall_step,
            now,
        );

        let carousel = AutoCarousel::new(slides, config.timing.carousel_autoplay, now);
        let offset = carousel.track_offset();

        Ok(Self {
            carousel,
            tilts,
            snowfall,
            strip: StripMotion {
                from: offset,
                to: offset,
                started_at: now,
            },
            slide_duration: config.timing.carousel_slide,
        })
    }

    pub fn carousel(&self) -> &AutoCarousel<ProgramSlide> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut AutoCarousel<ProgramSlide> {
        &mut self.carousel
    }

    pub fn tilt(&self, index: usize) -> Option<&TiltSurface> {
        self.tilts.get(index)
    }

    pub fn tilt_mut(&mut self, index: usize) -> Option<&mut TiltSurface> {
        self.tilts.get_mut(index)
    }

    pub fn snowfall(&self) -> &Snowfall {
        &self.snowfall
    }

    /// Strip offset to draw at `now`, in slide widths.
    pub fn strip_offset(&self, now: f64) -> f32 {
        let StripMotion { from, to, started_at } = self.strip;
        let t = EASE_IN_OUT.sample(easing::progress(started_at, self.slide_duration, now));
        from + (to - from) * t
    }

    fn strip_moving(&self, now: f64) -> bool {
        now < self.strip.started_at + self.slide_duration
    }

    /// Advances autoplay, snowfall and any settling tilt, and starts a
    /// strip motion when the current slide changed since the last frame.
    pub fn tick(&mut self, now: f64) {
        if self.carousel.tick(now) {
            tracing::trace!(slide = self.carousel.current_index(), "carousel autoplay");
        }

        let target = self.carousel.track_offset();
        if target != self.strip.to {
            self.strip = StripMotion {
                from: self.strip_offset(now),
                to: target,
                started_at: now,
            };
        }

        self.snowfall.tick(now);
        for tilt in &mut self.tilts {
            tilt.tick(now);
        }
    }

    pub fn next_wakeup(&self, now: f64) -> Option<f64> {
        let strip = self.strip_moving(now).then_some(now);
        self.tilts
            .iter()
            .map(|t| t.next_wakeup(now))
            .fold(
                earliest(
                    strip,
                    earliest(self.carousel.next_wakeup(), self.snowfall.next_wakeup()),
                ),
                earliest,
            )
    }
}
