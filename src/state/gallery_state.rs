//! Gallery state.

use kibou::{Spotlight, TiltProfile, TiltSurface};

/// Per-tile tilt and badge spotlight.
pub struct GalleryState {
    tilts: Vec<TiltSurface>,
    spotlights: Vec<Spotlight>,
}

impl GalleryState {
    pub fn new(tile_count: usize) -> Self {
        Self {
            tilts: (0..tile_count)
                .map(|_| TiltSurface::new(TiltProfile::BENTO))
                .collect(),
            spotlights: vec![Spotlight::new(); tile_count],
        }
    }

    pub fn tilt(&self, index: usize) -> Option<&TiltSurface> {
        self.tilts.get(index)
    }

    pub fn tilt_mut(&mut self, index: usize) -> Option<&mut TiltSurface> {
        self.tilts.get_mut(index)
    }

    pub fn spotlight(&self, index: usize) -> Option<&Spotlight> {
        self.spotlights.get(index)
    }

    pub fn spotlight_mut(&mut self, index: usize) -> Option<&mut Spotlight> {
        self.spotlights.get_mut(index)
    }

    pub fn tick(&mut self, now: f64) {
        for tilt in &mut self.tilts {
            tilt.tick(now);
        }
    }

    pub fn next_wakeup(&self, now: f64) -> Option<f64> {
        self.tilts
            .iter()
            .filter_map(|t| t.next_wakeup(now))
            .reduce(f64::min)
    }
}
