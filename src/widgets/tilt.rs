//! Pointer-driven 3D tilt.
//!
//! A surface rotates proportionally to how far the pointer is from its
//! centre. When the pointer leaves, the surface settles back to the identity
//! orientation, either with an eased transition or instantly depending on
//! the profile.

use egui::{Pos2, Rect};

use crate::easing::{self, EASE};

/// Rotation in degrees around the screen X and Y axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltVector {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl TiltVector {
    pub const IDENTITY: TiltVector = TiltVector {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self {
            rotate_x: self.rotate_x * factor,
            rotate_y: self.rotate_y * factor,
        }
    }

    /// Sum of absolute angles; the book container uses it as its lift.
    pub fn magnitude(&self) -> f32 {
        self.rotate_x.abs() + self.rotate_y.abs()
    }

    /// Projects `point` as if `rect` were rotated by this vector around its
    /// centre and viewed from `perspective` points away.
    ///
    /// `lift` moves the surface towards the viewer before projection.
    pub fn project(&self, rect: Rect, point: Pos2, perspective: f32, lift: f32) -> Pos2 {
        let center = rect.center();
        let (x, y) = (point.x - center.x, point.y - center.y);

        let (sin_x, cos_x) = self.rotate_x.to_radians().sin_cos();
        let (sin_y, cos_y) = self.rotate_y.to_radians().sin_cos();

        // rotateX then rotateY, matching the CSS transform order.
        let y1 = y * cos_x;
        let z1 = y * sin_x;
        let x2 = x * cos_y + z1 * sin_y;
        let z2 = -x * sin_y + z1 * cos_y + lift;

        let scale = if perspective > 0.0 {
            perspective / (perspective - z2).max(1.0)
        } else {
            1.0
        };

        Pos2::new(center.x + x2 * scale, center.y + y1 * scale)
    }

    /// Corners of `rect` after projection, clockwise from the top-left.
    pub fn project_rect(&self, rect: Rect, perspective: f32, lift: f32) -> [Pos2; 4] {
        [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
        ]
        .map(|p| self.project(rect, p, perspective, lift))
    }
}

/// How the surface returns to rest after the pointer leaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TiltReset {
    Eased { duration: f64 },
    Instant,
}

/// Per-surface tilt constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltProfile {
    /// Degrees of X rotation at the top/bottom edge (`K_x`).
    pub pitch: f32,
    /// Degrees of Y rotation at the left/right edge (`K_y`).
    pub yaw: f32,
    pub perspective: f32,
    /// Fixed lift towards the viewer while tracking, in points.
    pub lift: f32,
    /// Lift grows with the tilt magnitude instead of staying fixed.
    pub dynamic_lift: bool,
    /// Uniform scale while tracking.
    pub hover_scale: f32,
    pub reset: TiltReset,
}

impl TiltProfile {
    /// Small contact cards: strong tilt, lifted.
    pub const CONTACT_CARD: TiltProfile = TiltProfile {
        pitch: 15.0,
        yaw: 15.0,
        perspective: 1000.0,
        lift: 20.0,
        dynamic_lift: false,
        hover_scale: 1.0,
        reset: TiltReset::Eased { duration: 0.5 },
    };

    /// The large contact panel barely moves.
    pub const CONTACT_PANEL: TiltProfile = TiltProfile {
        pitch: 2.0,
        yaw: 2.0,
        perspective: 2000.0,
        lift: 0.0,
        dynamic_lift: false,
        hover_scale: 1.0,
        reset: TiltReset::Eased { duration: 0.5 },
    };

    pub const BOOK: TiltProfile = TiltProfile {
        pitch: 8.0,
        yaw: 8.0,
        perspective: 2000.0,
        lift: 0.0,
        dynamic_lift: true,
        hover_scale: 1.0,
        reset: TiltReset::Eased { duration: 0.5 },
    };

    /// Gallery and program tiles lean away from the pointer and shrink
    /// slightly; they snap back without easing.
    pub const BENTO: TiltProfile = TiltProfile {
        pitch: -2.5,
        yaw: -2.5,
        perspective: 700.0,
        lift: 0.0,
        dynamic_lift: false,
        hover_scale: 0.95,
        reset: TiltReset::Instant,
    };

    /// Replaces the eased reset duration, keeping instant resets instant.
    pub fn with_reset_duration(mut self, duration: f64) -> Self {
        if let TiltReset::Eased { .. } = self.reset {
            self.reset = TiltReset::Eased { duration };
        }
        self
    }
}

/// Rotation for a pointer over `rect`.
///
/// A rectangle with no area yields the identity vector.
pub fn tilt_for_pointer(rect: Rect, pointer: Pos2, profile: &TiltProfile) -> TiltVector {
    let center_x = rect.width() / 2.0;
    let center_y = rect.height() / 2.0;
    if center_x <= 0.0 || center_y <= 0.0 {
        return TiltVector::IDENTITY;
    }

    let x_pos = pointer.x - rect.left();
    let y_pos = pointer.y - rect.top();

    TiltVector {
        rotate_x: ((y_pos - center_y) / center_y) * -profile.pitch,
        rotate_y: ((x_pos - center_x) / center_x) * profile.yaw,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TiltPhase {
    Resting,
    Tracking(TiltVector),
    Settling { from: TiltVector, started_at: f64 },
}

/// Tilt state of one surface.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltSurface {
    profile: TiltProfile,
    phase: TiltPhase,
}

impl TiltSurface {
    pub fn new(profile: TiltProfile) -> Self {
        Self {
            profile,
            phase: TiltPhase::Resting,
        }
    }

    pub fn profile(&self) -> &TiltProfile {
        &self.profile
    }

    /// Tracks the pointer. Cancels any settle in progress so the surface
    /// follows the pointer without easing.
    pub fn pointer_moved(&mut self, rect: Rect, pointer: Pos2) {
        self.phase = TiltPhase::Tracking(tilt_for_pointer(rect, pointer, &self.profile));
    }

    /// Starts returning to the identity orientation.
    pub fn pointer_left(&mut self, now: f64) {
        let from = match self.phase {
            TiltPhase::Tracking(v) => v,
            TiltPhase::Settling { .. } => self.orientation(now),
            TiltPhase::Resting => return,
        };

        self.phase = match self.profile.reset {
            TiltReset::Eased { duration } if duration > 0.0 && !from.is_identity() => {
                TiltPhase::Settling {
                    from,
                    started_at: now,
                }
            }
            _ => TiltPhase::Resting,
        };
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, TiltPhase::Tracking(_))
    }

    /// True while an eased reset is still moving.
    pub fn is_settling(&self, now: f64) -> bool {
        match (self.phase, self.profile.reset) {
            (TiltPhase::Settling { started_at, .. }, TiltReset::Eased { duration }) => {
                now < started_at + duration
            }
            _ => false,
        }
    }

    /// Drops a finished settle back to rest.
    pub fn tick(&mut self, now: f64) {
        if matches!(self.phase, TiltPhase::Settling { .. }) && !self.is_settling(now) {
            self.phase = TiltPhase::Resting;
        }
    }

    /// Orientation to render at `now`.
    pub fn orientation(&self, now: f64) -> TiltVector {
        match self.phase {
            TiltPhase::Resting => TiltVector::IDENTITY,
            TiltPhase::Tracking(v) => v,
            TiltPhase::Settling { from, started_at } => {
                let duration = match self.profile.reset {
                    TiltReset::Eased { duration } => duration,
                    TiltReset::Instant => 0.0,
                };
                let t = EASE.sample(easing::progress(started_at, duration, now));
                if t >= 1.0 {
                    TiltVector::IDENTITY
                } else {
                    from.scaled(1.0 - t)
                }
            }
        }
    }

    /// Lift towards the viewer at `now`, in points.
    pub fn lift(&self, now: f64) -> f32 {
        if self.profile.dynamic_lift {
            return self.orientation(now).magnitude();
        }
        match self.phase {
            TiltPhase::Tracking(_) => self.profile.lift,
            _ => 0.0,
        }
    }

    /// Uniform scale at `now`.
    pub fn scale(&self) -> f32 {
        if self.is_tracking() {
            self.profile.hover_scale
        } else {
            1.0
        }
    }

    /// Instant the surface needs a repaint by, if it is still animating.
    pub fn next_wakeup(&self, now: f64) -> Option<f64> {
        self.is_settling(now).then_some(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(200.0, 100.0))
    }

    #[test]
    fn centre_pointer_is_flat() {
        let v = tilt_for_pointer(rect(), rect().center(), &TiltProfile::CONTACT_CARD);
        assert!(v.is_identity());
    }

    #[test]
    fn corners_reach_the_profile_constants() {
        let v = tilt_for_pointer(rect(), Pos2::new(300.0, 150.0), &TiltProfile::CONTACT_CARD);
        assert_eq!(v.rotate_x, -15.0);
        assert_eq!(v.rotate_y, 15.0);

        let v = tilt_for_pointer(rect(), Pos2::new(100.0, 50.0), &TiltProfile::CONTACT_PANEL);
        assert_eq!(v.rotate_x, 2.0);
        assert_eq!(v.rotate_y, -2.0);
    }

    #[test]
    fn bento_leans_away_from_pointer() {
        let v = tilt_for_pointer(rect(), Pos2::new(300.0, 150.0), &TiltProfile::BENTO);
        assert_eq!(v.rotate_x, 2.5);
        assert_eq!(v.rotate_y, -2.5);
    }

    #[test]
    fn degenerate_rect_is_identity() {
        let flat = Rect::from_min_size(Pos2::ZERO, egui::vec2(0.0, 40.0));
        assert!(tilt_for_pointer(flat, Pos2::new(5.0, 5.0), &TiltProfile::BOOK).is_identity());
    }

    #[test]
    fn eased_reset_reaches_identity() {
        let mut surface = TiltSurface::new(TiltProfile::CONTACT_CARD);
        surface.pointer_moved(rect(), Pos2::new(300.0, 150.0));
        surface.pointer_left(10.0);

        let mid = surface.orientation(10.25);
        assert!(mid.rotate_x < 0.0 && mid.rotate_x > -15.0);
        assert!(surface.is_settling(10.25));

        assert!(surface.orientation(10.5).is_identity());
        surface.tick(10.5);
        assert!(!surface.is_settling(10.5));
        assert!(surface.orientation(11.0).is_identity());
    }

    #[test]
    fn moving_again_cancels_the_settle() {
        let mut surface = TiltSurface::new(TiltProfile::CONTACT_CARD);
        surface.pointer_moved(rect(), Pos2::new(300.0, 150.0));
        surface.pointer_left(0.0);
        surface.pointer_moved(rect(), rect().center());
        assert!(surface.is_tracking());
        assert!(surface.orientation(0.1).is_identity());
    }

    #[test]
    fn bento_reset_is_instant() {
        let mut surface = TiltSurface::new(TiltProfile::BENTO);
        surface.pointer_moved(rect(), Pos2::new(100.0, 50.0));
        assert_eq!(surface.scale(), 0.95);
        surface.pointer_left(3.0);
        assert!(surface.orientation(3.0).is_identity());
        assert_eq!(surface.scale(), 1.0);
    }

    #[test]
    fn book_lift_follows_magnitude() {
        let mut surface = TiltSurface::new(TiltProfile::BOOK);
        surface.pointer_moved(rect(), Pos2::new(300.0, 150.0));
        assert_eq!(surface.lift(0.0), 16.0);
    }

    #[test]
    fn identity_projection_keeps_points() {
        let p = TiltVector::IDENTITY.project(rect(), Pos2::new(120.0, 70.0), 1000.0, 0.0);
        assert!((p.x - 120.0).abs() < 1e-4 && (p.y - 70.0).abs() < 1e-4);
    }
}
