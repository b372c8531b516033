//! Cursor-following highlight for badge buttons.

use egui::{Pos2, Rect, Vec2};

/// Hover highlight: visible while the pointer is over the badge, centred on
/// the pointer position relative to the badge's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spotlight {
    cursor: Vec2,
    opacity: f32,
}

impl Spotlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_entered(&mut self) {
        self.opacity = 1.0;
    }

    pub fn pointer_left(&mut self) {
        self.opacity = 0.0;
    }

    pub fn pointer_moved(&mut self, badge: Rect, pointer: Pos2) {
        self.cursor = pointer - badge.min;
    }

    /// Target opacity; the renderer animates towards it.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_relative_cursor_and_hover() {
        let badge = Rect::from_min_size(Pos2::new(40.0, 60.0), egui::vec2(120.0, 32.0));
        let mut spot = Spotlight::new();
        assert_eq!(spot.opacity(), 0.0);

        spot.pointer_entered();
        spot.pointer_moved(badge, Pos2::new(50.0, 70.0));
        assert_eq!(spot.opacity(), 1.0);
        assert_eq!(spot.cursor(), egui::vec2(10.0, 10.0));

        spot.pointer_left();
        assert_eq!(spot.opacity(), 0.0);
    }
}
