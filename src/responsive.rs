//! Viewport breakpoints.
//!
//! The app re-evaluates the breakpoint from the window width every frame, so
//! there is no resize listener to register or tear down.

/// Viewport width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: f32) -> Self {
        if width < 768.0 {
            Breakpoint::Mobile
        } else if width < 1024.0 {
            Breakpoint::Tablet
        } else if width < 1280.0 {
            Breakpoint::Desktop
        } else {
            Breakpoint::Wide
        }
    }

    /// Font size of animated section titles, in points.
    pub fn title_size(self) -> f32 {
        match self {
            Breakpoint::Mobile => 24.0,
            Breakpoint::Tablet => 32.0,
            Breakpoint::Desktop => 40.0,
            Breakpoint::Wide => 48.0,
        }
    }

    /// Maximum footprint of the flip book.
    pub fn book_size(self) -> [f32; 2] {
        match self {
            Breakpoint::Mobile => [512.0, 400.0],
            Breakpoint::Tablet => [672.0, 500.0],
            Breakpoint::Desktop | Breakpoint::Wide => [896.0, 600.0],
        }
    }

    /// Horizontal page padding.
    pub fn gutter(self) -> f32 {
        match self {
            Breakpoint::Mobile => 12.0,
            _ => 40.0,
        }
    }

    pub fn is_compact(self) -> bool {
        self < Breakpoint::Desktop
    }
}
