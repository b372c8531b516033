//! Page layout state.
//!
//! Tracks the active breakpoint and a navigation request that the page
//! scroll area honours on the next frame.

use kibou::Breakpoint;

/// Top-level sections of the page, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Program,
    Story,
    Gallery,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Program,
        Section::Story,
        Section::Gallery,
        Section::Contact,
    ];

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Beranda",
            Section::About => "Tentang",
            Section::Program => "Program",
            Section::Story => "Kisah",
            Section::Gallery => "Galeri",
            Section::Contact => "Kontak",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutState {
    breakpoint: Breakpoint,
    scroll_target: Option<Section>,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            breakpoint: Breakpoint::Desktop,
            scroll_target: None,
        }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Re-derives the breakpoint from the window width.
    pub fn update_width(&mut self, width: f32) {
        let breakpoint = Breakpoint::from_width(width);
        if breakpoint != self.breakpoint {
            tracing::debug!(?breakpoint, width, "breakpoint changed");
            self.breakpoint = breakpoint;
        }
    }

    pub fn request_scroll(&mut self, section: Section) {
        self.scroll_target = Some(section);
    }

    /// Consumes the pending scroll if it targets `section`.
    pub fn take_scroll_target(&mut self, section: Section) -> bool {
        if self.scroll_target == Some(section) {
            self.scroll_target = None;
            true
        } else {
            false
        }
    }
}
