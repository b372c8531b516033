//! Theme application.
//!
//! The site has one palette, built once and applied to the egui context each
//! frame so custom painters and stock widgets agree on colors.

use kibou::{Theme, ThemeColors};
use once_cell::sync::Lazy;

static SITE_THEME: Lazy<Theme> = Lazy::new(Theme::kibou);

/// Coordinates theme application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Palette shared by every renderer.
    pub fn colors() -> &'static ThemeColors {
        &SITE_THEME.colors
    }

    /// Applies the site theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        SITE_THEME.apply(&mut visuals);
        ctx.set_visuals(visuals);
    }
}
