//! Theme support for the Kibou site.
//!
//! The site has a single night palette: black backgrounds, slate panels,
//! pale blue text and yellow accents. The palette is applied to egui visuals
//! once per frame and also used directly by the custom painters.
//!
//! # Examples
//!
//! ```
//! use kibou::theme::Theme;
//!
//! let theme = Theme::kibou();
//! println!("accent: {:?}", theme.colors.accent);
//! ```

use egui::Color32;

/// Complete color palette for the site.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Accents
    pub accent: Color32,
    pub accent_strong: Color32,
    pub accent_deep: Color32,
    pub indicator: Color32,

    // Surfaces (gradient stops, light to dark)
    pub card_from: Color32,
    pub card_to: Color32,
    pub page_from: Color32,
    pub page_mid: Color32,
    pub page_to: Color32,
    pub book_cover: Color32,
    pub spine: Color32,

    pub border: Color32,
    pub error: Color32,
}

/// A theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

impl Theme {
    /// The site's night palette.
    pub fn kibou() -> Self {
        Self {
            name: "Kibou".to_string(),
            description: "Black and slate with yellow accents".to_string(),
            colors: ThemeColors {
                background: hex_to_color32("#000000"),
                panel_background: hex_to_color32("#0f172a"),
                extreme_background: hex_to_color32("#020617"),

                // Tailwind blue-50 / blue-100
                text: hex_to_color32("#eff6ff"),
                text_dim: with_alpha(hex_to_color32("#dbeafe"), 200),
                text_strong: Color32::WHITE,

                // yellow-400 / 500 / 600
                accent: hex_to_color32("#facc15"),
                accent_strong: hex_to_color32("#eab308"),
                accent_deep: hex_to_color32("#ca8a04"),
                // blue-500
                indicator: hex_to_color32("#3b82f6"),

                card_from: hex_to_color32("#393e46"),
                card_to: hex_to_color32("#000000"),
                page_from: hex_to_color32("#1e293b"),
                page_mid: hex_to_color32("#0f172a"),
                page_to: hex_to_color32("#020617"),
                book_cover: hex_to_color32("#1f2937"),
                spine: hex_to_color32("#4b5563"),

                border: with_alpha(Color32::WHITE, 60),
                error: hex_to_color32("#ef4444"),
            },
        }
    }

    /// Applies the palette to egui visuals.
    pub fn apply(&self, visuals: &mut egui::Visuals) {
        let colors = &self.colors;

        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.page_from;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.accent_deep;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.page_from;
        visuals.widgets.inactive.weak_bg_fill = with_alpha(Color32::WHITE, 26);
        visuals.widgets.hovered.bg_fill = colors.card_from;
        visuals.widgets.hovered.weak_bg_fill = with_alpha(Color32::WHITE, 51);
        visuals.widgets.active.bg_fill = colors.accent_deep;

        visuals.hyperlink_color = colors.accent;
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.accent_strong;
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::kibou()
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgba_unmultiplied(r, g, b, color.a())
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Linear blend between two colors, `t` in `[0, 1]`.
pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
        mix(from.a(), to.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(hex_to_color32("#facc15"), Color32::from_rgb(0xfa, 0xcc, 0x15));
        assert_eq!(hex_to_color32("nope"), Color32::BLACK);
    }

    #[test]
    fn lerp_hits_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }
}
