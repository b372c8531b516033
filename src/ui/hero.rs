//! Hero section: the institute's name, tagline and a call to action.

use eframe::egui;
use egui::RichText;
use kibou::{Breakpoint, HeroContent, ThemeColors};

use crate::presentation::title_layout;
use crate::rendering::gradient;
use crate::state::Section;

/// Hero title relative to the section title size.
const HERO_TITLE_SCALE: f32 = 1.6;

/// Renders the hero block.
///
/// # Returns
/// * `Option<Section>` - Navigation target when the call to action is clicked
pub fn render_hero(
    ui: &mut egui::Ui,
    hero: &HeroContent,
    breakpoint: Breakpoint,
    colors: &ThemeColors,
) -> Option<Section> {
    let height = if breakpoint.is_compact() { 320.0 } else { 440.0 };
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::hover());

    gradient::fill_vertical(ui.painter(), rect, colors.page_mid, colors.background);

    let mut target = None;
    ui.scope_builder(egui::UiBuilder::new().max_rect(rect.shrink(24.0)), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(height * 0.2);
            ui.label(title_layout::title_job(
                &hero.title,
                breakpoint.title_size() * HERO_TITLE_SCALE,
                colors,
            ));
            ui.add_space(16.0);
            ui.label(RichText::new(&hero.tagline).size(18.0).color(colors.text_dim));
            ui.add_space(28.0);

            let cta = egui::Button::new(RichText::new("Hubungi Kami").size(16.0).color(colors.page_to))
                .fill(colors.accent)
                .min_size(egui::vec2(160.0, 40.0));
            if ui.add(cta).on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                target = Some(Section::Contact);
            }
        });
    });

    target
}
