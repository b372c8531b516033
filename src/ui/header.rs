//! Header panel UI rendering
//!
//! Brand mark on the left, one link per page section on the right.

use eframe::egui;
use egui::RichText;
use kibou::ThemeColors;

use crate::state::Section;

/// Renders the header bar.
///
/// # Returns
/// * `Option<Section>` - Section whose link was clicked
pub fn render_header(ui: &mut egui::Ui, brand: &str, colors: &ThemeColors) -> Option<Section> {
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(brand).size(18.0).strong().color(colors.accent));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left, so the last section is added first.
            for section in Section::ALL.iter().rev() {
                let link = egui::Button::new(RichText::new(section.label()).color(colors.text))
                    .frame(false);
                if ui.add(link).on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                    clicked = Some(*section);
                }
            }
        });
    });

    clicked
}
