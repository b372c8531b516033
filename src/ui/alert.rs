//! Blocking alert for form validation.

use eframe::egui;
use egui::RichText;
use kibou::ThemeColors;

/// Shows `message` in a modal that blocks the rest of the page.
///
/// # Returns
/// * `bool` - True once the user dismissed the alert
pub fn render_alert(ctx: &egui::Context, message: &str, colors: &ThemeColors) -> bool {
    let mut dismissed = false;

    let modal = egui::Modal::new(egui::Id::new("contact_alert")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.label(RichText::new(message).size(16.0).color(colors.text));
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    dismissed || modal.should_close()
}
