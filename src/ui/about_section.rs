//! About section: summary, vision and mission.

use eframe::egui;
use egui::RichText;
use kibou::{AboutContent, Breakpoint, ThemeColors};

pub fn render_about(ui: &mut egui::Ui, about: &AboutContent, breakpoint: Breakpoint, colors: &ThemeColors) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&about.heading)
                .size(breakpoint.title_size())
                .color(colors.accent),
        );
    });
    ui.add_space(16.0);
    ui.label(RichText::new(&about.summary).size(16.0).color(colors.text));
    ui.add_space(24.0);

    if breakpoint.is_compact() {
        render_vision(ui, about, colors);
        ui.add_space(16.0);
        render_missions(ui, about, colors);
    } else {
        ui.columns(2, |columns| {
            render_vision(&mut columns[0], about, colors);
            render_missions(&mut columns[1], about, colors);
        });
    }
}

fn render_vision(ui: &mut egui::Ui, about: &AboutContent, colors: &ThemeColors) {
    panel(colors).show(ui, |ui| {
        ui.label(RichText::new("VISI").size(20.0).strong().color(colors.accent));
        ui.add_space(8.0);
        ui.label(RichText::new(&about.vision).color(colors.text));
    });
}

fn render_missions(ui: &mut egui::Ui, about: &AboutContent, colors: &ThemeColors) {
    panel(colors).show(ui, |ui| {
        ui.label(RichText::new("MISI").size(20.0).strong().color(colors.accent));
        ui.add_space(8.0);
        for (i, mission) in about.missions.iter().enumerate() {
            ui.horizontal_top(|ui| {
                ui.label(RichText::new(format!("{}.", i + 1)).color(colors.accent_strong));
                ui.label(RichText::new(mission).color(colors.text));
            });
        }
    });
}

fn panel(colors: &ThemeColors) -> egui::Frame {
    egui::Frame::default()
        .fill(colors.panel_background)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(20))
}
