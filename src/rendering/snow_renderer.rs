//! Snowfall rendering.

use eframe::egui;
use egui::{Color32, Painter, Rect};
use kibou::Snowfall;

/// Draws every flake at its percentage position inside `rect`.
pub fn paint_snowfall(painter: &Painter, rect: Rect, snowfall: &Snowfall, tint: Color32) {
    let painter = painter.with_clip_rect(rect.intersect(painter.clip_rect()));

    for flake in snowfall.flakes() {
        let center = egui::pos2(
            rect.left() + rect.width() * flake.x / 100.0,
            rect.top() + rect.height() * flake.y / 100.0,
        );
        painter.circle_filled(center, flake.size / 2.0, tint.gamma_multiply(flake.opacity));
    }
}
