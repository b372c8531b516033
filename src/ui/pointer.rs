//! Pointer tracking for hover-driven surfaces.
//!
//! Sections call these each frame with the rectangle they just laid out; the
//! helpers compare the live pointer with the widget state and report only
//! the events that change something.

use eframe::egui;
use kibou::{Spotlight, TiltSurface};

use crate::app::SurfaceId;
use crate::ui::panel_manager::{PageInteraction, PointerEvent};

/// Pointer position if it is over `rect` on this layer.
pub fn pointer_over(ui: &egui::Ui, rect: egui::Rect) -> Option<egui::Pos2> {
    if ui.rect_contains_pointer(rect) {
        ui.ctx().pointer_hover_pos()
    } else {
        None
    }
}

/// Reports moves over `rect` and the leave that ends tracking.
pub fn track_tilt(
    ui: &egui::Ui,
    rect: egui::Rect,
    surface: SurfaceId,
    tilt: &TiltSurface,
    out: &mut Vec<PageInteraction>,
) {
    track_tilt_clipped(ui, rect, rect, surface, tilt, out);
}

/// Like [`track_tilt`], but only the part of `rect` inside `visible` reacts.
pub fn track_tilt_clipped(
    ui: &egui::Ui,
    rect: egui::Rect,
    visible: egui::Rect,
    surface: SurfaceId,
    tilt: &TiltSurface,
    out: &mut Vec<PageInteraction>,
) {
    match pointer_over(ui, rect.intersect(visible)) {
        Some(pointer) => out.push(PageInteraction::Tilt {
            surface,
            event: PointerEvent::Moved { rect, pointer },
        }),
        None if tilt.is_tracking() => out.push(PageInteraction::Tilt {
            surface,
            event: PointerEvent::Left,
        }),
        None => {}
    }
}

/// Same as [`track_tilt`] for a badge spotlight.
pub fn track_spotlight(
    ui: &egui::Ui,
    rect: egui::Rect,
    tile: usize,
    spotlight: &Spotlight,
    out: &mut Vec<PageInteraction>,
) {
    match pointer_over(ui, rect) {
        Some(pointer) => out.push(PageInteraction::Spotlight {
            tile,
            event: PointerEvent::Moved { rect, pointer },
        }),
        None if spotlight.opacity() > 0.0 => out.push(PageInteraction::Spotlight {
            tile,
            event: PointerEvent::Left,
        }),
        None => {}
    }
}
