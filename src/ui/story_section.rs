//! Story book section
//!
//! The "Materi Pembelajaran" title above a page-flip book. The book's
//! container tilts with the pointer; arrows and page indicators stay visible
//! but are disabled while a flip is in flight.

use eframe::egui;
use kibou::{with_alpha, ThemeColors};

use crate::app::{AppState, SurfaceId};
use crate::presentation::title_layout;
use crate::rendering::book_renderer;
use crate::ui::panel_manager::PageInteraction;
use crate::ui::pointer;

const INDICATOR_WIDTH: f32 = 28.0;
const INDICATOR_HEIGHT: f32 = 6.0;
const INDICATOR_GAP: f32 = 10.0;
/// Room around the book for the cover edge and the leaf's bulge.
const BOOK_BLEED: f32 = 40.0;

/// Renders the story title, the book and its controls.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Application state (read only; changes are reported)
/// * `now` - Frame time in seconds
/// * `colors` - Site palette
/// * `out` - Interaction sink
pub fn render_story(
    ui: &mut egui::Ui,
    state: &AppState,
    now: f64,
    colors: &ThemeColors,
    out: &mut Vec<PageInteraction>,
) {
    let breakpoint = state.layout.breakpoint();
    let story = &state.story;
    let book = story.book();

    ui.vertical_centered(|ui| {
        ui.label(title_layout::title_job(&state.content.story_title, breakpoint.title_size(), colors));
    });
    ui.add_space(24.0);

    let [max_width, max_height] = breakpoint.book_size();
    let width = max_width.min((ui.available_width() - BOOK_BLEED).max(160.0));
    let height = max_height * (width / max_width);

    let (area, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height + BOOK_BLEED * 2.0),
        egui::Sense::hover(),
    );
    let book_rect = egui::Rect::from_center_size(area.center(), egui::vec2(width, height));

    let hovered = ui.rect_contains_pointer(book_rect);
    if hovered != book.is_hovered() {
        out.push(PageInteraction::BookHover(hovered));
    }
    pointer::track_tilt(ui, book_rect, SurfaceId::Book, story.tilt(), out);

    book_renderer::paint_book(&ui.painter_at(area), book_rect, story, now, colors);

    ui.add_space(8.0);
    render_controls(ui, state, colors, out);
}

fn render_controls(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors, out: &mut Vec<PageInteraction>) {
    let book = state.story.book();
    let enabled = !book.is_flipping();

    let (row, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 36.0), egui::Sense::hover());
    let center = row.center();

    let count = book.len();
    let strip_width = count as f32 * INDICATOR_WIDTH + count.saturating_sub(1) as f32 * INDICATOR_GAP;
    let first_x = center.x - strip_width / 2.0;

    let prev_rect = egui::Rect::from_center_size(egui::pos2(first_x - 40.0, center.y), egui::vec2(40.0, 32.0));
    let next_rect = egui::Rect::from_center_size(
        egui::pos2(first_x + strip_width + 40.0, center.y),
        egui::vec2(40.0, 32.0),
    );

    if arrow_button(ui, prev_rect, "⏴", enabled) {
        out.push(PageInteraction::BookPrev);
    }
    if arrow_button(ui, next_rect, "⏵", enabled) {
        out.push(PageInteraction::BookNext);
    }

    let sense = if enabled { egui::Sense::click() } else { egui::Sense::hover() };
    for index in 0..count {
        let rect = egui::Rect::from_min_size(
            egui::pos2(
                first_x + index as f32 * (INDICATOR_WIDTH + INDICATOR_GAP),
                center.y - INDICATOR_HEIGHT / 2.0,
            ),
            egui::vec2(INDICATOR_WIDTH, INDICATOR_HEIGHT),
        );
        let response = ui.interact(rect.expand(6.0), ui.id().with(("page_indicator", index)), sense);

        let color = match (index == book.current_index(), enabled) {
            (true, _) => colors.indicator,
            (false, true) if response.hovered() => with_alpha(colors.indicator, 160),
            (false, true) => with_alpha(colors.text, 90),
            (false, false) => with_alpha(colors.text, 40),
        };
        ui.painter().rect_filled(rect, INDICATOR_HEIGHT / 2.0, color);

        if response.clicked() {
            out.push(PageInteraction::BookGoTo(index));
        }
    }
}

/// A fixed-position arrow that greys out when `enabled` is false.
fn arrow_button(ui: &mut egui::Ui, rect: egui::Rect, label: &str, enabled: bool) -> bool {
    ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
        ui.add_enabled(enabled, egui::Button::new(label).min_size(rect.size()))
            .clicked()
    })
    .inner
}
