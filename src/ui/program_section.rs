//! Program carousel section
//!
//! A horizontal strip of bento slides, one per program, scrolled by the
//! carousel's track offset. Arrows, dot indicators and an "n / N" counter
//! sit below the strip; hovering the strip pauses autoplay.

use eframe::egui;
use egui::{Align2, FontId, RichText, Stroke};
use kibou::{with_alpha, ProgramSection, ProgramSlide, SectionBody, ThemeColors};

use crate::app::{AppState, SurfaceId};
use crate::presentation::title_layout;
use crate::rendering::{snow_renderer, tilt_renderer};
use crate::ui::panel_manager::PageInteraction;
use crate::ui::pointer;

const SLIDE_MARGIN: f32 = 12.0;
const CONTENT_PADDING: f32 = 28.0;
const DOT_RADIUS: f32 = 5.0;
const DOT_SPACING: f32 = 20.0;

/// Renders the program heading, slide strip and controls.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Application state (read only; changes are reported)
/// * `now` - Frame time in seconds
/// * `colors` - Site palette
/// * `out` - Interaction sink
pub fn render_programs(
    ui: &mut egui::Ui,
    state: &AppState,
    now: f64,
    colors: &ThemeColors,
    out: &mut Vec<PageInteraction>,
) {
    let breakpoint = state.layout.breakpoint();
    let showcase = &state.showcase;
    let carousel = showcase.carousel();

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&state.content.programs_heading)
                .size(breakpoint.title_size())
                .color(colors.accent),
        );
    });
    ui.add_space(16.0);

    let height = if breakpoint.is_compact() { 620.0 } else { 480.0 };
    let (viewport, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::hover());

    let hovered = ui.rect_contains_pointer(viewport);
    if hovered == carousel.is_autoplay_enabled() {
        out.push(PageInteraction::CarouselHover(hovered));
    }

    let offset = showcase.strip_offset(now);
    let painter = ui.painter_at(viewport);

    for (index, slide) in carousel.slides().iter().enumerate() {
        let slide_rect = viewport.translate(egui::vec2((index as f32 - offset) * viewport.width(), 0.0));
        let card_rect = slide_rect.shrink(SLIDE_MARGIN);

        let Some(tilt) = showcase.tilt(index) else {
            continue;
        };
        pointer::track_tilt_clipped(ui, card_rect, viewport, SurfaceId::ProgramSlide(index), tilt, out);

        if !slide_rect.intersects(viewport) {
            continue;
        }

        let face = tilt_renderer::project(card_rect, tilt, now);
        tilt_renderer::paint_card(
            &painter,
            &face,
            colors.card_from,
            colors.card_to,
            Stroke::new(1.0, colors.border),
        );
        snow_renderer::paint_snowfall(&painter, face.content_rect, showcase.snowfall(), colors.text_strong);

        let content_rect = face.content_rect.shrink(CONTENT_PADDING);
        ui.scope_builder(egui::UiBuilder::new().max_rect(content_rect), |ui| {
            ui.set_clip_rect(viewport.intersect(ui.clip_rect()));
            render_slide_content(ui, slide, breakpoint.is_compact(), breakpoint.title_size(), colors);
        });
    }

    ui.add_space(12.0);
    render_controls(ui, state, colors, out);
}

fn render_slide_content(
    ui: &mut egui::Ui,
    slide: &ProgramSlide,
    compact: bool,
    title_size: f32,
    colors: &ThemeColors,
) {
    ui.vertical_centered(|ui| {
        ui.label(title_layout::title_job(&slide.title, title_size * 0.8, colors));
    });
    ui.add_space(20.0);

    if compact || slide.sections.len() < 2 {
        for section in &slide.sections {
            render_program_section(ui, section, colors);
            ui.add_space(12.0);
        }
    } else {
        ui.columns(slide.sections.len(), |columns| {
            for (column, section) in columns.iter_mut().zip(&slide.sections) {
                render_program_section(column, section, colors);
            }
        });
    }
}

fn render_program_section(ui: &mut egui::Ui, section: &ProgramSection, colors: &ThemeColors) {
    if let Some(subtitle) = &section.subtitle {
        ui.label(RichText::new(subtitle).size(18.0).strong().color(colors.accent));
        ui.add_space(6.0);
    }

    match &section.body {
        SectionBody::Paragraph(text) => {
            ui.label(RichText::new(text).size(15.0).color(colors.text));
        }
        SectionBody::BulletList(items) => {
            for item in items {
                ui.horizontal_top(|ui| {
                    ui.label(RichText::new("•").color(colors.accent_strong));
                    ui.label(RichText::new(item).size(15.0).color(colors.text));
                });
            }
        }
    }
}

/// Prev/next arrows, one dot per slide and the slide counter.
fn render_controls(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors, out: &mut Vec<PageInteraction>) {
    let carousel = state.showcase.carousel();
    let (row, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 36.0), egui::Sense::hover());
    let center = row.center();

    let prev_rect = egui::Rect::from_center_size(egui::pos2(row.left() + 24.0, center.y), egui::vec2(40.0, 32.0));
    let next_rect = egui::Rect::from_center_size(egui::pos2(row.right() - 24.0, center.y), egui::vec2(40.0, 32.0));

    if ui.put(prev_rect, egui::Button::new("⏴")).clicked() {
        out.push(PageInteraction::CarouselPrev);
    }
    if ui.put(next_rect, egui::Button::new("⏵")).clicked() {
        out.push(PageInteraction::CarouselNext);
    }

    let count = carousel.len();
    let first_x = center.x - (count.saturating_sub(1)) as f32 * DOT_SPACING / 2.0;
    let painter = ui.painter();

    for index in 0..count {
        let dot_center = egui::pos2(first_x + index as f32 * DOT_SPACING, center.y - 6.0);
        let hit = egui::Rect::from_center_size(dot_center, egui::vec2(DOT_SPACING, DOT_SPACING));
        let response = ui
            .interact(hit, ui.id().with(("program_dot", index)), egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        let color = if index == carousel.current_index() {
            colors.accent
        } else if response.hovered() {
            with_alpha(colors.accent, 160)
        } else {
            with_alpha(colors.text, 80)
        };
        painter.circle_filled(dot_center, DOT_RADIUS, color);

        if response.clicked() {
            out.push(PageInteraction::CarouselGoTo(index));
        }
    }

    painter.text(
        egui::pos2(center.x, row.bottom()),
        Align2::CENTER_BOTTOM,
        format!("{} / {}", carousel.current_index() + 1, count),
        FontId::proportional(12.0),
        colors.text_dim,
    );
}
