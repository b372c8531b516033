//! Contact section
//!
//! Tilting contact cards beside a gently tilting form panel. Cards with a
//! link open it on click; the form is submitted through the application
//! coordinator, which validates it and opens the messaging link.

use eframe::egui;
use egui::{Align2, Color32, FontId, Rect, RichText, Stroke};
use kibou::{with_alpha, ContactCard, ContactField, ThemeColors, TiltSurface};

use crate::app::{AppState, SurfaceId};
use crate::rendering::tilt_renderer;
use crate::state::ContactState;
use crate::ui::panel_manager::PageInteraction;
use crate::ui::pointer;

const CARD_HEIGHT: f32 = 180.0;
const CARD_GAP: f32 = 24.0;
const FORM_HEIGHT: f32 = 600.0;
const FORM_PADDING: f32 = 28.0;

/// Renders the contact heading, cards and form.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Application state; the form fields are edited in place
/// * `now` - Frame time in seconds
/// * `colors` - Site palette
/// * `out` - Interaction sink
pub fn render_contact(
    ui: &mut egui::Ui,
    state: &mut AppState,
    now: f64,
    colors: &ThemeColors,
    out: &mut Vec<PageInteraction>,
) {
    let breakpoint = state.layout.breakpoint();

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&state.content.contact_heading)
                .size(breakpoint.title_size())
                .strong()
                .color(colors.text),
        );
    });
    ui.add_space(40.0);

    let cards = &state.content.contact_cards;
    let contact = &mut state.contact;

    if breakpoint.is_compact() {
        render_cards(ui, cards, contact, 1, now, colors, out);
        ui.add_space(CARD_GAP * 2.0);
        render_form(ui, contact, now, colors, out);
    } else {
        ui.columns(2, |columns| {
            let [left, right] = columns else {
                return;
            };
            render_cards(left, cards, contact, 2, now, colors, out);
            render_form(right, contact, now, colors, out);
        });
    }
}

fn render_cards(
    ui: &mut egui::Ui,
    cards: &[ContactCard],
    contact: &ContactState,
    columns: usize,
    now: f64,
    colors: &ThemeColors,
    out: &mut Vec<PageInteraction>,
) {
    let width = ui.available_width();
    let card_width = (width - CARD_GAP * (columns - 1) as f32) / columns as f32;

    for (row_index, row) in cards.chunks(columns).enumerate() {
        let (row_rect, _) = ui.allocate_exact_size(egui::vec2(width, CARD_HEIGHT), egui::Sense::hover());
        for (column, card) in row.iter().enumerate() {
            let index = row_index * columns + column;
            let rect = Rect::from_min_size(
                row_rect.min + egui::vec2(column as f32 * (card_width + CARD_GAP), 0.0),
                egui::vec2(card_width, CARD_HEIGHT),
            );
            if let Some(tilt) = contact.card_tilt(index) {
                render_card(ui, rect, index, card, tilt, now, colors, out);
            }
        }
        ui.add_space(CARD_GAP);
    }
}

#[allow(clippy::too_many_arguments)]
fn render_card(
    ui: &mut egui::Ui,
    rect: Rect,
    index: usize,
    card: &ContactCard,
    tilt: &TiltSurface,
    now: f64,
    colors: &ThemeColors,
    out: &mut Vec<PageInteraction>,
) {
    pointer::track_tilt(ui, rect, SurfaceId::ContactCard(index), tilt, out);

    let face = tilt_renderer::project(rect, tilt, now);
    let painter = ui.painter();
    tilt_renderer::paint_card(
        painter,
        &face,
        with_alpha(Color32::WHITE, 26),
        with_alpha(Color32::WHITE, 8),
        Stroke::new(1.0, with_alpha(Color32::WHITE, 51)),
    );

    let center = face.content_rect.center();
    painter.text(
        center - egui::vec2(0.0, 40.0),
        Align2::CENTER_CENTER,
        &card.icon,
        FontId::proportional(40.0),
        colors.accent,
    );
    painter.text(
        center + egui::vec2(0.0, 12.0),
        Align2::CENTER_CENTER,
        &card.title,
        FontId::proportional(20.0),
        colors.text_strong,
    );
    painter.text(
        center + egui::vec2(0.0, 44.0),
        Align2::CENTER_CENTER,
        &card.value,
        FontId::proportional(13.0),
        colors.text_dim,
    );

    if let Some(link) = &card.link {
        let response = ui
            .interact(rect, ui.id().with(("contact_card", index)), egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            out.push(PageInteraction::OpenLink(link.clone()));
        }
    }
}

fn render_form(
    ui: &mut egui::Ui,
    contact: &mut ContactState,
    now: f64,
    colors: &ThemeColors,
    out: &mut Vec<PageInteraction>,
) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), FORM_HEIGHT), egui::Sense::hover());
    pointer::track_tilt(ui, rect, SurfaceId::ContactPanel, contact.panel_tilt(), out);

    let face = tilt_renderer::project(rect, contact.panel_tilt(), now);
    tilt_renderer::paint_card(
        ui.painter(),
        &face,
        colors.card_from,
        colors.card_to,
        Stroke::new(1.0, colors.border),
    );

    ui.scope_builder(egui::UiBuilder::new().max_rect(face.content_rect.shrink(FORM_PADDING)), |ui| {
        ui.label(RichText::new("💬 Kirim Pesan").size(28.0).strong().color(colors.text_strong));
        ui.add_space(24.0);

        let form = contact.form_mut();
        for field in ContactField::ALL {
            render_field(ui, field, form.field_mut(field), colors);
            ui.add_space(16.0);
        }

        ui.add_space(8.0);
        let submit = egui::Button::new(
            RichText::new("Kirim Pesan via WhatsApp")
                .size(17.0)
                .strong()
                .color(Color32::WHITE),
        )
        .fill(colors.spine)
        .min_size(egui::vec2(ui.available_width(), 48.0));

        if ui.add(submit).on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
            out.push(PageInteraction::SubmitContact);
        }
    });
}

fn render_field(ui: &mut egui::Ui, field: ContactField, value: &mut String, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(field.label()).strong().color(colors.text_strong));
        if field.is_required() {
            ui.label(RichText::new("*").color(colors.accent));
        }
    });

    let edit = if field.is_multiline() {
        egui::TextEdit::multiline(value).desired_rows(5)
    } else {
        egui::TextEdit::singleline(value)
    };
    ui.add(
        edit.hint_text(field.placeholder())
            .desired_width(f32::INFINITY)
            .margin(egui::Margin::symmetric(12, 10)),
    );
}
