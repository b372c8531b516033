//! Gallery section
//!
//! One wide bento tile followed by a grid of smaller ones. The file
//! extension decides how a tile's media is shown: images are loaded and
//! mapped onto the tilted face, everything else (and an image still loading
//! or failing to load) gets a labelled placeholder. Tiles may carry a badge
//! with a cursor-following spotlight. A tile without a media source is drawn
//! as a solid "coming soon" tile.

use eframe::egui;
use egui::{Align2, Color32, FontId, Rect, RichText, Stroke};
use egui::load::TexturePoll;
use kibou::{hex_to_color32, media_uri, with_alpha, GalleryItem, MediaKind, ThemeColors};

use crate::app::{AppState, SurfaceId};
use crate::presentation::title_layout;
use crate::rendering::tilt_renderer::TiltedFace;
use crate::rendering::{gradient, tilt_renderer};
use crate::ui::panel_manager::PageInteraction;
use crate::ui::pointer;

const TILE_GAP: f32 = 28.0;
const TILE_PADDING: f32 = 20.0;
const BADGE_SIZE: egui::Vec2 = egui::vec2(190.0, 36.0);
const BADGE_TEXT: &str = "⏵ LPK KIBOU GENIUS";
const SPOTLIGHT_RADIUS: f32 = 100.0;
const SPOTLIGHT_FADE: f32 = 0.3;

/// Renders the gallery heading and tiles.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Application state (read only; changes are reported)
/// * `now` - Frame time in seconds
/// * `colors` - Site palette
/// * `out` - Interaction sink
pub fn render_gallery(
    ui: &mut egui::Ui,
    state: &AppState,
    now: f64,
    colors: &ThemeColors,
    out: &mut Vec<PageInteraction>,
) {
    let breakpoint = state.layout.breakpoint();
    let items = &state.content.gallery;

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&state.content.gallery_heading)
                .size(breakpoint.title_size() * 1.2)
                .strong()
                .color(colors.text),
        );
    });
    ui.add_space(24.0);

    let Some((first, rest)) = items.split_first() else {
        return;
    };

    let width = ui.available_width();
    let hero_height = if breakpoint.is_compact() { 384.0 } else { 520.0 };
    let (hero_rect, _) = ui.allocate_exact_size(egui::vec2(width, hero_height), egui::Sense::hover());
    render_tile(ui, hero_rect, 0, first, state, now, colors, out);

    ui.add_space(TILE_GAP);

    let columns = if breakpoint.is_compact() { 1 } else { 2 };
    let tile_width = (width - TILE_GAP * (columns - 1) as f32) / columns as f32;
    let tile_height = if breakpoint.is_compact() { 280.0 } else { 340.0 };

    for (row_index, row) in rest.chunks(columns).enumerate() {
        let (row_rect, _) = ui.allocate_exact_size(egui::vec2(width, tile_height), egui::Sense::hover());
        for (column, item) in row.iter().enumerate() {
            let index = 1 + row_index * columns + column;
            let rect = Rect::from_min_size(
                row_rect.min + egui::vec2(column as f32 * (tile_width + TILE_GAP), 0.0),
                egui::vec2(tile_width, tile_height),
            );
            render_tile(ui, rect, index, item, state, now, colors, out);
        }
        ui.add_space(TILE_GAP);
    }
}

#[allow(clippy::too_many_arguments)]
fn render_tile(
    ui: &mut egui::Ui,
    rect: Rect,
    index: usize,
    item: &GalleryItem,
    state: &AppState,
    now: f64,
    colors: &ThemeColors,
    out: &mut Vec<PageInteraction>,
) {
    let Some(tilt) = state.gallery.tilt(index) else {
        return;
    };
    pointer::track_tilt(ui, rect, SurfaceId::GalleryTile(index), tilt, out);

    let face = tilt_renderer::project(rect, tilt, now);
    let painter = ui.painter();
    let coming_soon = item.src.is_empty();

    if coming_soon {
        tilt_renderer::paint_card(painter, &face, colors.accent_deep, colors.accent_deep, Stroke::NONE);
    } else {
        tilt_renderer::paint_card(painter, &face, colors.card_from, colors.card_to, Stroke::new(1.0, colors.border));
        paint_media(ui, &face, &item.src, &state.config.media.root, colors);
    }

    let content = face.content_rect.shrink(TILE_PADDING);
    let title_color = if coming_soon { Color32::BLACK } else { colors.text };

    ui.scope_builder(egui::UiBuilder::new().max_rect(content), |ui| {
        if let Some(title) = &item.title {
            let job = title_layout::styled_job(
                title,
                FontId::proportional(if coming_soon { 56.0 } else { 40.0 }),
                title_color,
                if coming_soon { colors.text_strong } else { colors.accent },
            );
            ui.label(job);
        }
        if let Some(description) = &item.description {
            ui.add_space(12.0);
            ui.label(RichText::new(description).color(title_color));
        }
    });

    if item.badge {
        let badge = Rect::from_min_size(
            egui::pos2(content.left(), content.bottom() - BADGE_SIZE.y),
            BADGE_SIZE,
        );
        render_badge(ui, badge, index, state, colors, out);
    }
}

/// Paints a loaded image onto the face, or the placeholder while it is
/// unavailable.
fn paint_media(ui: &egui::Ui, face: &TiltedFace, src: &str, media_root: &str, colors: &ThemeColors) {
    if MediaKind::from_path(src) == MediaKind::Image {
        let image = egui::Image::new(media_uri(media_root, src));
        match image.load_for_size(ui.ctx(), face.content_rect.size()) {
            Ok(TexturePoll::Ready { texture }) => {
                let painter = ui.painter();
                let uv = tilt_renderer::cover_uv(texture.size, face.content_rect.size());
                tilt_renderer::paint_texture(painter, face, texture.id, uv);
                // Dim under the title text
                painter.add(egui::Shape::convex_polygon(
                    face.corners.to_vec(),
                    with_alpha(Color32::BLACK, 90),
                    Stroke::NONE,
                ));
                painter.add(egui::Shape::closed_line(face.corners.to_vec(), Stroke::new(1.0, colors.border)));
                return;
            }
            Ok(TexturePoll::Pending { .. }) => {}
            Err(err) => tracing::trace!(src, error = %err, "gallery image unavailable"),
        }
    }
    paint_media_placeholder(ui.painter(), face.content_rect, src, colors);
}

/// Frame for the tile's media, labelled with the resolved media kind.
fn paint_media_placeholder(painter: &egui::Painter, rect: Rect, src: &str, colors: &ThemeColors) {
    let kind = MediaKind::from_path(src);
    let label = match kind {
        MediaKind::Image => format!("🖼  {src}"),
        MediaKind::Video => format!("▶  {src}"),
        MediaKind::Unsupported => kind.label().to_string(),
    };

    let tint = match kind {
        MediaKind::Unsupported => colors.error,
        _ => colors.text_dim,
    };

    gradient::radial_glow(painter, rect.center(), rect.width().min(rect.height()) * 0.6, with_alpha(tint, 18));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(14.0),
        with_alpha(tint, 140),
    );
}

/// Pill badge with a radial spotlight that follows the pointer.
fn render_badge(
    ui: &mut egui::Ui,
    rect: Rect,
    tile: usize,
    state: &AppState,
    colors: &ThemeColors,
    out: &mut Vec<PageInteraction>,
) {
    let Some(spotlight) = state.gallery.spotlight(tile) else {
        return;
    };
    pointer::track_spotlight(ui, rect, tile, spotlight, out);

    let opacity = ui.ctx().animate_value_with_time(
        ui.id().with(("badge_spotlight", tile)),
        spotlight.opacity(),
        SPOTLIGHT_FADE,
    );

    let painter = ui.painter_at(rect);
    let radius = rect.height() / 2.0;
    painter.rect_filled(rect, radius, Color32::BLACK);

    if opacity > 0.0 {
        let glow = hex_to_color32("#656fe2").gamma_multiply(0.53 * opacity);
        gradient::radial_glow(&painter, rect.min + spotlight.cursor(), SPOTLIGHT_RADIUS, glow);
    }

    painter.rect_stroke(rect, radius, Stroke::new(1.0, colors.border), egui::StrokeKind::Inside);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        BADGE_TEXT,
        FontId::proportional(12.0),
        Color32::WHITE,
    );

    ui.interact(rect, ui.id().with(("badge", tile)), egui::Sense::hover())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
}
