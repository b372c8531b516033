//! Page-flip book rendering
//!
//! The open book is a projected spread: cover, a blank left page, the
//! current page on the right and a spine between them. While a flip is in
//! flight a leaf hinged on the spine sweeps across the spread; its outer
//! edge follows `cos(angle)` and bulges towards the viewer mid-turn.

use eframe::egui;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};
use kibou::{adjust_brightness, lerp_color, with_alpha, FlipDirection, StoryPage, ThemeColors};

use crate::rendering::gradient;
use crate::rendering::tilt_renderer;
use crate::state::BookState;

/// Vertical overshoot of the leaf's free edge at 90°, as a fraction of height.
const LEAF_BULGE: f32 = 0.04;
const PAGE_PADDING: f32 = 28.0;
const COVER_MARGIN: f32 = 10.0;

/// Renders the whole book for the current frame.
///
/// # Arguments
/// * `painter` - Painter for the story section
/// * `rect` - Footprint of the open book
/// * `story` - Book and container tilt state
/// * `now` - Frame time in seconds
/// * `colors` - Site palette
pub fn paint_book(painter: &Painter, rect: Rect, story: &BookState, now: f64, colors: &ThemeColors) {
    let book = story.book();

    let cover = tilt_renderer::project(rect.expand(COVER_MARGIN), story.tilt(), now);
    painter.add(Shape::convex_polygon(
        cover.corners.to_vec(),
        colors.book_cover,
        Stroke::new(1.0, colors.spine),
    ));

    let face = tilt_renderer::project(rect, story.tilt(), now);
    let spread = face.corners;

    // Left page
    gradient::fill_quad(
        painter,
        sub_quad(spread, 0.0, 0.5),
        colors.page_from,
        colors.page_mid,
        colors.page_to,
    );

    // Right page shows the target as soon as a forward flip starts; a
    // backward flip uncovers it only after the leaf passes the spine.
    let progress = book.flip_progress(now);
    let right_page = match (book.incoming_page(), progress) {
        (Some(incoming), Some(_)) if book.direction() == FlipDirection::Next => incoming,
        (Some(incoming), Some(p)) if p >= 0.5 => incoming,
        _ => book.current_page(),
    };
    gradient::fill_quad(
        painter,
        sub_quad(spread, 0.5, 1.0),
        colors.page_from,
        colors.page_mid,
        colors.page_to,
    );

    let content_rect = face.content_rect;
    let left_rect = Rect::from_min_max(content_rect.min, egui::pos2(content_rect.center().x, content_rect.max.y));
    let right_rect = Rect::from_min_max(egui::pos2(content_rect.center().x, content_rect.min.y), content_rect.max);

    paint_left_page(painter, left_rect, book.current_index(), book.len(), colors);
    paint_page_content(painter, right_rect.shrink(PAGE_PADDING), right_page, colors);

    if let Some(p) = progress {
        paint_leaf(painter, spread, p, book.direction(), colors);
    }

    // Spine
    let spine_top = bilinear(spread, 0.5, 0.0);
    let spine_bottom = bilinear(spread, 0.5, 1.0);
    painter.line_segment([spine_top, spine_bottom], Stroke::new(4.0, colors.spine));
}

/// The turning leaf. `progress` is the eased flip progress in `[0, 1]`.
fn paint_leaf(painter: &Painter, spread: [Pos2; 4], progress: f32, direction: FlipDirection, colors: &ThemeColors) {
    let angle = progress * std::f32::consts::PI;
    let reach = 0.5 * angle.cos();
    let bulge = LEAF_BULGE * angle.sin();

    let free_u = match direction {
        FlipDirection::Next => 0.5 + reach,
        FlipDirection::Prev => 0.5 - reach,
    };

    let hinge_top = bilinear(spread, 0.5, 0.0);
    let hinge_bottom = bilinear(spread, 0.5, 1.0);
    let free_top = bilinear(spread, free_u, -bulge);
    let free_bottom = bilinear(spread, free_u, 1.0 + bulge);

    // Keep the polygon clockwise whichever side the free edge is on.
    let quad = if free_u >= 0.5 {
        [hinge_top, free_top, free_bottom, hinge_bottom]
    } else {
        [free_top, hinge_top, hinge_bottom, free_bottom]
    };

    // The face darkens as it turns edge-on.
    let shade = 1.0 - 0.45 * angle.sin();
    let from = adjust_brightness(colors.page_from, shade);
    let to = adjust_brightness(colors.page_to, shade);
    gradient::fill_quad_two_stop(painter, quad, from, to);
    painter.add(Shape::closed_line(quad.to_vec(), Stroke::new(1.0, with_alpha(Color32::WHITE, 30))));
}

fn paint_left_page(painter: &Painter, rect: Rect, current: usize, total: usize, colors: &ThemeColors) {
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "KIBOU",
        FontId::proportional(rect.width() * 0.18),
        with_alpha(colors.accent, 24),
    );
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - PAGE_PADDING),
        Align2::CENTER_BOTTOM,
        format!("{} / {}", current + 1, total),
        FontId::proportional(13.0),
        colors.text_dim,
    );
}

/// Icon badge, title, description and up to three features.
fn paint_page_content(painter: &Painter, rect: Rect, page: &StoryPage, colors: &ThemeColors) {
    let mut cursor = rect.left_top();

    if let Some(icon) = &page.icon {
        let radius = 26.0;
        let center = cursor + egui::vec2(radius, radius);
        painter.circle_filled(center, radius, colors.accent);
        painter.text(center, Align2::CENTER_CENTER, icon, FontId::proportional(26.0), colors.page_to);
        cursor.y += radius * 2.0 + 16.0;
    }

    let title = painter.layout(
        page.title.clone(),
        FontId::proportional(24.0),
        colors.accent,
        rect.width(),
    );
    let title_height = title.size().y;
    painter.galley(cursor, title, colors.accent);
    cursor.y += title_height + 12.0;

    let description = painter.layout(
        page.description.clone(),
        FontId::proportional(15.0),
        colors.text,
        rect.width(),
    );
    let description_height = description.size().y;
    painter.galley(cursor, description, colors.text);
    cursor.y += description_height + 16.0;

    for feature in page.visible_features() {
        if cursor.y > rect.bottom() {
            break;
        }
        painter.circle_filled(cursor + egui::vec2(4.0, 9.0), 4.0, colors.accent_strong);
        let line = painter.layout(
            feature.clone(),
            FontId::proportional(14.0),
            lerp_color(colors.text, colors.text_dim, 0.3),
            rect.width() - 16.0,
        );
        let line_height = line.size().y;
        painter.galley(cursor + egui::vec2(16.0, 0.0), line, colors.text);
        cursor.y += line_height + 6.0;
    }
}

/// Point at `(u, v)` of a quad, clockwise from the top-left.
///
/// `v` outside `[0, 1]` extrapolates along the quad's vertical edges.
fn bilinear(quad: [Pos2; 4], u: f32, v: f32) -> Pos2 {
    let top = quad[0].lerp(quad[1], u);
    let bottom = quad[3].lerp(quad[2], u);
    top.lerp(bottom, v)
}

/// Vertical strip of a quad between `u0` and `u1`.
fn sub_quad(quad: [Pos2; 4], u0: f32, u1: f32) -> [Pos2; 4] {
    [
        bilinear(quad, u0, 0.0),
        bilinear(quad, u1, 0.0),
        bilinear(quad, u1, 1.0),
        bilinear(quad, u0, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> [Pos2; 4] {
        [
            egui::pos2(0.0, 0.0),
            egui::pos2(100.0, 0.0),
            egui::pos2(100.0, 100.0),
            egui::pos2(0.0, 100.0),
        ]
    }

    #[test]
    fn bilinear_hits_corners_and_centre() {
        let q = square();
        assert_eq!(bilinear(q, 0.0, 0.0), q[0]);
        assert_eq!(bilinear(q, 1.0, 1.0), q[2]);
        assert_eq!(bilinear(q, 0.5, 0.5), egui::pos2(50.0, 50.0));
        assert_eq!(bilinear(q, 0.5, -0.1), egui::pos2(50.0, -10.0));
    }

    #[test]
    fn right_half_strip() {
        let strip = sub_quad(square(), 0.5, 1.0);
        assert_eq!(strip[0], egui::pos2(50.0, 0.0));
        assert_eq!(strip[2], egui::pos2(100.0, 100.0));
    }
}
