//! Tilted card rendering
//!
//! Projects a [`TiltSurface`] onto the screen and paints its face. Text and
//! widgets are not warped; they are drawn upright inside
//! [`TiltedFace::content_rect`], which follows the tilt with a small
//! parallax shift.

use eframe::egui;
use egui::{Color32, Mesh, Painter, Pos2, Rect, Shape, Stroke, TextureId, Vec2};
use kibou::{with_alpha, TiltSurface};

use crate::rendering::gradient;

/// Parallax shift of upright content per degree of tilt.
const PARALLAX_PER_DEGREE: f32 = 0.8;

/// Screen-space geometry of a tilted surface for one frame.
#[derive(Debug, Clone, Copy)]
pub struct TiltedFace {
    /// Projected corners, clockwise from the top-left
    pub corners: [Pos2; 4],
    /// Where upright content should be laid out
    pub content_rect: Rect,
}

/// Computes the projected face of `rect` for `surface` at `now`.
pub fn project(rect: Rect, surface: &TiltSurface, now: f64) -> TiltedFace {
    let profile = surface.profile();
    let scaled = Rect::from_center_size(rect.center(), rect.size() * surface.scale());
    let orientation = surface.orientation(now);

    let corners = orientation.project_rect(scaled, profile.perspective, surface.lift(now));
    let parallax = egui::vec2(orientation.rotate_y, -orientation.rotate_x) * PARALLAX_PER_DEGREE;

    TiltedFace {
        corners,
        content_rect: scaled.translate(parallax),
    }
}

/// Paints a gradient card face with a drop shadow and an outline.
///
/// # Arguments
/// * `painter` - Painter clipped to the section
/// * `face` - Projected geometry from [`project`]
/// * `from` - Gradient color at the top-left
/// * `to` - Gradient color at the bottom-right
/// * `outline` - Stroke around the face
pub fn paint_card(painter: &Painter, face: &TiltedFace, from: Color32, to: Color32, outline: Stroke) {
    let shadow = face.corners.map(|p| p + egui::vec2(0.0, 8.0));
    painter.add(Shape::convex_polygon(
        shadow.to_vec(),
        with_alpha(Color32::BLACK, 90),
        Stroke::NONE,
    ));

    gradient::fill_quad_two_stop(painter, face.corners, from, to);
    painter.add(Shape::closed_line(face.corners.to_vec(), outline));
}

/// Maps a texture onto a tilted face, following its projected corners.
pub fn paint_texture(painter: &Painter, face: &TiltedFace, texture: TextureId, uv: Rect) {
    let mut mesh = Mesh::with_texture(texture);
    let uvs = [uv.left_top(), uv.right_top(), uv.right_bottom(), uv.left_bottom()];
    for (pos, uv) in face.corners.into_iter().zip(uvs) {
        mesh.vertices.push(egui::epaint::Vertex {
            pos,
            uv,
            color: Color32::WHITE,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// UV rectangle that crops an image of `image` size to fill `frame`,
/// keeping its aspect ratio and centering the crop.
pub fn cover_uv(image: Vec2, frame: Vec2) -> Rect {
    if image.x <= 0.0 || image.y <= 0.0 || frame.x <= 0.0 || frame.y <= 0.0 {
        return Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
    }

    let image_aspect = image.x / image.y;
    let frame_aspect = frame.x / frame.y;

    if image_aspect > frame_aspect {
        let visible = frame_aspect / image_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(Pos2::new(inset, 0.0), Pos2::new(1.0 - inset, 1.0))
    } else {
        let visible = image_aspect / frame_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(Pos2::new(0.0, inset), Pos2::new(1.0, 1.0 - inset))
    }
}
