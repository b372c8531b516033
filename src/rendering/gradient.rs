//! Gradient fills.
//!
//! egui has no gradient brush, so fills are vertex-colored meshes. Quads are
//! given clockwise from the top-left, which lets a single routine paint both
//! flat rectangles and projected (tilted) faces.

use eframe::egui;
use egui::{Color32, Mesh, Painter, Pos2, Rect, Shape};
use kibou::lerp_color;

const GLOW_SEGMENTS: u32 = 32;

/// Fills a convex quad with a 135° gradient.
///
/// # Arguments
/// * `corners` - Quad corners, clockwise from the top-left
/// * `from` - Color at the top-left corner
/// * `mid` - Color at the top-right and bottom-left corners
/// * `to` - Color at the bottom-right corner
pub fn fill_quad(painter: &Painter, corners: [Pos2; 4], from: Color32, mid: Color32, to: Color32) {
    let mut mesh = Mesh::default();
    for (pos, color) in corners.into_iter().zip([from, mid, to, mid]) {
        mesh.colored_vertex(pos, color);
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Two-stop diagonal gradient over a quad.
pub fn fill_quad_two_stop(painter: &Painter, corners: [Pos2; 4], from: Color32, to: Color32) {
    fill_quad(painter, corners, from, lerp_color(from, to, 0.5), to);
}

/// Top-to-bottom gradient.
pub fn fill_vertical(painter: &Painter, rect: Rect, top: Color32, bottom: Color32) {
    let mut mesh = Mesh::default();
    for (pos, color) in corners(rect).into_iter().zip([top, top, bottom, bottom]) {
        mesh.colored_vertex(pos, color);
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Soft radial highlight fading to transparent at `radius`.
pub fn radial_glow(painter: &Painter, center: Pos2, radius: f32, color: Color32) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for i in 0..GLOW_SEGMENTS {
        let angle = i as f32 / GLOW_SEGMENTS as f32 * std::f32::consts::TAU;
        let rim = center + egui::vec2(angle.cos(), angle.sin()) * radius;
        mesh.colored_vertex(rim, Color32::TRANSPARENT);
    }
    for i in 0..GLOW_SEGMENTS {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % GLOW_SEGMENTS);
    }
    painter.add(Shape::mesh(mesh));
}

/// Corners of `rect`, clockwise from the top-left.
pub fn corners(rect: Rect) -> [Pos2; 4] {
    [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
}
