//! Rendering subsystem for the site's custom-painted surfaces
//!
//! This module contains the low-level painting used by the page sections:
//! - Gradients (diagonal, vertical and radial fills built from meshes)
//! - Tilted cards (projecting a tilt surface and painting its face)
//! - The page-flip book (cover, pages, spine and the turning leaf)
//! - Snowfall (flakes clipped to their host rectangle)

pub mod gradient;
pub mod tilt_renderer;
pub mod book_renderer;
pub mod snow_renderer;
