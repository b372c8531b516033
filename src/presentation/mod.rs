//! Presentation layer for text styling.
//!
//! This module turns content into egui text layouts, separate from the
//! widgets' state logic:
//! - Styled titles (bold runs and line breaks from title markup)

pub mod title_layout;
