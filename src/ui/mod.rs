//! UI rendering subsystem
//!
//! This module contains the page layout and its sections for the Kibou site:
//! - Header (brand and section navigation)
//! - Hero (title, tagline and call to action)
//! - About (summary, vision and mission)
//! - Program carousel (bento slides over snowfall)
//! - Story book (page-flip book with arrows and page indicators)
//! - Gallery (bento tiles with media placeholders and badge spotlight)
//! - Contact (tilting cards and the message form)
//! - Alert (blocking modal for form validation)
//! - Pointer tracking shared by every tilting surface
//! - Panel manager (page orchestration and interaction collection)

pub mod header;
pub mod hero;
pub mod about_section;
pub mod program_section;
pub mod story_section;
pub mod gallery_section;
pub mod contact_section;
pub mod alert;
pub mod pointer;
pub mod panel_manager;
