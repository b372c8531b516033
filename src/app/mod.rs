//! Application-level modules for the Kibou site.
//!
//! This module contains the main application coordinator and centralized state management.

mod app_state;
mod application_coordinator;
mod theme_coordinator;

pub use app_state::{AppState, SurfaceId};
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::ThemeCoordinator;
