//! I/O modules for startup loading and outbound links.

pub mod file_loader;
pub mod link_opener;

// Re-export commonly used types
pub use file_loader::{load_config, load_content};
pub use link_opener::EguiLinkOpener;
