//! Startup loading of configuration and content files.
//!
//! Both files are optional; without a path the built-in defaults are used.

use std::path::Path;

use anyhow::Context;
use kibou::{SiteConfig, SiteContent};

pub fn load_config(path: Option<&Path>) -> anyhow::Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => {
            tracing::debug!("no config file given, using defaults");
            Ok(SiteConfig::default())
        }
    }
}

pub fn load_content(path: Option<&Path>) -> anyhow::Result<SiteContent> {
    match path {
        Some(path) => SiteContent::load(path)
            .with_context(|| format!("failed to load site content from {}", path.display())),
        None => Ok(SiteContent::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_paths_fall_back_to_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.contact.whatsapp_number, "6281325835578");

        let content = load_content(None).unwrap();
        assert!(!content.programs.is_empty());
    }

    #[test]
    fn unreadable_file_reports_the_path() {
        let err = load_config(Some(Path::new("/nonexistent/kibou.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/kibou.json"));
    }
}
