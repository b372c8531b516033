//! Error type shared by the site library.

use crate::contact::ContactField;

/// Result alias that carries [`SiteError`].
pub type Result<T> = std::result::Result<T, SiteError>;

/// Everything the library can fail with.
///
/// Widget timers, tilt math and index arithmetic are total and never show up
/// here; only construction, configuration loading and contact validation can
/// fail.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A slide set was built from an empty list.
    #[error("slide set must contain at least one slide")]
    EmptySlideSet,

    /// Required contact fields were left empty.
    ///
    /// The message is the one shown to the visitor in the blocking alert.
    #[error("Mohon isi nama, email, dan pesan!")]
    IncompleteContactForm {
        /// Fields that failed the presence check, in form order.
        missing: Vec<ContactField>,
    },

    /// A configuration or content file could not be parsed.
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
