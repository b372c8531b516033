pub mod config;
pub mod contact;
pub mod content;
pub mod easing;
pub mod error;
pub mod markup;
pub mod media;
pub mod responsive;
pub mod theme;
pub mod timer;
pub mod widgets;

// Export configuration and content model
pub use config::{ContactConfig, MediaConfig, SiteConfig, SnowfallConfig, TimingConfig};
pub use content::{
    AboutContent, ContactCard, GalleryItem, HeroContent, ProgramSection, ProgramSlide,
    SectionBody, SiteContent, SlideSet, StoryPage,
};
pub use markup::{StyledTitle, TitleRun};

// Export error handling
pub use error::{Result, SiteError};

// Export widget state machines
pub use widgets::{
    AutoCarousel, BookEvent, BookTiming, FlipDirection, FlipOutcome, FlipPhase, IgnoreReason,
    PageFlipBook, Snowfall, Snowflake, Spotlight, TiltProfile, TiltReset, TiltSurface, TiltVector,
};

// Export contact form and outbound link
pub use contact::{whatsapp_url, ContactField, ContactForm, LinkOpener};

// Export media, layout and theme support
pub use media::{media_uri, MediaKind};
pub use responsive::Breakpoint;
pub use theme::{adjust_brightness, hex_to_color32, lerp_color, with_alpha, Theme, ThemeColors};
pub use timer::{Deadline, Interval};
