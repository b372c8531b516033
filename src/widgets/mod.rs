//! Interactive widget state.
//!
//! Each widget owns its state and timers and is driven by pointer events
//! and the frame time. Nothing here draws; the app derives every visual from
//! these values each frame.

pub mod carousel;
pub mod page_flip;
pub mod snowfall;
pub mod spotlight;
pub mod tilt;

pub use carousel::AutoCarousel;
pub use page_flip::{
    BookEvent, BookTiming, FlipDirection, FlipOutcome, FlipPhase, IgnoreReason, PageFlipBook,
};
pub use snowfall::{Snowfall, Snowflake};
pub use spotlight::Spotlight;
pub use tilt::{tilt_for_pointer, TiltProfile, TiltReset, TiltSurface, TiltVector};
