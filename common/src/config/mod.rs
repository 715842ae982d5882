//! Watchface configuration.
//!
//! - `layout`: Display dimensions, widget rectangles and proportional rescaling

pub mod layout;

// Re-export layout items at config level for convenience
pub use layout::{Layout, SCREEN_HEIGHT, SCREEN_WIDTH, TIME_READOUTS};
