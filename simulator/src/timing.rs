//! Timing and window constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Target frame time (~20 FPS). The main loop sleeps if the frame completes early.
/// A watchface only changes once a minute; this just keeps key handling responsive.
pub const FRAME_TIME: Duration = Duration::from_millis(50);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(3);

/// Window pixels per display pixel.
pub const SCALE: u32 = 3;
