//! Color constants for the watchface.
//!
//! Everything is drawn in `Rgb565`, the native format of the small SPI panels the
//! watchface targets and of the desktop simulator. Standard colors come straight from
//! the `RgbColor` trait constants so they resolve to the exact channel maxima.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Used for all readout text.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Window background.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Drained part of the battery bar and the disconnected link bar.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Charged part of the battery bar.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue (0, 0, 31). Link bar while the phone is connected.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0). Warning entries on the simulator's log page.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Dark gray (8, 16, 8). Trace/debug entries and dividers on the log page.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

// =============================================================================
// Semantic Aliases
// =============================================================================

/// Background every redraw pass starts from.
pub const WINDOW_BG: Rgb565 = WHITE;

/// Text color of the time, date and epoch readouts.
pub const TEXT_COLOR: Rgb565 = BLACK;

/// Battery bar background (the empty portion).
pub const BATTERY_EMPTY: Rgb565 = RED;

/// Battery bar foreground (the charged portion, left-aligned).
pub const BATTERY_FULL: Rgb565 = GREEN;

/// Link bar tone while connected.
pub const LINK_CONNECTED: Rgb565 = BLUE;

/// Link bar tone while disconnected.
pub const LINK_DISCONNECTED: Rgb565 = RED;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_tones_differ() {
        assert_ne!(LINK_CONNECTED, LINK_DISCONNECTED);
    }

    #[test]
    fn test_battery_tones_differ() {
        assert_ne!(BATTERY_EMPTY, BATTERY_FULL);
    }

    #[test]
    fn test_text_readable_on_background() {
        assert_ne!(TEXT_COLOR, WINDOW_BG);
    }
}
