//! Display and layout configuration constants.
//!
//! The reference layout targets a 144x168 panel. Widgets are stacked top to bottom:
//!
//! ```text
//!   y=0   ┌──────────────────────┐ link bar (5px)
//!   y=3   │   Mon, 05 Jan        │ date (20px)
//!   y=18  │       09:05          │ primary time (50px, large font)
//!   y=60  │       09:05          │ secondary time (30px)
//!   y=90  │       09:05          │ tertiary time (30px)
//!   y=130 │     1700000000       │ epoch (39px)
//!   y=163 └──────────────────────┘ battery bar (5px)
//! ```
//!
//! Widgets overlap slightly (date/link bar, primary/secondary time, epoch/battery bar);
//! the redraw pass paints in z-order so the overlap is deterministic.
//!
//! [`Layout::for_size`] rescales the vertical positions for other panels while keeping
//! the stacking order and full-width widgets.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Reference display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Reference display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

// =============================================================================
// Widget Rectangles (reference display)
// =============================================================================

/// Link (connection) bar, topmost.
pub const LINK_BAR_Y: i32 = 0;
pub const LINK_BAR_HEIGHT: u32 = 5;

/// Date readout.
pub const DATE_Y: i32 = 3;
pub const DATE_HEIGHT: u32 = 20;

/// Primary (large) time readout.
pub const PRIMARY_TIME_Y: i32 = 18;
pub const PRIMARY_TIME_HEIGHT: u32 = 50;

/// Secondary time readout.
pub const SECONDARY_TIME_Y: i32 = 60;
pub const SECONDARY_TIME_HEIGHT: u32 = 30;

/// Tertiary time readout.
pub const TERTIARY_TIME_Y: i32 = 90;
pub const TERTIARY_TIME_HEIGHT: u32 = 30;

/// Unix epoch readout.
pub const EPOCH_Y: i32 = 130;
pub const EPOCH_HEIGHT: u32 = 39;

/// Battery bar, bottommost.
pub const BATTERY_BAR_Y: i32 = 163;
pub const BATTERY_BAR_HEIGHT: u32 = 5;

// Stacking order: link bar, date, three time readouts, epoch, battery bar.
const _: () = assert!(LINK_BAR_Y < DATE_Y);
const _: () = assert!(DATE_Y < PRIMARY_TIME_Y);
const _: () = assert!(PRIMARY_TIME_Y < SECONDARY_TIME_Y);
const _: () = assert!(SECONDARY_TIME_Y < TERTIARY_TIME_Y);
const _: () = assert!(TERTIARY_TIME_Y < EPOCH_Y);
const _: () = assert!(EPOCH_Y < BATTERY_BAR_Y);
const _: () = assert!(BATTERY_BAR_Y as u32 + BATTERY_BAR_HEIGHT <= SCREEN_HEIGHT);

/// Number of stacked time readouts.
pub const TIME_READOUTS: usize = 3;

// =============================================================================
// Layout
// =============================================================================

/// Resolved widget rectangles for one display size.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Layout {
    /// Display size the rectangles were computed for.
    pub size: Size,
    pub link_bar: Rectangle,
    pub date: Rectangle,
    /// Primary, secondary and tertiary time readouts, top to bottom.
    pub time: [Rectangle; TIME_READOUTS],
    pub epoch: Rectangle,
    pub battery_bar: Rectangle,
}

const fn full_width(y: i32, height: u32) -> Rectangle {
    Rectangle::new(Point::new(0, y), Size::new(SCREEN_WIDTH, height))
}

impl Layout {
    /// Layout of the 144x168 reference display.
    pub const DEFAULT: Self = Self {
        size: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        link_bar: full_width(LINK_BAR_Y, LINK_BAR_HEIGHT),
        date: full_width(DATE_Y, DATE_HEIGHT),
        time: [
            full_width(PRIMARY_TIME_Y, PRIMARY_TIME_HEIGHT),
            full_width(SECONDARY_TIME_Y, SECONDARY_TIME_HEIGHT),
            full_width(TERTIARY_TIME_Y, TERTIARY_TIME_HEIGHT),
        ],
        epoch: full_width(EPOCH_Y, EPOCH_HEIGHT),
        battery_bar: full_width(BATTERY_BAR_Y, BATTERY_BAR_HEIGHT),
    };

    /// Scale the reference layout to another display.
    ///
    /// Widgets stay full width; vertical offsets and heights scale with the display
    /// height (rounded down), and no widget ends up zero pixels tall.
    pub fn for_size(size: Size) -> Self {
        if size == Self::DEFAULT.size {
            return Self::DEFAULT;
        }

        let scale = |rect: Rectangle| -> Rectangle {
            let y = scale_axis(rect.top_left.y.max(0) as u32, size.height);
            let h = scale_axis(rect.size.height, size.height).max(1);
            Rectangle::new(Point::new(0, y as i32), Size::new(size.width, h))
        };

        let reference = Self::DEFAULT;
        Self {
            size,
            link_bar: scale(reference.link_bar),
            date: scale(reference.date),
            time: reference.time.map(|rect| scale(rect)),
            epoch: scale(reference.epoch),
            battery_bar: scale(reference.battery_bar),
        }
    }
}

impl Default for Layout {
    fn default() -> Self { Self::DEFAULT }
}

/// Scale a reference-height value to `target_height`, rounding down.
#[inline]
fn scale_axis(value: u32, target_height: u32) -> u32 {
    (u64::from(value) * u64::from(target_height) / u64::from(SCREEN_HEIGHT)) as u32
}

// =============================================================================
// Unit Tests
// =============================================================================
