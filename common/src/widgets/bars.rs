//! Custom-painted indicator bars.
//!
//! Both bars are pure functions of their bounds and one cached value:
//!
//! - Battery bar: background tone across the full bounds, then a left-aligned fill of
//!   `floor(width * percent / 100)` pixels at full height.
//! - Link bar: the full bounds in one of two solid tones.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::colors::{BATTERY_EMPTY, BATTERY_FULL, LINK_CONNECTED, LINK_DISCONNECTED};

const BATTERY_EMPTY_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BATTERY_EMPTY);
const BATTERY_FULL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BATTERY_FULL);
const LINK_CONNECTED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(LINK_CONNECTED);
const LINK_DISCONNECTED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(LINK_DISCONNECTED);

/// Width of the charged portion: `floor(width * percent / 100)`, percent clamped to 100.
#[inline]
pub fn battery_fill_width(
    width: u32,
    percent: u8,
) -> u32 {
    let percent = u64::from(percent.min(100));
    (u64::from(width) * percent / 100) as u32
}

/// Paint the battery bar for `percent` into `bounds`.
pub fn paint_battery_bar<D>(
    canvas: &mut D,
    bounds: Rectangle,
    percent: u8,
) where
    D: DrawTarget<Color = Rgb565>,
{
    bounds.into_styled(BATTERY_EMPTY_FILL).draw(canvas).ok();

    let fill_width = battery_fill_width(bounds.size.width, percent);
    if fill_width == 0 {
        return;
    }
    Rectangle::new(bounds.top_left, Size::new(fill_width, bounds.size.height))
        .into_styled(BATTERY_FULL_FILL)
        .draw(canvas)
        .ok();
}

/// Paint the link bar into `bounds`.
pub fn paint_connection_bar<D>(
    canvas: &mut D,
    bounds: Rectangle,
    connected: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = if connected { LINK_CONNECTED_FILL } else { LINK_DISCONNECTED_FILL };
    bounds.into_styled(style).draw(canvas).ok();
}

/// Placement and dirty state of a custom-painted bar.
///
/// The bar does not own its value; the controller passes the cached value to the
/// matching paint function on each redraw pass.
#[derive(Clone, Copy, Debug)]
pub struct BarWidget {
    bounds: Rectangle,
    dirty: bool,
}

impl BarWidget {
    pub const fn new(bounds: Rectangle) -> Self { Self { bounds, dirty: true } }

    #[inline]
    pub const fn bounds(&self) -> Rectangle { self.bounds }

    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    #[inline]
    pub fn mark_dirty(&mut self) { self.dirty = true; }

    #[inline]
    pub fn clear_dirty(&mut self) { self.dirty = false; }
}

// =============================================================================
// Unit Tests
// =============================================================================
