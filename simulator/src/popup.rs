//! Popup overlays with time-based expiration.
//!
//! Each popup variant holds its start time for expiration checking. Popups are drawn on
//! top of the watchface every frame; when one expires the watchface is invalidated so
//! the next redraw pass paints over it.

use std::time::Instant;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use watchface_common::ClockStyle;
use watchface_common::colors::{BLACK, BLUE, RED, WHITE};
use watchface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_common::styles::MEDIUM_FONT;

use crate::timing::POPUP_DURATION;

const POPUP_WIDTH: u32 = 104;
const POPUP_HEIGHT: u32 = 40;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;

const BORDER: Rectangle = Rectangle::new(
    Point::new(POPUP_X - 3, POPUP_Y - 3),
    Size::new(POPUP_WIDTH + 6, POPUP_HEIGHT + 6),
);
const BODY: Rectangle = Rectangle::new(Point::new(POPUP_X, POPUP_Y), Size::new(POPUP_WIDTH, POPUP_HEIGHT));
const TEXT_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, SCREEN_HEIGHT as i32 / 2);

const BORDER_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);
const VIBE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);
const STYLE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLUE);

const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Active popup with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "VIBE": the watchface fired a double pulse.
    Vibe(Instant),
    /// "12H"/"24H": the hour format was switched.
    HourFormat(Instant),
}

impl Popup {
    /// Get the start time of this popup.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Vibe(t) | Self::HourFormat(t) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }

    /// Draw the popup centered on the watchface.
    pub fn draw<D>(
        &self,
        display: &mut D,
        style: ClockStyle,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let (fill, label) = match self {
            Self::Vibe(_) => (VIBE_FILL, "VIBE"),
            Self::HourFormat(_) => (STYLE_FILL, style.label()),
        };

        BORDER.into_styled(BORDER_FILL).draw(display).ok();
        BODY.into_styled(fill).draw(display).ok();
        Text::with_text_style(label, TEXT_POS, MonoTextStyle::new(MEDIUM_FONT, WHITE), CENTERED_MIDDLE)
            .draw(display)
            .ok();
    }
}
