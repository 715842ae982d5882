//! Test-only helpers: an in-memory framebuffer and a scriptable host.

use core::convert::Infallible;

use chrono::{NaiveDate, NaiveDateTime};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{ContainsPoint, PointsIter, Rectangle};

use crate::host::{BatteryMonitor, Clock, ClockStyle, ConnectionMonitor, Haptics, WallClock};

/// Heap-backed `DrawTarget` that records every pixel.
pub struct FrameBuffer {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl FrameBuffer {
    pub fn new(
        size: Size,
        background: Rgb565,
    ) -> Self {
        Self {
            size,
            pixels: vec![background; (size.width * size.height) as usize],
        }
    }

    pub fn pixel(
        &self,
        x: u32,
        y: u32,
    ) -> Rgb565 {
        self.pixels[(y * self.size.width + x) as usize]
    }

    /// Number of pixels of `color` on the whole screen.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Number of pixels of `color` inside `area`.
    pub fn count_in(
        &self,
        area: &Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points()
            .filter(|p| self.bounding_box().contains(*p))
            .filter(|p| self.pixel(p.x as u32, p.y as u32) == color)
            .count()
    }

    /// Length of the run of `color` starting at the left edge of row `y`.
    pub fn run_length(
        &self,
        y: u32,
        color: Rgb565,
    ) -> u32 {
        (0..self.size.width).take_while(|&x| self.pixel(x, y) == color).count() as u32
    }

    pub fn as_slice(&self) -> &[Rgb565] { &self.pixels }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                let idx = (point.y as u32 * self.size.width + point.x as u32) as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}

/// Local time helper for tests.
pub fn local(
    y: i32,
    m: u32,
    d: u32,
    h: u32,
    min: u32,
) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

/// Scriptable host: fixed clock, settable battery and link, counted haptics.
pub struct FakeHost {
    pub clock: WallClock,
    pub charge: u8,
    pub connected: bool,
    pub pulses: u32,
}

impl FakeHost {
    /// 2023-11-14 22:13 local, Unix 1_700_000_000, 24h, 80%, connected.
    pub fn new() -> Self {
        Self {
            clock: WallClock {
                local: local(2023, 11, 14, 22, 13),
                unix: 1_700_000_000,
                style: ClockStyle::TwentyFourHour,
            },
            charge: 80,
            connected: true,
            pulses: 0,
        }
    }

    pub fn set_time(
        &mut self,
        local: NaiveDateTime,
        unix: i64,
    ) {
        self.clock.local = local;
        self.clock.unix = unix;
    }
}

impl Clock for FakeHost {
    fn now(&self) -> WallClock { self.clock }
}

impl BatteryMonitor for FakeHost {
    fn peek_charge(&self) -> u8 { self.charge }
}

impl ConnectionMonitor for FakeHost {
    fn peek_connection(&self) -> bool { self.connected }
}

impl Haptics for FakeHost {
    fn double_pulse(&mut self) { self.pulses += 1; }
}
