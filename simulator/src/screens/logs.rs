//! Log page for viewing the watchface event log.
//!
//! # Layout
//!
//! ```text
//! LOGS                    (header)
//! [I] 003 Loaded: 80% li  (entries, oldest first)
//! [W] 004 Link lost, vib
//! ...
//! L: watchface            (footer)
//! ```
//!
//! Messages longer than the screen are cut at the right edge.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;
use watchface_common::colors::{BLACK, GREEN, WHITE};
use watchface_common::log_buffer::{LogBuffer, LogEntry};
use watchface_common::styles::{LABEL_FONT, LEFT_TOP};

const MARGIN_X: i32 = 2;
const HEADER_Y: i32 = 2;
const ENTRIES_Y: i32 = 16;
const LINE_HEIGHT: i32 = 10;
const FOOTER_Y: i32 = 157;
const EMPTY_Y: i32 = 80;

/// Prefix `[L] NNN ` is 8 cells of the 6x10 font.
const MESSAGE_X: i32 = MARGIN_X + 8 * 6;

const LOG_BG: Rgb565 = BLACK;

/// Draw the log page with every buffered entry.
pub fn draw_log_page<D>(
    display: &mut D,
    log: &LogBuffer,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let chrome_style = MonoTextStyle::new(LABEL_FONT, GREEN);

    display.clear(LOG_BG).ok();

    Text::with_text_style("LOGS", Point::new(MARGIN_X, HEADER_Y), chrome_style, LEFT_TOP)
        .draw(display)
        .ok();

    if log.is_empty() {
        let empty_style = MonoTextStyle::new(LABEL_FONT, WHITE);
        Text::with_text_style("No log entries", Point::new(MARGIN_X, EMPTY_Y), empty_style, LEFT_TOP)
            .draw(display)
            .ok();
    }

    let mut y = ENTRIES_Y;
    for entry in log.iter() {
        if y + LINE_HEIGHT > FOOTER_Y {
            break;
        }
        draw_log_entry(display, entry, y);
        y += LINE_HEIGHT;
    }

    Text::with_text_style("L: watchface", Point::new(MARGIN_X, FOOTER_Y), chrome_style, LEFT_TOP)
        .draw(display)
        .ok();
}

/// Draw a single log entry: colored `[L] NNN` prefix, white message.
fn draw_log_entry<D>(
    display: &mut D,
    entry: &LogEntry,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let level_style = MonoTextStyle::new(LABEL_FONT, entry.level.color());
    let msg_style = MonoTextStyle::new(LABEL_FONT, WHITE);

    let mut prefix: String<8> = String::new();
    let _ = write!(prefix, "[{}] {:03}", entry.level.prefix(), entry.seq % 1000);

    Text::with_text_style(&prefix, Point::new(MARGIN_X, y), level_style, LEFT_TOP)
        .draw(display)
        .ok();
    Text::with_text_style(entry.message.as_str(), Point::new(MESSAGE_X, y), msg_style, LEFT_TOP)
        .draw(display)
        .ok();
}
