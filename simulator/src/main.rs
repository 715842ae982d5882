//! Watchface simulator for desktop platforms.
//!
//! Runs the watchface against the real local clock in an `embedded-graphics-simulator`
//! window and plays the role of the watch runtime: it loads the window, feeds minute
//! ticks and battery/link pushes, and runs the redraw pass.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `C` / `D` | Charge / drain battery by 10% |
//! | `B` | Toggle phone link (disconnect vibrates) |
//! | `T` | Toggle 12h/24h |
//! | `L` | Toggle log page |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod host;
mod pages;
mod popup;
mod screens;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use watchface_common::colors::WINDOW_BG;
use watchface_common::config::{Layout, SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_common::{Clock, MinuteTicker, WatchEvent, WatchfaceApp, log_info};

use crate::host::{CHARGE_STEP, SimHost};
use crate::pages::Page;
use crate::popup::Popup;
use crate::screens::draw_log_page;
use crate::timing::{FRAME_TIME, SCALE};

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(SCALE).build();
    let mut window = Window::new("Watchface Sim", &output_settings);

    display.clear(WINDOW_BG).ok();
    window.update(&display);

    let mut app = WatchfaceApp::new(SimHost::new(), Layout::DEFAULT);
    app.init();

    let mut ticker = MinuteTicker::new();
    ticker.poll(&app.host().now());

    // UI state
    let mut active_popup: Option<Popup> = None;
    let mut current_page = Page::default();
    let mut page_just_switched = false;
    let mut log_seen = app.controller().log().next_seq();

    'running: loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::C => {
                            let charge = app.host_mut().adjust_charge(CHARGE_STEP);
                            app.dispatch(WatchEvent::BatteryChanged(charge));
                        }
                        Keycode::D => {
                            let charge = app.host_mut().adjust_charge(-CHARGE_STEP);
                            app.dispatch(WatchEvent::BatteryChanged(charge));
                        }
                        Keycode::B => {
                            let connected = app.host_mut().toggle_link();
                            app.dispatch(WatchEvent::ConnectionChanged(connected));
                        }
                        Keycode::T => {
                            let style = app.host_mut().toggle_style();
                            log_info!(app.log_mut(), "Clock style: {}", style.label());
                            // The hour format is polled at refresh; refresh now
                            app.dispatch(WatchEvent::MinuteTick);
                            active_popup = Some(Popup::HourFormat(Instant::now()));
                        }
                        Keycode::L => {
                            current_page = current_page.toggle();
                            page_just_switched = true;
                            active_popup = None;
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Minute boundary
        if ticker.poll(&app.host().now()) {
            app.dispatch(WatchEvent::MinuteTick);
        }

        // Haptics
        if app.host_mut().take_pulses() > 0 {
            active_popup = Some(Popup::Vibe(Instant::now()));
        }

        // Check popup expiration
        if let Some(popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
            app.invalidate();
        }

        // Render based on current page
        match current_page {
            Page::Watchface => {
                if page_just_switched {
                    app.invalidate();
                }
                app.render(&mut display);

                if let Some(popup) = active_popup {
                    popup.draw(&mut display, app.host().style());
                }
            }

            Page::Log => {
                let next_seq = app.controller().log().next_seq();
                if page_just_switched || next_seq != log_seen {
                    draw_log_page(&mut display, app.controller().log());
                    log_seen = next_seq;
                }
            }
        }

        page_just_switched = false;
        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    app.deinit();
}
