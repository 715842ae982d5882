//! Watchface logic shared by every host runtime.
//!
//! This crate holds the platform-agnostic part of the watchface: three identical time
//! readouts, a date, a Unix epoch readout, a battery bar and a phone-link bar.
//!
//! - [`host`]: capability traits the runtime implements (clock, battery, link, haptics)
//! - [`format`]: fixed-capacity text formatting for the readouts
//! - [`config`]: screen size and widget layout
//! - [`widgets`]: text readouts and custom-painted bars
//! - [`controller`]: the display controller and its event handlers
//! - [`app`]: load/subscribe lifecycle and event dispatch
//! - [`log_buffer`]: on-device event log
//! - [`colors`], [`styles`]: palette and fonts
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and can be used on embedded targets. Tests run on
//! the host with the standard test harness.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod colors;
pub mod config;
pub mod controller;
pub mod format;
pub mod host;
pub mod log_buffer;
pub mod styles;
pub mod widgets;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use app::{MinuteTicker, Subscriptions, WatchEvent, WatchfaceApp};
pub use config::{Layout, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use controller::DisplayController;
pub use host::{BatteryMonitor, Clock, ClockStyle, ConnectionMonitor, Haptics, WallClock, WatchHost};
pub use log_buffer::{LogBuffer, LogLevel};
