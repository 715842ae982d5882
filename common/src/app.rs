//! Watchface lifecycle and event registration.
//!
//! [`WatchfaceApp`] pairs a [`DisplayController`] with the host that feeds it. The
//! runtime drives it in three phases:
//!
//! 1. `init`: push (load) the window, then subscribe to minute ticks, battery and
//!    connection pushes. Loading first means the first frame already shows real values.
//! 2. `dispatch` / `render`: route each pushed [`WatchEvent`] to the controller, run the
//!    redraw pass when the runtime decides to paint.
//! 3. `deinit`: unsubscribe everything, then unload the window.
//!
//! Events for a channel that is not subscribed are dropped.

use chrono::{NaiveDate, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::Layout;
use crate::controller::DisplayController;
use crate::host::{WallClock, WatchHost};
use crate::log_buffer::LogBuffer;
use crate::log_info;

/// A push notification from the host.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WatchEvent {
    /// The wall clock crossed a minute boundary.
    MinuteTick,
    /// New battery charge in percent.
    BatteryChanged(u8),
    /// New phone-link state.
    ConnectionChanged(bool),
}

/// Which push channels are registered.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Subscriptions {
    pub minute_tick: bool,
    pub battery: bool,
    pub connection: bool,
}

impl Subscriptions {
    pub const NONE: Self = Self {
        minute_tick: false,
        battery: false,
        connection: false,
    };

    pub const ALL: Self = Self {
        minute_tick: true,
        battery: true,
        connection: true,
    };

    /// Whether `event` arrives on a registered channel.
    pub const fn accepts(
        self,
        event: &WatchEvent,
    ) -> bool {
        match event {
            WatchEvent::MinuteTick => self.minute_tick,
            WatchEvent::BatteryChanged(_) => self.battery,
            WatchEvent::ConnectionChanged(_) => self.connection,
        }
    }
}

// =============================================================================
// Application
// =============================================================================

/// A watchface bound to its host.
pub struct WatchfaceApp<H: WatchHost> {
    host: H,
    controller: DisplayController,
    subscriptions: Subscriptions,
}

impl<H: WatchHost> WatchfaceApp<H> {
    /// Create an app that has not been initialised yet.
    pub const fn new(
        host: H,
        layout: Layout,
    ) -> Self {
        Self {
            host,
            controller: DisplayController::new(layout),
            subscriptions: Subscriptions::NONE,
        }
    }

    /// Load the window, then register for every push channel.
    pub fn init(&mut self) {
        self.controller.on_window_load(&self.host);
        self.subscriptions = Subscriptions::ALL;
        log_info!(self.controller.log_mut(), "Subscribed: tick, battery, link");
    }

    /// Unregister every push channel, then unload the window.
    pub fn deinit(&mut self) {
        self.subscriptions = Subscriptions::NONE;
        log_info!(self.controller.log_mut(), "Unsubscribed");
        self.controller.on_window_unload();
    }

    /// Route one push notification to the controller.
    ///
    /// Returns `false` if the event was dropped because its channel is not subscribed.
    pub fn dispatch(
        &mut self,
        event: WatchEvent,
    ) -> bool {
        if !self.subscriptions.accepts(&event) {
            return false;
        }
        match event {
            WatchEvent::MinuteTick => self.controller.on_minute_tick(&self.host),
            WatchEvent::BatteryChanged(percent) => self.controller.on_battery_changed(percent),
            WatchEvent::ConnectionChanged(connected) => {
                self.controller.on_connection_changed(connected, &mut self.host);
            }
        }
        true
    }

    /// Run the redraw pass. Returns `true` if anything was painted.
    pub fn render<D>(
        &mut self,
        display: &mut D,
    ) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.controller.render(display)
    }

    /// Force a full repaint on the next redraw pass.
    pub fn invalidate(&mut self) { self.controller.invalidate(); }

    #[inline]
    pub const fn subscriptions(&self) -> Subscriptions { self.subscriptions }

    #[inline]
    pub const fn controller(&self) -> &DisplayController { &self.controller }

    #[inline]
    pub const fn host(&self) -> &H { &self.host }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H { &mut self.host }

    /// Shared event log, for runtime messages that belong next to the controller's.
    #[inline]
    pub fn log_mut(&mut self) -> &mut LogBuffer { self.controller.log_mut() }
}

// =============================================================================
// Minute Ticker
// =============================================================================

/// Turns a stream of wall-clock samples into minute-boundary ticks.
///
/// The first sample only primes the ticker; the window load already showed that minute.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinuteTicker {
    last: Option<(NaiveDate, u32, u32)>,
}

impl MinuteTicker {
    pub const fn new() -> Self { Self { last: None } }

    /// Feed one sample. Returns `true` when it falls in a different minute than the
    /// previous one (forwards or backwards, e.g. after a clock adjustment).
    pub fn poll(
        &mut self,
        now: &WallClock,
    ) -> bool {
        let key = (now.local.date(), now.local.hour(), now.local.minute());
        match self.last.replace(key) {
            Some(previous) => previous != key,
            None => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
