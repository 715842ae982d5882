//! Host capabilities the watchface consumes.
//!
//! The controller never owns a host service. Each entry point borrows exactly the
//! capabilities it needs, which keeps the controller a plain struct and lets tests and
//! the simulator supply their own hosts.
//!
//! - [`Clock`]: local wall-clock time, Unix time and the 12h/24h preference (polled)
//! - [`BatteryMonitor`]: on-demand peek of the charge percent
//! - [`ConnectionMonitor`]: on-demand peek of the phone link
//! - [`Haptics`]: fire-and-forget vibration
//!
//! Push notifications (minute ticks, battery and link changes) are not modelled here:
//! the runtime delivers them by calling the controller, see [`crate::app`].

use chrono::NaiveDateTime;

/// User preference for the hour format.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ClockStyle {
    /// `%H:%M`, hours 00-23.
    #[default]
    TwentyFourHour,
    /// `%I:%M`, hours 01-12.
    TwelveHour,
}

impl ClockStyle {
    /// Switch between the two styles.
    pub const fn toggle(self) -> Self {
        match self {
            Self::TwentyFourHour => Self::TwelveHour,
            Self::TwelveHour => Self::TwentyFourHour,
        }
    }

    /// Short label for logs and popups.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TwentyFourHour => "24H",
            Self::TwelveHour => "12H",
        }
    }
}

/// One reading of the host clock.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WallClock {
    /// Local wall-clock time (time zone already applied by the host).
    pub local: NaiveDateTime,
    /// Seconds since the Unix epoch.
    pub unix: i64,
    /// Hour format preference at the time of the reading.
    pub style: ClockStyle,
}

/// Clock source, polled on demand at refresh time.
pub trait Clock {
    fn now(&self) -> WallClock;
}

/// Battery capability: on-demand peek of the current charge.
pub trait BatteryMonitor {
    /// Charge in percent. Hosts are expected to report 0-100.
    fn peek_charge(&self) -> u8;
}

/// Connectivity capability: on-demand peek of the phone link.
pub trait ConnectionMonitor {
    /// Whether the phone app is currently connected.
    fn peek_connection(&self) -> bool;
}

/// Haptic capability.
pub trait Haptics {
    /// Two short vibration pulses. No return value and no queuing guarantee.
    fn double_pulse(&mut self);
}

/// Everything a full watchface runtime provides.
pub trait WatchHost: Clock + BatteryMonitor + ConnectionMonitor + Haptics {}

impl<T> WatchHost for T where T: Clock + BatteryMonitor + ConnectionMonitor + Haptics {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_style_default_is_24h() {
        assert_eq!(ClockStyle::default(), ClockStyle::TwentyFourHour);
    }

    #[test]
    fn test_clock_style_toggle_cycle() {
        assert_eq!(ClockStyle::TwentyFourHour.toggle(), ClockStyle::TwelveHour);
        assert_eq!(ClockStyle::TwelveHour.toggle(), ClockStyle::TwentyFourHour);
    }
}
