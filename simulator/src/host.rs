//! Simulated watch services.
//!
//! The clock is the real desktop clock; battery, phone link and hour format are
//! keyboard-driven. Haptics cannot be felt on a desktop, so pulses are queued and the
//! main loop turns them into a popup.

use chrono::Local;
use watchface_common::{BatteryMonitor, Clock, ClockStyle, ConnectionMonitor, Haptics, WallClock};

/// Charge the simulated battery starts at.
pub const START_CHARGE: u8 = 80;

/// Charge change per `C`/`D` key press.
pub const CHARGE_STEP: i16 = 10;

pub struct SimHost {
    style: ClockStyle,
    charge: u8,
    connected: bool,
    pending_pulses: u32,
}

impl SimHost {
    pub const fn new() -> Self {
        Self {
            style: ClockStyle::TwentyFourHour,
            charge: START_CHARGE,
            connected: true,
            pending_pulses: 0,
        }
    }

    /// Move the battery by `delta` percent, saturating at 0 and 100. Returns the new charge.
    pub fn adjust_charge(
        &mut self,
        delta: i16,
    ) -> u8 {
        self.charge = (i16::from(self.charge) + delta).clamp(0, 100) as u8;
        self.charge
    }

    /// Flip the phone link. Returns the new state.
    pub fn toggle_link(&mut self) -> bool {
        self.connected = !self.connected;
        self.connected
    }

    /// Flip the hour format. Returns the new style.
    pub fn toggle_style(&mut self) -> ClockStyle {
        self.style = self.style.toggle();
        self.style
    }

    #[inline]
    pub const fn style(&self) -> ClockStyle { self.style }

    /// Number of double pulses fired since the last call.
    pub fn take_pulses(&mut self) -> u32 { core::mem::take(&mut self.pending_pulses) }
}

impl Default for SimHost {
    fn default() -> Self { Self::new() }
}

impl Clock for SimHost {
    fn now(&self) -> WallClock {
        let now = Local::now();
        WallClock {
            local: now.naive_local(),
            unix: now.timestamp(),
            style: self.style,
        }
    }
}

impl BatteryMonitor for SimHost {
    fn peek_charge(&self) -> u8 { self.charge }
}

impl ConnectionMonitor for SimHost {
    fn peek_connection(&self) -> bool { self.connected }
}

impl Haptics for SimHost {
    fn double_pulse(&mut self) { self.pending_pulses += 1; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_charged_and_linked() {
        let host = SimHost::new();
        assert_eq!(host.peek_charge(), START_CHARGE);
        assert!(host.peek_connection());
    }

    #[test]
    fn test_adjust_charge_saturates() {
        let mut host = SimHost::new();
        assert_eq!(host.adjust_charge(CHARGE_STEP), 90);
        assert_eq!(host.adjust_charge(CHARGE_STEP), 100);
        assert_eq!(host.adjust_charge(CHARGE_STEP), 100);
        assert_eq!(host.adjust_charge(-200), 0);
    }

    #[test]
    fn test_pulses_are_drained() {
        let mut host = SimHost::new();
        host.double_pulse();
        host.double_pulse();
        assert_eq!(host.take_pulses(), 2);
        assert_eq!(host.take_pulses(), 0);
    }

    #[test]
    fn test_clock_reports_selected_style() {
        let mut host = SimHost::new();
        assert_eq!(host.now().style, ClockStyle::TwentyFourHour);
        host.toggle_style();
        assert_eq!(host.now().style, ClockStyle::TwelveHour);
    }
}
