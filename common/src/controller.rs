//! Display controller: owns the watchface widgets and keeps them in sync with the host.
//!
//! # Lifecycle
//!
//! Widgets exist only while the window is loaded (`widgets` is `Some`). The two cached
//! scalars, battery percent and link state, live on the controller itself so they
//! survive an unload/load cycle; they are re-peeked from the host on every load anyway,
//! because the first push notification may arrive arbitrarily late.
//!
//! # Update Strategy
//!
//! | Trigger | Effect | Paint |
//! |---------|--------|-------|
//! | Window load | Build widgets, refresh all readouts, peek battery and link | Everything dirty |
//! | Minute tick | Reformat time x3, date, epoch | Dirty only if text changed |
//! | Battery push | Cache percent | Battery bar dirty |
//! | Link push | Cache state, vibrate on disconnect | Link bar dirty |
//! | Redraw pass | Full repaint in z-order when anything is dirty | - |
//!
//! Updates never paint directly; painting is deferred to [`DisplayController::render`],
//! which the host calls from its redraw pass.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::WINDOW_BG;
use crate::config::{Layout, TIME_READOUTS};
use crate::format::{
    DATE_CAPACITY,
    EPOCH_CAPACITY,
    TIME_CAPACITY,
    format_date,
    format_epoch,
    format_time,
};
use crate::host::{BatteryMonitor, Clock, ConnectionMonitor, Haptics, WallClock};
use crate::log_buffer::LogBuffer;
use crate::styles::{LARGE_FONT, MEDIUM_FONT, SMALL_FONT};
use crate::widgets::{BarWidget, TextWidget, paint_battery_bar, paint_connection_bar};
use crate::{log_debug, log_info, log_warn};

/// Text shown by the time readouts before the first refresh.
const TIME_PLACEHOLDER: &str = "00:00";

/// Text shown by the epoch readout before the first refresh.
const EPOCH_PLACEHOLDER: &str = "NOTHING";

/// Highest battery value the controller accepts; larger pushes are clamped.
const MAX_PERCENT: u8 = 100;

// =============================================================================
// Widget Tree
// =============================================================================

/// Every widget of the loaded window.
struct Widgets {
    time: [TextWidget<TIME_CAPACITY>; TIME_READOUTS],
    date: TextWidget<DATE_CAPACITY>,
    epoch: TextWidget<EPOCH_CAPACITY>,
    battery_bar: BarWidget,
    link_bar: BarWidget,
}

impl Widgets {
    fn build(layout: &Layout) -> Self {
        let time_fonts = [LARGE_FONT, MEDIUM_FONT, MEDIUM_FONT];
        let mut slot = 0;
        let time = layout.time.map(|bounds| {
            let font = time_fonts[slot];
            slot += 1;
            TextWidget::new(bounds, font, TIME_PLACEHOLDER)
        });

        Self {
            time,
            date: TextWidget::new(layout.date, SMALL_FONT, ""),
            epoch: TextWidget::new(layout.epoch, SMALL_FONT, EPOCH_PLACEHOLDER),
            battery_bar: BarWidget::new(layout.battery_bar),
            link_bar: BarWidget::new(layout.link_bar),
        }
    }

    fn any_dirty(&self) -> bool {
        self.time.iter().any(TextWidget::is_dirty)
            || self.date.is_dirty()
            || self.epoch.is_dirty()
            || self.battery_bar.is_dirty()
            || self.link_bar.is_dirty()
    }

    fn mark_all_dirty(&mut self) {
        self.time.iter_mut().for_each(TextWidget::mark_dirty);
        self.date.mark_dirty();
        self.epoch.mark_dirty();
        self.battery_bar.mark_dirty();
        self.link_bar.mark_dirty();
    }

    fn clear_dirty(&mut self) {
        self.time.iter_mut().for_each(TextWidget::clear_dirty);
        self.date.clear_dirty();
        self.epoch.clear_dirty();
        self.battery_bar.clear_dirty();
        self.link_bar.clear_dirty();
    }
}

// =============================================================================
// Display Controller
// =============================================================================

/// Owns the watchface widgets and the cached host state.
pub struct DisplayController {
    layout: Layout,
    battery_percent: u8,
    connected: bool,
    widgets: Option<Widgets>,
    log: LogBuffer,
}

impl DisplayController {
    /// Create an unloaded controller for `layout`.
    pub const fn new(layout: Layout) -> Self {
        Self {
            layout,
            battery_percent: 0,
            connected: false,
            widgets: None,
            log: LogBuffer::new(),
        }
    }

    /// Build every widget and show current values straight away.
    ///
    /// Battery and link state come from an on-demand peek rather than the push
    /// channels, and the startup link state never triggers a vibration.
    pub fn on_window_load<H>(
        &mut self,
        host: &H,
    ) where
        H: Clock + BatteryMonitor + ConnectionMonitor + ?Sized,
    {
        if self.widgets.is_some() {
            log_warn!(self.log, "Window reloaded while loaded");
        }
        self.widgets = Some(Widgets::build(&self.layout));

        self.refresh_readouts(host.now());
        self.store_battery(host.peek_charge());
        self.store_connection(host.peek_connection());

        log_info!(
            self.log,
            "Loaded: {}% {}",
            self.battery_percent,
            if self.connected { "linked" } else { "unlinked" }
        );
    }

    /// Release every widget. Calling it on an unloaded controller does nothing.
    pub fn on_window_unload(&mut self) {
        if self.widgets.take().is_some() {
            log_info!(self.log, "Window unloaded");
        }
    }

    /// Reformat the three time readouts, the date and the epoch.
    pub fn on_minute_tick<C>(
        &mut self,
        clock: &C,
    ) where
        C: Clock + ?Sized,
    {
        self.refresh_readouts(clock.now());
    }

    /// Cache a pushed battery level and schedule a bar repaint.
    pub fn on_battery_changed(
        &mut self,
        percent: u8,
    ) {
        self.store_battery(percent);
        log_info!(self.log, "Battery {}%", self.battery_percent);
    }

    /// Cache a pushed link state and schedule a bar repaint.
    ///
    /// A push reporting "disconnected" fires one double-pulse alert; reconnects are silent.
    pub fn on_connection_changed<H>(
        &mut self,
        connected: bool,
        haptics: &mut H,
    ) where
        H: Haptics + ?Sized,
    {
        self.store_connection(connected);
        if connected {
            log_info!(self.log, "Link up");
        } else {
            haptics.double_pulse();
            log_warn!(self.log, "Link lost, vibrating");
        }
    }

    /// Whether the next redraw pass has anything to paint.
    pub fn needs_redraw(&self) -> bool { self.widgets.as_ref().is_some_and(Widgets::any_dirty) }

    /// Force a full repaint on the next redraw pass (e.g. after an overlay was drawn on top).
    pub fn invalidate(&mut self) {
        if let Some(widgets) = self.widgets.as_mut() {
            widgets.mark_all_dirty();
        }
    }

    /// Redraw pass. Repaints the whole window in z-order when anything is dirty.
    ///
    /// Returns `true` if anything was drawn.
    pub fn render<D>(
        &mut self,
        display: &mut D,
    ) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(widgets) = self.widgets.as_mut() else {
            return false;
        };
        if !widgets.any_dirty() {
            return false;
        }

        display.clear(WINDOW_BG).ok();

        for readout in &widgets.time {
            readout.draw(display);
        }
        widgets.epoch.draw(display);
        widgets.date.draw(display);
        paint_battery_bar(display, widgets.battery_bar.bounds(), self.battery_percent);
        paint_connection_bar(display, widgets.link_bar.bounds(), self.connected);

        widgets.clear_dirty();
        true
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn is_loaded(&self) -> bool { self.widgets.is_some() }

    #[inline]
    pub const fn layout(&self) -> &Layout { &self.layout }

    #[inline]
    pub const fn battery_percent(&self) -> u8 { self.battery_percent }

    #[inline]
    pub const fn is_connected(&self) -> bool { self.connected }

    /// Text of time readout `index` (0 = primary), if loaded.
    pub fn time_text(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.widgets.as_ref()?.time.get(index).map(TextWidget::text)
    }

    pub fn date_text(&self) -> Option<&str> { self.widgets.as_ref().map(|w| w.date.text()) }

    pub fn epoch_text(&self) -> Option<&str> { self.widgets.as_ref().map(|w| w.epoch.text()) }

    /// Controller event log (lifecycle, host pushes, clamps, alerts).
    #[inline]
    pub const fn log(&self) -> &LogBuffer { &self.log }

    #[inline]
    pub fn log_mut(&mut self) -> &mut LogBuffer { &mut self.log }

    // =========================================================================
    // Internals
    // =========================================================================

    fn refresh_readouts(
        &mut self,
        now: WallClock,
    ) {
        let Some(widgets) = self.widgets.as_mut() else {
            return;
        };

        let time = format_time(&now.local, now.style);
        let mut changed = false;
        for readout in &mut widgets.time {
            changed |= readout.set_text(&time);
        }
        changed |= widgets.date.set_text(&format_date(&now.local));
        changed |= widgets.epoch.set_text(&format_epoch(now.unix));

        if changed {
            log_debug!(self.log, "Readouts {} @ {}", time.as_str(), now.unix);
        }
    }

    fn store_battery(
        &mut self,
        percent: u8,
    ) {
        if percent > MAX_PERCENT {
            log_warn!(self.log, "Battery {} clamped to {}", percent, MAX_PERCENT);
        }
        self.battery_percent = percent.min(MAX_PERCENT);
        if let Some(widgets) = self.widgets.as_mut() {
            widgets.battery_bar.mark_dirty();
        }
    }

    fn store_connection(
        &mut self,
        connected: bool,
    ) {
        self.connected = connected;
        if let Some(widgets) = self.widgets.as_mut() {
            widgets.link_bar.mark_dirty();
        }
    }
}

impl Default for DisplayController {
    fn default() -> Self { Self::new(Layout::DEFAULT) }
}

// =============================================================================
// Unit Tests
// =============================================================================
