//! Log buffer with levels and sequence numbers for on-device log viewing.
//!
//! Provides a circular buffer of log entries. The controller records lifecycle and
//! host events here; the simulator renders the buffer on its log page.
//!
//! # Log Levels
//!
//! - `Trace`: Dark gray - verbose debugging
//! - `Debug`: Gray - debugging information
//! - `Info`: Green - normal operation
//! - `Warn`: Yellow - warnings (e.g. clamped host values)
//! - `Error`: Red - errors
//!
//! # Usage
//!
//! ```ignore
//! use watchface_common::{log_info, log_warn};
//!
//! log_info!(self.log, "Battery {}%", percent);
//! log_warn!(self.log, "Battery {} out of range", raw);
//! ```

use core::fmt::{self, Write};

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{GRAY, GREEN, RED, YELLOW};
use crate::format::Truncating;

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 14;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 40;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Verbose debugging (dark gray)
    Trace = 0,
    /// Debug information (gray)
    Debug = 1,
    /// Normal operation (green)
    #[default]
    Info = 2,
    /// Warnings (yellow)
    Warn = 3,
    /// Errors (red)
    Error = 4,
}

impl LogLevel {
    /// Get the display color for this log level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Trace | Self::Debug => GRAY,
            Self::Info => GREEN,
            Self::Warn => YELLOW,
            Self::Error => RED,
        }
    }

    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry with level, message, and sequence number.
#[derive(Clone, Debug)]
pub struct LogEntry {
    /// Log severity level.
    pub level: LogLevel,
    /// Log message (truncated to LOG_MSG_LEN).
    pub message: String<LOG_MSG_LEN>,
    /// Monotonic entry number, starting at 0 for the first entry ever pushed.
    pub seq: u32,
}

impl LogEntry {
    const EMPTY: Self = Self {
        level: LogLevel::Info,
        message: String::new(),
        seq: 0,
    };
}

/// Circular buffer of log entries.
pub struct LogBuffer {
    entries: [LogEntry; LOG_ENTRIES],
    head: usize, // Next write position
    count: usize,
    next_seq: u32,
}

impl LogBuffer {
    /// Create a new empty log buffer.
    pub const fn new() -> Self {
        Self {
            entries: [LogEntry::EMPTY; LOG_ENTRIES],
            head: 0,
            count: 0,
            next_seq: 0,
        }
    }

    /// Push a plain message. Oldest entry is dropped if buffer is full.
    pub fn push(
        &mut self,
        level: LogLevel,
        message: &str,
    ) {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        let _ = Truncating(&mut msg).write_str(message);
        self.push_entry(level, msg);
    }

    /// Push a formatted message. Used by the `log_*!` macros.
    pub fn push_fmt(
        &mut self,
        level: LogLevel,
        args: fmt::Arguments<'_>,
    ) {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        let _ = Truncating(&mut msg).write_fmt(args);
        self.push_entry(level, msg);
    }

    fn push_entry(
        &mut self,
        level: LogLevel,
        message: String<LOG_MSG_LEN>,
    ) {
        self.entries[self.head] = LogEntry {
            level,
            message,
            seq: self.next_seq,
        };
        self.next_seq = self.next_seq.wrapping_add(1);
        self.head = (self.head + 1) % LOG_ENTRIES;
        if self.count < LOG_ENTRIES {
            self.count += 1;
        }
    }

    /// Get the number of entries in the buffer.
    #[inline]
    pub const fn len(&self) -> usize { self.count }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Sequence number the next entry will receive.
    #[inline]
    pub const fn next_seq(&self) -> u32 { self.next_seq }

    /// Most recent entry, if any.
    pub fn last(&self) -> Option<&LogEntry> {
        if self.count == 0 {
            return None;
        }
        Some(&self.entries[(self.head + LOG_ENTRIES - 1) % LOG_ENTRIES])
    }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> LogBufferIter<'_> {
        let start = if self.count < LOG_ENTRIES { 0 } else { self.head };
        LogBufferIter {
            buffer: self,
            pos: start,
            remaining: self.count,
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

/// Iterator over log buffer entries (oldest to newest).
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    pos: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = &self.buffer.entries[self.pos];
        self.pos = (self.pos + 1) % LOG_ENTRIES;
        self.remaining -= 1;
        Some(entry)
    }
}

/// Log a message at Info level.
#[macro_export]
macro_rules! log_info {
    ($log:expr, $($arg:tt)*) => {
        $log.push_fmt($crate::log_buffer::LogLevel::Info, format_args!($($arg)*))
    };
}

/// Log a message at Warn level.
#[macro_export]
macro_rules! log_warn {
    ($log:expr, $($arg:tt)*) => {
        $log.push_fmt($crate::log_buffer::LogLevel::Warn, format_args!($($arg)*))
    };
}

/// Log a message at Error level.
#[macro_export]
macro_rules! log_error {
    ($log:expr, $($arg:tt)*) => {
        $log.push_fmt($crate::log_buffer::LogLevel::Error, format_args!($($arg)*))
    };
}

/// Log a message at Debug level.
#[macro_export]
macro_rules! log_debug {
    ($log:expr, $($arg:tt)*) => {
        $log.push_fmt($crate::log_buffer::LogLevel::Debug, format_args!($($arg)*))
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_push() {
        let mut log = LogBuffer::new();
        assert!(log.is_empty());

        log.push(LogLevel::Info, "Test message");
        assert_eq!(log.len(), 1);

        log.push(LogLevel::Warn, "Another message");
        assert_eq!(log.len(), 2);
        assert_eq!(log.last().unwrap().level, LogLevel::Warn);
    }

    #[test]
    fn test_log_ring_buffer_drops_oldest() {
        let mut log = LogBuffer::new();
        for i in 0..LOG_ENTRIES + 1 {
            log_info!(log, "{}", i);
        }
        assert_eq!(log.len(), LOG_ENTRIES);

        let first = log.iter().next().unwrap();
        assert_eq!(first.message.as_str(), "1");
        assert_eq!(first.seq, 1);
        assert_eq!(log.last().unwrap().message.as_str(), "14");
        assert_eq!(log.next_seq(), LOG_ENTRIES as u32 + 1);
    }

    #[test]
    fn test_log_iter_oldest_first() {
        let mut log = LogBuffer::new();
        log.push(LogLevel::Info, "a");
        log.push(LogLevel::Info, "b");
        log.push(LogLevel::Info, "c");
        let messages: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["a", "b", "c"]);
    }

    #[test]
    fn test_log_truncation() {
        let mut log = LogBuffer::new();
        let long_msg = "This is a very long message that exceeds the maximum line length limit";
        log.push(LogLevel::Info, long_msg);

        let stored = log.iter().next().unwrap();
        assert_eq!(stored.message.len(), LOG_MSG_LEN);
        assert!(long_msg.starts_with(stored.message.as_str()));
    }

    #[test]
    fn test_log_macros_set_level() {
        let mut log = LogBuffer::new();
        log_warn!(log, "clamped {}", 130);
        assert_eq!(log.last().unwrap().level, LogLevel::Warn);
        assert_eq!(log.last().unwrap().message.as_str(), "clamped 130");
        log_debug!(log, "tick");
        assert_eq!(log.last().unwrap().level, LogLevel::Debug);
        log_error!(log, "boom");
        assert_eq!(log.last().unwrap().level, LogLevel::Error);
    }

    #[test]
    fn test_level_prefix_and_color() {
        assert_eq!(LogLevel::Warn.prefix(), 'W');
        assert_eq!(LogLevel::Error.color(), RED);
        assert!(LogLevel::Debug < LogLevel::Error);
    }
}
