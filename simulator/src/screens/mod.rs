//! Full-screen pages other than the watchface.

mod logs;

pub use logs::draw_log_page;
