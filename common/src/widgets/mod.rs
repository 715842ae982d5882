//! Widget components for the watchface display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.
//!
//! - `text`: Fixed-capacity text readouts (time, date, epoch)
//! - `bars`: Custom-painted battery and link bars

mod bars;
mod text;

pub use bars::{BarWidget, battery_fill_width, paint_battery_bar, paint_connection_bar};
pub use text::TextWidget;
