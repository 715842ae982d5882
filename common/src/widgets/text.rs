//! Text readout widget.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::TEXT_COLOR;
use crate::format::truncated;
use crate::styles::CENTERED_TOP;

/// A rectangle showing up to `N` characters of centered, top-anchored text.
///
/// The background is transparent: whatever the redraw pass painted underneath stays
/// visible around the glyphs. Text is clipped to the widget bounds.
pub struct TextWidget<const N: usize> {
    bounds: Rectangle,
    font: &'static MonoFont<'static>,
    text: String<N>,
    dirty: bool,
}

impl<const N: usize> TextWidget<N> {
    /// Create a widget showing `placeholder` until the first assignment.
    pub fn new(
        bounds: Rectangle,
        font: &'static MonoFont<'static>,
        placeholder: &str,
    ) -> Self {
        Self {
            bounds,
            font,
            text: truncated(placeholder),
            dirty: true,
        }
    }

    /// Replace the text. Marks the widget dirty only when the content changed.
    ///
    /// Returns `true` if the text changed.
    pub fn set_text(
        &mut self,
        text: &str,
    ) -> bool {
        let next: String<N> = truncated(text);
        if next == self.text {
            return false;
        }
        self.text = next;
        self.dirty = true;
        true
    }

    #[inline]
    pub fn text(&self) -> &str { self.text.as_str() }

    #[inline]
    pub const fn bounds(&self) -> Rectangle { self.bounds }

    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    #[inline]
    pub fn mark_dirty(&mut self) { self.dirty = true; }

    #[inline]
    pub fn clear_dirty(&mut self) { self.dirty = false; }

    /// Draw the text, clipped to the widget bounds.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let anchor = Point::new(self.bounds.center().x, self.bounds.top_left.y);
        let style = MonoTextStyle::new(self.font, TEXT_COLOR);
        Text::with_text_style(self.text.as_str(), anchor, style, CENTERED_TOP)
            .draw(&mut display.clipped(&self.bounds))
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::styles::{LARGE_FONT, SMALL_FONT};
    use crate::testing::FrameBuffer;

    fn widget() -> TextWidget<5> {
        TextWidget::new(Rectangle::new(Point::new(0, 18), Size::new(144, 50)), LARGE_FONT, "00:00")
    }

    #[test]
    fn test_new_widget_shows_placeholder_and_is_dirty() {
        let w = widget();
        assert_eq!(w.text(), "00:00");
        assert!(w.is_dirty());
    }

    #[test]
    fn test_set_text_same_value_stays_clean() {
        let mut w = widget();
        w.clear_dirty();
        assert!(!w.set_text("00:00"));
        assert!(!w.is_dirty());
    }

    #[test]
    fn test_set_text_new_value_marks_dirty() {
        let mut w = widget();
        w.clear_dirty();
        assert!(w.set_text("09:05"));
        assert!(w.is_dirty());
        assert_eq!(w.text(), "09:05");
    }

    #[test]
    fn test_set_text_truncates_to_capacity() {
        let mut w = widget();
        w.set_text("10:00 PM");
        assert_eq!(w.text(), "10:00");
    }

    #[test]
    fn test_draw_stays_inside_bounds() {
        let bounds = Rectangle::new(Point::new(0, 3), Size::new(144, 20));
        let w: TextWidget<15> = TextWidget::new(bounds, SMALL_FONT, "Tue, 14 Nov");
        let mut fb = FrameBuffer::new(Size::new(144, 168), WHITE);
        w.draw(&mut fb);

        assert!(fb.count_in(&bounds, BLACK) > 0, "no glyph pixels drawn");
        assert_eq!(fb.count(BLACK), fb.count_in(&bounds, BLACK), "text leaked outside bounds");
    }
}
