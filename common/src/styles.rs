//! Fonts and text styles for the watchface readouts.
//!
//! The watchface uses three font sizes, mirroring the large/medium/small system fonts
//! of a typical watch platform:
//!
//! | Role | Font | Cell size |
//! |------|------|-----------|
//! | Primary time readout | `ProFont` 24pt | ~16x29 |
//! | Secondary/tertiary time readouts | `ProFont` 18pt | ~12x22 |
//! | Date and epoch | `ProFont` 14pt | ~10x18 |
//!
//! All readouts are horizontally centered in their widget and hang from the top edge,
//! so a widget rectangle fully describes where its text lands.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered, top-anchored text. Used by every watchface readout.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Left-aligned, top-anchored text. Used by the simulator's log page.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References
// =============================================================================

/// Large font for the primary time readout.
pub const LARGE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Medium font for the two secondary time readouts.
pub const MEDIUM_FONT: &MonoFont = &PROFONT_18_POINT;

/// Small font for the date and epoch readouts.
pub const SMALL_FONT: &MonoFont = &PROFONT_14_POINT;

/// Tiny label font (6x10). Log lines and simulator overlays.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;
