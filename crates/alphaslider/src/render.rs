//! Backend-agnostic draw vocabulary.
//!
//! Widgets emit [`RenderCommand`]s into a plain `Vec`; the host renderer
//! translates them into whatever drawing API it owns. The slider needs only
//! four primitives: filled rects, outlines, lines (ticks) and text (labels).

use crate::layout::Rect;
use crate::style::Color;

/// Estimated advance per character for the monospace UI font, at the
/// reference font size of [`REFERENCE_FONT_SIZE`].
pub const CHAR_ADVANCE: f32 = 8.0;

/// Line height matching [`CHAR_ADVANCE`].
pub const LINE_HEIGHT: f32 = 16.0;

/// Font size the metrics above are calibrated for.
pub const REFERENCE_FONT_SIZE: f32 = 14.0;

/// A render command for the slider.
#[derive(Debug, Clone)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Straight line segment (tick marks).
    Line {
        /// Start point.
        from: (f32, f32),
        /// End point.
        to: (f32, f32),
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
    },
    /// Text anchored at its top-left corner.
    Text {
        /// Text content.
        text: String,
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
        /// Use monospace font.
        monospace: bool,
    },
}

/// Estimates the rendered width of `text` at the given font size.
///
/// The monospace estimate is deliberately crude; it only has to be good
/// enough to center tick labels and size the widget.
#[must_use]
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * CHAR_ADVANCE * (font_size / REFERENCE_FONT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_scales_with_font_size() {
        let narrow = text_width("red", REFERENCE_FONT_SIZE);
        let wide = text_width("red", REFERENCE_FONT_SIZE * 2.0);

        assert!((narrow - 24.0).abs() < f32::EPSILON);
        assert!((wide - 48.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_text_width_counts_chars_not_bytes() {
        assert!((text_width("héllo", REFERENCE_FONT_SIZE) - 40.0).abs() < f32::EPSILON);
    }
}
