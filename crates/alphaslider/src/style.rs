//! Slider styling.
//!
//! Everything here is serde-derived so hosts can load a style from a config
//! file once at startup instead of hardcoding colors.

use serde::{Deserialize, Serialize};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Linearly interpolates between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Visual style for the slider track, thumb, ticks and labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderStyle {
    /// Track thickness in pixels.
    pub track_thickness: f32,
    /// Thumb diameter in pixels.
    pub thumb_size: f32,
    /// Tick mark length in pixels.
    pub tick_length: f32,
    /// Gap between ticks and labels in pixels.
    pub label_gap: f32,
    /// Label font size.
    pub font_size: f32,
    /// Draw one tick per position.
    pub show_ticks: bool,
    /// Draw one label per position.
    pub show_labels: bool,
    /// Track color.
    pub track: Color,
    /// Filled portion of the track (minimum side of the thumb).
    pub fill: Color,
    /// Thumb color at rest.
    pub thumb: Color,
    /// Thumb color while hovered or dragged.
    pub thumb_hover: Color,
    /// Focus ring color.
    pub focus_ring: Color,
    /// Tick mark color.
    pub tick: Color,
    /// Label text color.
    pub label: Color,
}

impl SliderStyle {
    /// Dark style, the default.
    pub const DARK: Self = Self {
        track: Color::rgba(0.18, 0.18, 0.22, 1.0),
        fill: Color::rgba(0.25, 0.55, 0.95, 1.0),
        thumb: Color::rgba(0.85, 0.85, 0.9, 1.0),
        thumb_hover: Color::WHITE,
        focus_ring: Color::rgba(0.25, 0.55, 0.95, 0.8),
        tick: Color::rgba(0.45, 0.45, 0.5, 1.0),
        label: Color::rgba(0.85, 0.85, 0.9, 1.0),
        track_thickness: 4.0,
        thumb_size: 16.0,
        tick_length: 6.0,
        label_gap: 4.0,
        font_size: 14.0,
        show_ticks: true,
        show_labels: true,
    };

    /// Light style.
    pub const LIGHT: Self = Self {
        track: Color::hex(0xD0_D0_D4_FF),
        fill: Color::hex(0x2F_6F_E4_FF),
        thumb: Color::hex(0x40_40_48_FF),
        thumb_hover: Color::BLACK,
        focus_ring: Color::hex(0x2F_6F_E4_CC),
        tick: Color::hex(0x90_90_98_FF),
        label: Color::hex(0x30_30_38_FF),
        track_thickness: 4.0,
        thumb_size: 16.0,
        tick_length: 6.0,
        label_gap: 4.0,
        font_size: 14.0,
        show_ticks: true,
        show_labels: true,
    };
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self::DARK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lerp() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);

        assert!((mid.r - 0.5).abs() < 0.01);
        assert!((mid.g - 0.5).abs() < 0.01);
        assert!((mid.b - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_color_hex() {
        let color = Color::hex(0xFF0000FF);
        assert!((color.r - 1.0).abs() < 0.01);
        assert!((color.g - 0.0).abs() < 0.01);
        assert!((color.b - 0.0).abs() < 0.01);
        assert!((color.a - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_style_toml_round_trip() {
        let style = SliderStyle::LIGHT;

        let encoded = toml::to_string(&style).unwrap();
        let decoded: SliderStyle = toml::from_str(&encoded).unwrap();

        assert_eq!(decoded, style);
    }

    #[test]
    fn test_style_partial_toml_uses_defaults() {
        let decoded: SliderStyle = toml::from_str("thumb_size = 24.0\nshow_labels = false\n").unwrap();

        assert!((decoded.thumb_size - 24.0).abs() < f32::EPSILON);
        assert!(!decoded.show_labels);
        assert_eq!(decoded.track, SliderStyle::DARK.track);
    }
}
