//! Integer range-input widget.
//!
//! This is the "native" slider [`AlphaSlider`](super::AlphaSlider) is built
//! on: it understands nothing but an integer range. Position snapping is
//! always on and tick spacing is fixed at 1 - every integer position is a
//! detent with its own optional label.

use crate::animation::{Animation, Easing};
use crate::input::{InputState, Key, MouseButton};
use crate::layout::{Orientation, Rect};
use crate::render::{self, RenderCommand};
use crate::style::SliderStyle;

use super::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};

/// An integer slider with snap-to-position, tick marks and a per-position
/// label table.
///
/// Vertical orientation puts the minimum position at the bottom of the
/// track, so a host that wants its first logical entry on top stores its
/// entries in reverse (which is exactly what `AlphaSlider` does).
pub struct RangeInput {
    /// Widget state.
    state: WidgetState,
    /// Orientation, fixed at construction.
    orientation: Orientation,
    /// Minimum position.
    minimum: i32,
    /// Maximum position.
    maximum: i32,
    /// Current position, always within `[minimum, maximum]`.
    value: i32,
    /// One label per position, indexed by `position - minimum`.
    labels: Vec<String>,
    /// Visual style.
    style: SliderStyle,
    /// Thumb is being dragged.
    dragging: bool,
    /// Thumb hover/press highlight.
    hover_anim: Animation,
}

impl RangeInput {
    /// Creates a new range input over the range `[0, 1]` at position 0.
    #[must_use]
    pub fn new(id: WidgetId, orientation: Orientation) -> Self {
        Self {
            state: WidgetState::new(id),
            orientation,
            minimum: 0,
            maximum: 1,
            value: 0,
            labels: Vec::new(),
            style: SliderStyle::default(),
            dragging: false,
            hover_anim: Animation::new(0.0, Easing::ExponentialOut),
        }
    }

    /// Returns the orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the minimum position.
    #[must_use]
    pub const fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Returns the maximum position.
    #[must_use]
    pub const fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Returns the current position.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Sets the minimum position, clamping the current position if needed.
    pub fn set_minimum(&mut self, minimum: i32) {
        self.minimum = minimum;
        if self.maximum < minimum {
            self.maximum = minimum;
        }
        self.value = self.value.clamp(self.minimum, self.maximum);
        self.state.mark_dirty();
    }

    /// Sets the maximum position, clamping the current position if needed.
    pub fn set_maximum(&mut self, maximum: i32) {
        self.maximum = maximum;
        if self.minimum > maximum {
            self.minimum = maximum;
        }
        self.value = self.value.clamp(self.minimum, self.maximum);
        self.state.mark_dirty();
    }

    /// Moves to `value`, clamped to the range.
    ///
    /// Returns true if the position actually changed.
    pub fn set_value(&mut self, value: i32) -> bool {
        let clamped = value.clamp(self.minimum, self.maximum);
        if clamped == self.value {
            return false;
        }
        tracing::trace!("position {} -> {}", self.value, clamped);
        self.value = clamped;
        self.state.mark_dirty();
        true
    }

    /// Steps the position by `delta`, clamped to the range.
    pub fn step(&mut self, delta: i32) -> bool {
        self.set_value(self.value.saturating_add(delta))
    }

    /// Replaces the whole label table.
    ///
    /// `labels[i]` labels position `minimum + i`; positions past the end of
    /// the table render without a label.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
        self.state.mark_dirty();
    }

    /// Returns the label table.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Replaces the visual style.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.style = style;
        self.state.mark_dirty();
    }

    /// Returns the visual style.
    #[must_use]
    pub const fn style(&self) -> &SliderStyle {
        &self.style
    }

    /// Number of detent positions.
    fn position_count(&self) -> i32 {
        self.maximum - self.minimum + 1
    }

    /// Scaled label line height.
    fn line_height(&self) -> f32 {
        render::LINE_HEIGHT * (self.style.font_size / render::REFERENCE_FONT_SIZE)
    }

    /// Track span along the main axis: (start, length).
    ///
    /// Inset by half a thumb on both ends so the thumb never leaves the
    /// widget bounds.
    fn track_span(&self) -> (f32, f32) {
        let inset = self.style.thumb_size * 0.5;
        let rect = self.state.rect;
        if self.orientation.is_vertical() {
            (rect.y + inset, (rect.height - self.style.thumb_size).max(0.0))
        } else {
            (rect.x + inset, (rect.width - self.style.thumb_size).max(0.0))
        }
    }

    /// Main-axis coordinate of a position's detent.
    fn position_coord(&self, position: i32) -> f32 {
        let (start, length) = self.track_span();
        let span = self.maximum - self.minimum;
        let frac = if span == 0 {
            0.0
        } else {
            (position - self.minimum) as f32 / span as f32
        };
        if self.orientation.is_vertical() {
            // Minimum at the bottom
            start + (1.0 - frac) * length
        } else {
            start + frac * length
        }
    }

    /// Nearest position to a cursor location (snap-to-position).
    fn position_at(&self, x: f32, y: f32) -> i32 {
        let (start, length) = self.track_span();
        if length <= f32::EPSILON {
            return self.minimum;
        }
        let frac = if self.orientation.is_vertical() {
            ((start + length - y) / length).clamp(0.0, 1.0)
        } else {
            ((x - start) / length).clamp(0.0, 1.0)
        };
        let span = (self.maximum - self.minimum) as f32;
        self.minimum + (frac * span).round() as i32
    }

    /// Cross-axis center of the track/thumb band.
    fn band_center(&self) -> f32 {
        let rect = self.state.rect;
        if self.orientation.is_vertical() {
            rect.x + self.style.thumb_size * 0.5
        } else {
            rect.y + self.style.thumb_size * 0.5
        }
    }

    /// Alpha multiplier; disabled widgets render dimmed.
    fn alpha(&self) -> f32 {
        if self.state.is_enabled() {
            1.0
        } else {
            0.4
        }
    }
}

impl Widget for RangeInput {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();

        if !self.state.is_enabled() {
            self.dragging = false;
            self.hover_anim.set_target(0.0);
            self.hover_anim.update(dt * 8.0);
            return response;
        }

        let was_hovered = self.state.is_hovered();
        let is_hovered = self.state.rect.contains(input.mouse_x, input.mouse_y);

        if is_hovered != was_hovered {
            if is_hovered {
                self.state.flags.set(WidgetFlags::HOVERED);
                response.hovered = true;
            } else {
                self.state.flags.clear(WidgetFlags::HOVERED);
                response.unhovered = true;
            }
            self.state.mark_dirty();
        }

        let mut changed = false;

        // Click: grab the thumb, snap to the cursor, take focus
        if input.mouse_clicked(MouseButton::Left) {
            if is_hovered {
                self.dragging = true;
                self.state.flags.set(WidgetFlags::PRESSED);
                if !self.state.is_focused() {
                    self.state.flags.set(WidgetFlags::FOCUSED);
                    response.focused = true;
                }
                response.clicked = true;
                changed |= self.set_value(self.position_at(input.mouse_x, input.mouse_y));
            } else if self.state.is_focused() {
                self.state.flags.clear(WidgetFlags::FOCUSED);
                response.unfocused = true;
                self.state.mark_dirty();
            }
        }

        // Drag: follow the cursor, release lets go
        if self.dragging {
            if input.mouse_down(MouseButton::Left) {
                changed |= self.set_value(self.position_at(input.mouse_x, input.mouse_y));
            }
            if input.mouse_released(MouseButton::Left) {
                self.dragging = false;
                self.state.flags.clear(WidgetFlags::PRESSED);
                changed |= self.set_value(self.position_at(input.mouse_x, input.mouse_y));
                self.state.mark_dirty();
            }
        }

        // Keyboard: only while focused
        if self.state.is_focused() {
            if input.key_pressed(Key::Left) || input.key_pressed(Key::Down) {
                changed |= self.step(-1);
            }
            if input.key_pressed(Key::Right) || input.key_pressed(Key::Up) {
                changed |= self.step(1);
            }
            if input.key_pressed(Key::PageDown) {
                changed |= self.step(-1);
            }
            if input.key_pressed(Key::PageUp) {
                changed |= self.step(1);
            }
            if input.key_pressed(Key::Home) {
                changed |= self.set_value(self.minimum);
            }
            if input.key_pressed(Key::End) {
                changed |= self.set_value(self.maximum);
            }
        }

        // Scroll wheel: one detent per notch while hovered
        if is_hovered && input.scroll_delta.1 != 0.0 {
            changed |= self.step(if input.scroll_delta.1 > 0.0 { 1 } else { -1 });
        }

        // Thumb highlight - fast exponential for snappy response
        let target = if is_hovered || self.dragging { 1.0 } else { 0.0 };
        self.hover_anim.set_target(target);
        self.hover_anim.update(dt * 8.0);

        response.changed = changed;
        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        let style = &self.style;
        let alpha = self.alpha();
        let band = self.band_center();
        let (track_start, track_length) = self.track_span();
        let thumb_main = self.position_coord(self.value);
        let half_track = style.track_thickness * 0.5;

        // Track and filled portion (minimum side of the thumb)
        if self.orientation.is_vertical() {
            commands.push(RenderCommand::Rect {
                bounds: Rect::new(band - half_track, track_start, style.track_thickness, track_length),
                color: style.track.with_alpha(style.track.a * alpha),
                corner_radius: half_track,
            });
            commands.push(RenderCommand::Rect {
                bounds: Rect::new(
                    band - half_track,
                    thumb_main,
                    style.track_thickness,
                    (track_start + track_length - thumb_main).max(0.0),
                ),
                color: style.fill.with_alpha(style.fill.a * alpha),
                corner_radius: half_track,
            });
        } else {
            commands.push(RenderCommand::Rect {
                bounds: Rect::new(track_start, band - half_track, track_length, style.track_thickness),
                color: style.track.with_alpha(style.track.a * alpha),
                corner_radius: half_track,
            });
            commands.push(RenderCommand::Rect {
                bounds: Rect::new(
                    track_start,
                    band - half_track,
                    (thumb_main - track_start).max(0.0),
                    style.track_thickness,
                ),
                color: style.fill.with_alpha(style.fill.a * alpha),
                corner_radius: half_track,
            });
        }

        // One tick per position
        let tick_start = band + style.thumb_size * 0.5;
        if style.show_ticks {
            let tick_color = style.tick.with_alpha(style.tick.a * alpha);
            for position in self.minimum..=self.maximum {
                let coord = self.position_coord(position);
                let (from, to) = if self.orientation.is_vertical() {
                    ((tick_start, coord), (tick_start + style.tick_length, coord))
                } else {
                    ((coord, tick_start), (coord, tick_start + style.tick_length))
                };
                commands.push(RenderCommand::Line {
                    from,
                    to,
                    color: tick_color,
                    width: 1.0,
                });
            }
        }

        // One label per position, centered on its detent
        if style.show_labels && !self.labels.is_empty() {
            let label_start = tick_start
                + if style.show_ticks { style.tick_length } else { 0.0 }
                + style.label_gap;
            let label_color = style.label.with_alpha(style.label.a * alpha);
            for (index, label) in self.labels.iter().enumerate() {
                let position = self.minimum + index as i32;
                if position > self.maximum {
                    break;
                }
                let coord = self.position_coord(position);
                let (x, y) = if self.orientation.is_vertical() {
                    (label_start, coord - self.line_height() * 0.5)
                } else {
                    (coord - render::text_width(label, style.font_size) * 0.5, label_start)
                };
                commands.push(RenderCommand::Text {
                    text: label.clone(),
                    x,
                    y,
                    color: label_color,
                    font_size: style.font_size,
                    monospace: true,
                });
            }
        }

        // Thumb with hover highlight
        let hover_t = self.hover_anim.value();
        let thumb_color = style.thumb.lerp(style.thumb_hover, hover_t);
        let half_thumb = style.thumb_size * 0.5;
        let (thumb_x, thumb_y) = if self.orientation.is_vertical() {
            (band - half_thumb, thumb_main - half_thumb)
        } else {
            (thumb_main - half_thumb, band - half_thumb)
        };
        let thumb_bounds = Rect::new(thumb_x, thumb_y, style.thumb_size, style.thumb_size);
        commands.push(RenderCommand::Rect {
            bounds: thumb_bounds,
            color: thumb_color.with_alpha(thumb_color.a * alpha),
            corner_radius: half_thumb,
        });

        if self.state.is_focused() {
            commands.push(RenderCommand::RectOutline {
                bounds: thumb_bounds,
                color: style.focus_ring.with_alpha(style.focus_ring.a * alpha),
                width: 1.0 + hover_t,
                corner_radius: half_thumb,
            });
        }
    }

    fn min_size(&self) -> (f32, f32) {
        let style = &self.style;
        let count = self.position_count().max(2) as f32;

        let max_label = self
            .labels
            .iter()
            .map(|label| render::text_width(label, style.font_size))
            .fold(0.0_f32, f32::max);

        let mut cross = style.thumb_size;
        if style.show_ticks {
            cross += style.tick_length;
        }
        if style.show_labels && !self.labels.is_empty() {
            cross += style.label_gap
                + if self.orientation.is_vertical() {
                    max_label
                } else {
                    self.line_height()
                };
        }

        let per_position = if self.orientation.is_vertical() {
            self.line_height().max(style.thumb_size)
        } else {
            (max_label + render::CHAR_ADVANCE).max(style.thumb_size)
        };
        let main = per_position * count + style.thumb_size;

        if self.orientation.is_vertical() {
            (cross, main)
        } else {
            (main, cross)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(orientation: Orientation) -> RangeInput {
        let mut range = RangeInput::new(WidgetId::new(1), orientation);
        range.state_mut().rect = Rect::new(0.0, 0.0, 216.0, 40.0);
        if orientation.is_vertical() {
            range.state_mut().rect = Rect::new(0.0, 0.0, 60.0, 216.0);
        }
        range.set_maximum(4);
        range
    }

    fn drag_to(range: &mut RangeInput, x: f32, y: f32) -> bool {
        let mut input = InputState::new();
        input.set_mouse_pos(x, y);
        input.mouse_button_down(MouseButton::Left);
        let pressed = range.update(&input, 0.016);

        input.begin_frame();
        input.mouse_button_up(MouseButton::Left);
        let released = range.update(&input, 0.016);

        pressed.changed || released.changed
    }

    #[test]
    fn test_set_value_clamps() {
        let mut range = slider(Orientation::Horizontal);

        assert!(range.set_value(99));
        assert_eq!(range.value(), 4);
        assert!(!range.set_value(99));

        assert!(range.set_value(-3));
        assert_eq!(range.value(), 0);
    }

    #[test]
    fn test_shrinking_maximum_clamps_value() {
        let mut range = slider(Orientation::Horizontal);
        assert!(range.set_value(4));

        range.set_maximum(2);
        assert_eq!(range.value(), 2);
    }

    #[test]
    fn test_click_snaps_to_nearest_position() {
        // Track spans [8, 208] with 5 positions, detents every 50px
        let mut range = slider(Orientation::Horizontal);

        assert!(drag_to(&mut range, 108.0, 8.0));
        assert_eq!(range.value(), 2);

        // 120 is closer to detent 2 (108) than 3 (158)
        assert!(!drag_to(&mut range, 120.0, 8.0));
        assert_eq!(range.value(), 2);

        assert!(drag_to(&mut range, 140.0, 8.0));
        assert_eq!(range.value(), 3);
    }

    #[test]
    fn test_vertical_minimum_is_at_bottom() {
        let mut range = slider(Orientation::Vertical);

        assert!(drag_to(&mut range, 8.0, 210.0));
        assert_eq!(range.value(), 0);

        assert!(drag_to(&mut range, 8.0, 10.0));
        assert_eq!(range.value(), 4);
    }

    #[test]
    fn test_keyboard_stepping() {
        let mut range = slider(Orientation::Horizontal);

        // Click to focus
        assert!(drag_to(&mut range, 108.0, 8.0));
        assert!(range.state().is_focused());

        let mut input = InputState::new();
        input.set_mouse_pos(108.0, 8.0);
        input.key_down(Key::Right);
        assert!(range.update(&input, 0.016).changed);
        assert_eq!(range.value(), 3);

        input.begin_frame();
        input.key_down(Key::End);
        assert!(range.update(&input, 0.016).changed);
        assert_eq!(range.value(), 4);

        // Already at the end - arrows stop
        input.begin_frame();
        input.key_up(Key::Right);
        input.key_down(Key::Right);
        assert!(!range.update(&input, 0.016).changed);

        input.begin_frame();
        input.key_down(Key::Home);
        assert!(range.update(&input, 0.016).changed);
        assert_eq!(range.value(), 0);
    }

    #[test]
    fn test_keyboard_ignored_without_focus() {
        let mut range = slider(Orientation::Horizontal);

        let mut input = InputState::new();
        input.key_down(Key::End);
        assert!(!range.update(&input, 0.016).changed);
        assert_eq!(range.value(), 0);
    }

    #[test]
    fn test_disabled_ignores_input() {
        let mut range = slider(Orientation::Horizontal);
        range.state_mut().set_enabled(false);

        assert!(!drag_to(&mut range, 208.0, 8.0));
        assert_eq!(range.value(), 0);
    }

    #[test]
    fn test_render_emits_one_label_per_position() {
        let mut range = slider(Orientation::Horizontal);
        range.set_labels(vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()]);

        let mut commands = Vec::new();
        range.render(&mut commands);

        let labels = commands
            .iter()
            .filter(|command| matches!(command, RenderCommand::Text { .. }))
            .count();
        let ticks = commands
            .iter()
            .filter(|command| matches!(command, RenderCommand::Line { .. }))
            .count();

        assert_eq!(labels, 5);
        assert_eq!(ticks, 5);
    }
}
