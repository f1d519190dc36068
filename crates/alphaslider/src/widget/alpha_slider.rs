//! The labeled value slider.
//!
//! An `AlphaSlider` selects one value from an ordered list of values of any
//! type `T`, using each value's `Display` string as the label for its
//! position. Clients register callbacks to receive a [`SliderEvent`] whenever
//! the selected value changes.

use std::fmt::Display;

use crate::error::{SliderError, SliderResult};
use crate::event::{ListenerId, Listeners, SliderEvent};
use crate::input::InputState;
use crate::layout::Orientation;
use crate::render::RenderCommand;
use crate::style::SliderStyle;

use super::{RangeInput, Widget, WidgetId, WidgetResponse, WidgetState};

/// A slider over an ordered list of labeled values.
///
/// The underlying [`RangeInput`] only understands integer positions; this
/// widget owns the position-to-value mapping. In vertical orientation the
/// stored list is reversed so the first logical value sits at the native
/// maximum, which renders at the top of the track.
pub struct AlphaSlider<T> {
    /// Widget state.
    state: WidgetState,
    /// The values presented by the slider, in native position order.
    values: Vec<T>,
    /// Orientation, fixed at construction.
    orientation: Orientation,
    /// The underlying integer range widget.
    range: RangeInput,
    /// Listeners registered for value-change events.
    listeners: Listeners<T>,
}

impl<T: Display> AlphaSlider<T> {
    /// Creates an empty slider with the default horizontal orientation.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        Self::with_orientation(id, Orientation::Horizontal)
    }

    /// Creates an empty slider with the given orientation.
    #[must_use]
    pub fn with_orientation(id: WidgetId, orientation: Orientation) -> Self {
        // The range widget gets a derived child ID, same scheme as any
        // compound widget in this crate
        let range_id = WidgetId::new(id.raw() * 1000 + 1);
        Self {
            state: WidgetState::new(id),
            values: Vec::new(),
            orientation,
            range: RangeInput::new(range_id, orientation),
            listeners: Listeners::new(),
        }
    }

    /// Creates a slider populated with `values`.
    #[must_use]
    pub fn with_values(id: WidgetId, values: Vec<T>, orientation: Orientation) -> Self
    where
        T: PartialEq,
    {
        let mut slider = Self::with_orientation(id, orientation);
        slider.set_values(values);
        slider
    }

    /// Replaces the value list.
    ///
    /// An empty `values` is a silent no-op: the current list and position are
    /// retained. Otherwise the range widget is reconfigured over
    /// `[0, len - 1]` with a rebuilt label table; horizontal sliders start at
    /// position 0, vertical sliders store the list reversed and start at the
    /// maximum so the first supplied value renders topmost. Emits one change
    /// event if the selected value actually changed.
    pub fn set_values(&mut self, values: Vec<T>)
    where
        T: PartialEq,
    {
        if values.is_empty() {
            return;
        }

        let mut values = values;
        let maximum = values.len() - 1;
        let initial = if self.orientation.is_vertical() {
            values.reverse();
            maximum
        } else {
            0
        };

        let value_changed = match self.current_value() {
            None => true,
            Some(previous) => *previous != values[initial],
        };

        tracing::trace!("replacing {} values with {}", self.values.len(), values.len());
        self.values = values;
        self.range.set_minimum(0);
        self.range.set_maximum(maximum as i32);
        let _ = self.range.set_value(initial as i32);
        self.range
            .set_labels(self.values.iter().map(ToString::to_string).collect());
        self.state.mark_dirty();

        if value_changed {
            self.notify_listeners();
        }
    }

    /// Returns the currently selected value, or `None` while the slider is
    /// empty.
    #[must_use]
    pub fn current_value(&self) -> Option<&T> {
        self.values.get(self.current_position())
    }

    /// Returns the current native position.
    #[must_use]
    pub fn current_position(&self) -> usize {
        self.range.value().unsigned_abs() as usize
    }

    /// Selects `value`, looked up by equality in the stored list.
    ///
    /// # Errors
    ///
    /// [`SliderError::ValueNotFound`] if `value` is not a slider value; the
    /// slider is left unchanged.
    pub fn set_current_value(&mut self, value: &T) -> SliderResult<()>
    where
        T: PartialEq,
    {
        let position = self
            .values
            .iter()
            .position(|candidate| candidate == value)
            .ok_or_else(|| SliderError::ValueNotFound {
                label: value.to_string(),
            })?;
        if self.range.set_value(position as i32) {
            self.notify_listeners();
        }
        Ok(())
    }

    /// Selects the value at a native position.
    ///
    /// # Errors
    ///
    /// [`SliderError::PositionOutOfRange`] if `position` is not a valid
    /// index; the slider is left unchanged.
    pub fn set_position(&mut self, position: usize) -> SliderResult<()> {
        if position >= self.values.len() {
            return Err(SliderError::PositionOutOfRange {
                position,
                len: self.values.len(),
            });
        }
        if self.range.set_value(position as i32) {
            self.notify_listeners();
        }
        Ok(())
    }

    /// Moves to the native minimum position.
    ///
    /// This is the native-range extreme, not the logical first value: under
    /// vertical orientation the minimum holds the logical LAST value.
    pub fn set_to_minimum_value(&mut self) {
        if self.range.set_value(self.range.minimum()) {
            self.notify_listeners();
        }
    }

    /// Moves to the native maximum position.
    pub fn set_to_maximum_value(&mut self) {
        if self.range.set_value(self.range.maximum()) {
            self.notify_listeners();
        }
    }

    /// Registers a value-change callback and returns its removal handle.
    pub fn add_listener(&mut self, listener: impl FnMut(&SliderEvent<'_, T>) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Removes a previously registered callback.
    ///
    /// Returns `false` if the handle is unknown; removal is idempotent.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Returns the stored values in native position order.
    ///
    /// Under vertical orientation this is the reverse of the list supplied to
    /// [`set_values`](Self::set_values).
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the slider holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Replaces the visual style of the underlying range widget.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.range.set_style(style);
    }

    /// Looks up the selected value and fans it out to every listener.
    fn notify_listeners(&mut self) {
        let position = self.range.value().unsigned_abs() as usize;
        let Some(value) = self.values.get(position) else {
            return;
        };
        tracing::debug!("value changed to {}, notifying {} listeners", value, self.listeners.len());
        let event = SliderEvent {
            source: self.state.id,
            current_value: value,
        };
        self.listeners.notify(&event);
    }
}

impl<T: Display> Widget for AlphaSlider<T> {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        // The range widget fills the slider bounds
        self.range.state_mut().rect = self.state.rect;
        let response = self.range.update(input, dt);
        if response.changed {
            self.notify_listeners();
        }
        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        self.range.render(commands);
    }

    fn min_size(&self) -> (f32, f32) {
        self.range.min_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;
    use crate::layout::Rect;
    use std::cell::RefCell;
    use std::rc::Rc;

    const COLORS: [&str; 5] = ["red", "green", "blue", "orange", "purple"];

    fn colors() -> Vec<String> {
        COLORS.iter().map(ToString::to_string).collect()
    }

    fn horizontal() -> AlphaSlider<String> {
        AlphaSlider::with_values(WidgetId::new(1), colors(), Orientation::Horizontal)
    }

    #[test]
    fn test_horizontal_starts_at_first_value() {
        let slider = horizontal();

        assert_eq!(slider.current_value().map(String::as_str), Some("red"));
        assert_eq!(slider.current_position(), 0);
    }

    #[test]
    fn test_vertical_stores_reversed_and_starts_at_maximum() {
        let slider =
            AlphaSlider::with_values(WidgetId::new(1), colors(), Orientation::Vertical);

        // Stored order is reversed; the logical first value sits at the
        // native maximum (top of track) and starts selected
        assert_eq!(slider.values()[0], "purple");
        assert_eq!(slider.values()[4], "red");
        assert_eq!(slider.current_position(), 4);
        assert_eq!(slider.current_value().map(String::as_str), Some("red"));
    }

    #[test]
    fn test_empty_replacement_is_noop() {
        let mut slider = horizontal();
        slider.set_current_value(&"blue".to_string()).unwrap();

        slider.set_values(Vec::new());

        assert_eq!(slider.len(), 5);
        assert_eq!(slider.current_value().map(String::as_str), Some("blue"));
    }

    #[test]
    fn test_empty_slider_has_no_current_value() {
        let slider: AlphaSlider<String> = AlphaSlider::new(WidgetId::new(1));
        assert!(slider.is_empty());
        assert_eq!(slider.current_value(), None);
    }

    #[test]
    fn test_set_current_value_round_trips() {
        let mut slider = horizontal();

        for color in COLORS {
            slider.set_current_value(&color.to_string()).unwrap();
            assert_eq!(slider.current_value().map(String::as_str), Some(color));
        }
    }

    #[test]
    fn test_set_current_value_unknown_fails_without_mutation() {
        let mut slider = horizontal();
        slider.set_current_value(&"blue".to_string()).unwrap();

        let err = slider.set_current_value(&"yellow".to_string()).unwrap_err();

        assert_eq!(
            err,
            SliderError::ValueNotFound {
                label: "yellow".to_string()
            }
        );
        assert_eq!(slider.current_value().map(String::as_str), Some("blue"));
    }

    #[test]
    fn test_set_position_validates_range() {
        let mut slider = horizontal();

        slider.set_position(3).unwrap();
        assert_eq!(slider.current_value().map(String::as_str), Some("orange"));

        let err = slider.set_position(5).unwrap_err();
        assert_eq!(err, SliderError::PositionOutOfRange { position: 5, len: 5 });
    }

    #[test]
    fn test_minimum_and_maximum_are_native_extremes() {
        let mut slider = horizontal();

        slider.set_to_maximum_value();
        assert_eq!(slider.current_value().map(String::as_str), Some("purple"));

        slider.set_to_minimum_value();
        assert_eq!(slider.current_value().map(String::as_str), Some("red"));

        // Under vertical orientation the native minimum is the logical last
        let mut vertical =
            AlphaSlider::with_values(WidgetId::new(2), colors(), Orientation::Vertical);
        vertical.set_to_minimum_value();
        assert_eq!(vertical.current_value().map(String::as_str), Some("purple"));
    }

    #[test]
    fn test_listener_receives_exactly_one_event_per_change() {
        let mut slider = horizontal();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = {
            let seen = Rc::clone(&seen);
            slider.add_listener(move |event| seen.borrow_mut().push(event.current_value.clone()))
        };

        slider.set_current_value(&"blue".to_string()).unwrap();
        assert_eq!(*seen.borrow(), vec!["blue".to_string()]);

        // Selecting the current value again moves nothing and fires nothing
        slider.set_current_value(&"blue".to_string()).unwrap();
        assert_eq!(seen.borrow().len(), 1);

        assert!(slider.remove_listener(id));
        slider.set_to_maximum_value();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_event_carries_source_widget() {
        let mut slider = horizontal();
        let source = Rc::new(RefCell::new(None));

        {
            let source = Rc::clone(&source);
            slider.add_listener(move |event| *source.borrow_mut() = Some(event.source));
        }
        slider.set_to_maximum_value();

        assert_eq!(*source.borrow(), Some(WidgetId::new(1)));
    }

    #[test]
    fn test_set_values_fires_once_when_value_changes() {
        let mut slider = horizontal();
        let count = Rc::new(RefCell::new(0));

        {
            let count = Rc::clone(&count);
            slider.add_listener(move |_| *count.borrow_mut() += 1);
        }

        // "red" -> "cyan"
        slider.set_values(vec!["cyan".to_string(), "magenta".to_string()]);
        assert_eq!(*count.borrow(), 1);

        // "cyan" -> "cyan": no event
        slider.set_values(vec!["cyan".to_string(), "yellow".to_string()]);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_label_table_follows_values() {
        let mut slider =
            AlphaSlider::with_values(WidgetId::new(1), colors(), Orientation::Vertical);

        let mut commands = Vec::new();
        slider.state_mut().rect = Rect::new(0.0, 0.0, 80.0, 266.0);
        slider.range.state_mut().rect = slider.state.rect;
        slider.render(&mut commands);

        let labels: Vec<&str> = commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        // Native position order: reversed
        assert_eq!(labels, vec!["purple", "orange", "blue", "green", "red"]);
    }

    #[test]
    fn test_interactive_drag_notifies() {
        let mut slider = horizontal();
        slider.state_mut().rect = Rect::new(0.0, 0.0, 216.0, 40.0);

        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            slider.add_listener(move |event| seen.borrow_mut().push(event.current_value.clone()));
        }

        // Press at the far end of the track: detents every 50px from x=8
        let mut input = InputState::new();
        input.set_mouse_pos(208.0, 8.0);
        input.mouse_button_down(MouseButton::Left);
        let response = slider.update(&input, 0.016);
        assert!(response.changed);

        input.begin_frame();
        input.mouse_button_up(MouseButton::Left);
        slider.update(&input, 0.016);

        assert_eq!(*seen.borrow(), vec!["purple".to_string()]);
        assert_eq!(slider.current_value().map(String::as_str), Some("purple"));
    }
}
