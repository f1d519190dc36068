//! Widget implementations.

pub mod alpha_slider;
pub mod core;
pub mod range_input;

pub use alpha_slider::AlphaSlider;
pub use core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
pub use range_input::RangeInput;
