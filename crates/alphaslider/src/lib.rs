//! # AlphaSlider
//!
//! A slider widget that selects from an ordered list of labeled values
//! instead of a numeric range.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      ALPHASLIDER                          │
//! ├──────────────────────────────────────────────────────────┤
//! │  Input Events → RangeInput → Position → Value Lookup     │
//! │       ↓             ↓            ↓           ↓           │
//! │  Hit Testing    Snap/Ticks   Label Table  Listener       │
//! │                                            Fan-out        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! [`AlphaSlider`] wraps an integer [`RangeInput`] widget: the range widget
//! owns the position, the alpha slider owns the position-to-value mapping
//! and republishes position changes as typed [`SliderEvent`]s. Each value's
//! `Display` string labels its position. Rendering is backend-agnostic -
//! widgets emit [`RenderCommand`]s and the host draws them.
//!
//! ## Example
//!
//! ```
//! use alphaslider::{AlphaSlider, Orientation, WidgetId};
//!
//! let colors = vec!["red", "green", "blue", "orange", "purple"];
//! let mut slider = AlphaSlider::with_values(WidgetId::new(1), colors, Orientation::Horizontal);
//!
//! slider.add_listener(|event| println!("selected {}", event.current_value));
//! slider.set_current_value(&"blue")?;
//! assert_eq!(slider.current_value(), Some(&"blue"));
//! # Ok::<(), alphaslider::SliderError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod error;
pub mod event;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use animation::{Animation, Easing};
pub use error::{SliderError, SliderResult};
pub use event::{ListenerId, Listeners, SliderEvent};
pub use input::{InputState, Key, MouseButton};
pub use layout::{Orientation, Rect};
pub use render::RenderCommand;
pub use style::{Color, SliderStyle};
pub use widget::{AlphaSlider, RangeInput, Widget, WidgetId, WidgetResponse};
