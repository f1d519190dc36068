//! Color picker demo for the AlphaSlider widget.
//!
//! Builds the classic five-color slider in both orientations, registers
//! logging listeners, and drives a scripted interaction sequence through the
//! widget's input path: programmatic selection, a pointer drag across the
//! track, and keyboard jumps.
//!
//! Set `RUST_LOG=alphaslider=debug` to also see the widget's own tracing.
//! An optional `style.toml` in the working directory restyles the sliders.

use alphaslider::{
    AlphaSlider, InputState, MouseButton, Orientation, Rect, RenderCommand, SliderStyle, Widget,
    WidgetId,
};
use tracing_subscriber::EnvFilter;

/// The values presented by both demo sliders.
const COLORS: [&str; 5] = ["red", "green", "blue", "orange", "purple"];

/// Frame time for the scripted interaction (~60fps).
const FRAME_DT: f32 = 1.0 / 60.0;

fn load_style() -> SliderStyle {
    match std::fs::read_to_string("style.toml") {
        Ok(raw) => match toml::from_str(&raw) {
            Ok(style) => {
                tracing::info!("loaded style.toml");
                style
            }
            Err(err) => {
                tracing::warn!("ignoring malformed style.toml: {err}");
                SliderStyle::default()
            }
        },
        Err(_) => SliderStyle::default(),
    }
}

/// Presses at `from`, drags across the track in a few frames, releases at `to`.
fn drag_across(slider: &mut AlphaSlider<&'static str>, from: (f32, f32), to: (f32, f32)) {
    let mut input = InputState::new();

    input.set_mouse_pos(from.0, from.1);
    input.mouse_button_down(MouseButton::Left);
    slider.update(&input, FRAME_DT);

    const STEPS: i32 = 8;
    for step in 1..=STEPS {
        input.begin_frame();
        let t = step as f32 / STEPS as f32;
        input.set_mouse_pos(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
        slider.update(&input, FRAME_DT);
    }

    input.begin_frame();
    input.mouse_button_up(MouseButton::Left);
    slider.update(&input, FRAME_DT);
}

fn run_horizontal(style: &SliderStyle) {
    tracing::info!("--- horizontal slider ---");

    let mut slider =
        AlphaSlider::with_values(WidgetId::new(1), COLORS.to_vec(), Orientation::Horizontal);
    slider.set_style(style.clone());
    slider.state_mut().rect = Rect::new(0.0, 0.0, 266.0, 40.0);

    slider.add_listener(|event| tracing::info!("picked {}", event.current_value));

    slider.set_to_maximum_value();
    slider.set_to_minimum_value();

    if let Err(err) = slider.set_current_value(&"blue") {
        tracing::warn!("rejected: {err}");
    }
    if let Err(err) = slider.set_current_value(&"yellow") {
        tracing::warn!("rejected: {err}");
    }

    // Drag from the left end of the track to the right end
    drag_across(&mut slider, (8.0, 8.0), (258.0, 8.0));

    tracing::info!(
        "after drag: {} (position {})",
        slider.current_value().copied().unwrap_or("<empty>"),
        slider.current_position()
    );
}

fn run_vertical(style: &SliderStyle) {
    tracing::info!("--- vertical slider ---");

    let mut slider =
        AlphaSlider::with_values(WidgetId::new(2), COLORS.to_vec(), Orientation::Vertical);
    slider.set_style(style.clone());
    slider.state_mut().rect = Rect::new(0.0, 0.0, 90.0, 266.0);

    slider.add_listener(|event| tracing::info!("picked {}", event.current_value));

    // The list is stored reversed: the first color starts selected, at the
    // top of the track; the native minimum is the logical last color
    tracing::info!(
        "initial value: {} (position {})",
        slider.current_value().copied().unwrap_or("<empty>"),
        slider.current_position()
    );
    slider.set_to_minimum_value();

    let mut commands = Vec::new();
    slider.render(&mut commands);
    let texts = commands
        .iter()
        .filter(|command| matches!(command, RenderCommand::Text { .. }))
        .count();
    let lines = commands
        .iter()
        .filter(|command| matches!(command, RenderCommand::Line { .. }))
        .count();
    tracing::info!(
        "render: {} commands ({} labels, {} ticks)",
        commands.len(),
        texts,
        lines
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let style = load_style();
    run_horizontal(&style);
    run_vertical(&style);
}
