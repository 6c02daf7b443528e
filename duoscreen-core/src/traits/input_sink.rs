//! Abstract input registry

use crate::input::{PadAxis, PadButton, TouchId};

/// Kind of device the engine should expect input from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputSource {
    /// Buttons, sticks and touch only
    Gamepad,
    /// Physical keyboard and mouse
    KeyboardMouse,
}

/// Sink for normalized input
///
/// Implemented by the engine's input layer, which derives "just pressed"
/// and "just released" from consecutive frames.
pub trait InputSink {
    /// Record a button as down or up
    fn set_button(&mut self, button: PadButton, pressed: bool);

    /// Record an axis position; `delta` is the frame time in seconds
    fn set_axis(&mut self, axis: PadAxis, x: f32, y: f32, delta: f64);

    /// Register or move a touch point
    fn add_touch(&mut self, id: TouchId, x: i32, y: i32);

    /// Release a touch point at the given position
    fn remove_touch(&mut self, id: TouchId, x: i32, y: i32);

    /// Switch the input layer between touch and pointer semantics
    fn set_touch_mode(&mut self, _enabled: bool) {}

    /// Enable or disable raw (relative) mouse input
    fn set_raw_mode(&mut self, _enabled: bool) {}

    /// Declare which input devices exist
    fn set_source(&mut self, _source: InputSource) {}
}
