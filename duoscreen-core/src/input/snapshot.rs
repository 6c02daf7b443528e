//! Per-frame input state
//!
//! A ready-made [`InputSink`] for hosts that do not have their own input
//! registry. Holds exactly what the backend writes: button states, two axes
//! and the active touch points.

use heapless::Vec;

use super::axis::PadAxis;
use super::buttons::{PadButton, BUTTON_COUNT};
use super::touch::TouchId;
use crate::traits::{InputSink, InputSource};

/// Maximum simultaneous touch points (one digitizer, one contact)
pub const MAX_TOUCHES: usize = 1;

/// Last value written to an axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisState {
    pub x: f32,
    pub y: f32,
    /// Frame time the value was written with (seconds)
    pub delta: f64,
}

/// An active touch contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub id: TouchId,
    pub x: i32,
    pub y: i32,
}

/// Snapshot of abstract input state
#[derive(Debug, Clone)]
pub struct InputSnapshot {
    buttons: [bool; BUTTON_COUNT],
    axes: [AxisState; 2],
    touches: Vec<TouchPoint, MAX_TOUCHES>,
    touch_mode: bool,
    raw_mode: bool,
    source: InputSource,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSnapshot {
    /// Create a snapshot with nothing pressed
    pub fn new() -> Self {
        Self {
            buttons: [false; BUTTON_COUNT],
            axes: [AxisState::default(); 2],
            touches: Vec::new(),
            touch_mode: false,
            raw_mode: false,
            source: InputSource::KeyboardMouse,
        }
    }

    /// Check if a button is down
    pub fn is_pressed(&self, button: PadButton) -> bool {
        self.buttons[button.index()]
    }

    /// Buttons currently down
    pub fn pressed(&self) -> impl Iterator<Item = PadButton> + '_ {
        PadButton::ALL
            .into_iter()
            .filter(move |b| self.buttons[b.index()])
    }

    /// Last value written to an axis
    pub fn axis(&self, axis: PadAxis) -> AxisState {
        self.axes[axis.index()]
    }

    /// Active touch contacts
    pub fn touches(&self) -> &[TouchPoint] {
        &self.touches
    }

    /// Get an active touch contact by id
    pub fn touch(&self, id: TouchId) -> Option<TouchPoint> {
        self.touches.iter().find(|t| t.id == id).copied()
    }

    pub fn touch_mode(&self) -> bool {
        self.touch_mode
    }

    pub fn raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn source(&self) -> InputSource {
        self.source
    }
}

impl InputSink for InputSnapshot {
    fn set_button(&mut self, button: PadButton, pressed: bool) {
        self.buttons[button.index()] = pressed;
    }

    fn set_axis(&mut self, axis: PadAxis, x: f32, y: f32, delta: f64) {
        self.axes[axis.index()] = AxisState { x, y, delta };
    }

    fn add_touch(&mut self, id: TouchId, x: i32, y: i32) {
        if let Some(point) = self.touches.iter_mut().find(|t| t.id == id) {
            point.x = x;
            point.y = y;
            return;
        }
        if self.touches.push(TouchPoint { id, x, y }).is_err() {
            warn!("Touch table full, dropping touch {}", id);
        }
    }

    fn remove_touch(&mut self, id: TouchId, _x: i32, _y: i32) {
        self.touches.retain(|t| t.id != id);
    }

    fn set_touch_mode(&mut self, enabled: bool) {
        self.touch_mode = enabled;
    }

    fn set_raw_mode(&mut self, enabled: bool) {
        self.raw_mode = enabled;
    }

    fn set_source(&mut self, source: InputSource) {
        self.source = source;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec::Vec as StdVec;

    #[test]
    fn test_buttons() {
        let mut snapshot = InputSnapshot::new();
        snapshot.set_button(PadButton::A, true);
        snapshot.set_button(PadButton::ZR, true);
        snapshot.set_button(PadButton::ZR, false);

        assert!(snapshot.is_pressed(PadButton::A));
        assert!(!snapshot.is_pressed(PadButton::ZR));
        let pressed: StdVec<PadButton> = snapshot.pressed().collect();
        assert_eq!(pressed, [PadButton::A]);
    }

    #[test]
    fn test_axes_are_separate() {
        let mut snapshot = InputSnapshot::new();
        snapshot.set_axis(PadAxis::Right, 2.0, -1.0, 0.016);

        assert_eq!(
            snapshot.axis(PadAxis::Right),
            AxisState {
                x: 2.0,
                y: -1.0,
                delta: 0.016
            }
        );
        assert_eq!(snapshot.axis(PadAxis::Left), AxisState::default());
    }

    #[test]
    fn test_touch_add_move_remove() {
        let mut snapshot = InputSnapshot::new();
        snapshot.add_touch(0, 10, 20);
        snapshot.add_touch(0, 11, 22);
        assert_eq!(snapshot.touches().len(), 1);
        assert_eq!(snapshot.touch(0), Some(TouchPoint { id: 0, x: 11, y: 22 }));

        snapshot.remove_touch(0, 11, 22);
        assert!(snapshot.touches().is_empty());
    }

    #[test]
    fn test_second_touch_dropped() {
        let mut snapshot = InputSnapshot::new();
        snapshot.add_touch(0, 1, 1);
        snapshot.add_touch(1, 2, 2);
        assert_eq!(snapshot.touches().len(), 1);
        assert!(snapshot.touch(1).is_none());
    }

    #[test]
    fn test_modes() {
        let mut snapshot = InputSnapshot::new();
        snapshot.set_touch_mode(true);
        snapshot.set_raw_mode(true);
        snapshot.set_source(InputSource::Gamepad);
        assert!(snapshot.touch_mode());
        assert!(snapshot.raw_mode());
        assert_eq!(snapshot.source(), InputSource::Gamepad);
    }
}
