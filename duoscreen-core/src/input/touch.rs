//! Touch digitizer tracking
//!
//! The digitizer reports garbage (usually 0,0) once contact ends, so the
//! release is reported at the last position seen while touching.

use duoscreen_hal::input::keys;
use duoscreen_hal::TouchPosition;

use crate::traits::InputSink;

/// Touch point identifier
pub type TouchId = u32;

/// The only touch point a single-digitizer device can produce
pub const PRIMARY_TOUCH: TouchId = 0;

/// Touch contact state between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchTracker {
    last_x: i32,
    last_y: i32,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one frame of touch input
    ///
    /// - `mods`: keys down or held this frame
    /// - `released`: keys released this frame
    /// - `reading`: current digitizer position
    pub fn update<S: InputSink>(
        &mut self,
        mods: u32,
        released: u32,
        reading: TouchPosition,
        sink: &mut S,
    ) {
        if mods & keys::TOUCH != 0 {
            self.last_x = i32::from(reading.px);
            self.last_y = i32::from(reading.py);
            sink.add_touch(PRIMARY_TOUCH, self.last_x, self.last_y);
        } else if released & keys::TOUCH != 0 {
            sink.remove_touch(PRIMARY_TOUCH, self.last_x, self.last_y);
        }
    }

    /// Last position seen while touching
    pub fn last_position(&self) -> (i32, i32) {
        (self.last_x, self.last_y)
    }
}
