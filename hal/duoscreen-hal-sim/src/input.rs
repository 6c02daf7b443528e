//! Scripted HID input

use alloc::collections::VecDeque;

use duoscreen_hal::{CirclePosition, InputService, TouchPosition};

/// One frame of raw HID state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputFrame {
    pub down: u32,
    pub held: u32,
    pub up: u32,
    pub circle: CirclePosition,
    pub touch: TouchPosition,
}

impl InputFrame {
    /// Frame with nothing pressed and sticks at rest
    pub fn idle() -> Self {
        Self::default()
    }

    /// Set buttons that went down this frame
    pub fn down(mut self, mask: u32) -> Self {
        self.down = mask;
        self
    }

    /// Set buttons held from earlier frames
    pub fn held(mut self, mask: u32) -> Self {
        self.held = mask;
        self
    }

    /// Set buttons released this frame
    pub fn up(mut self, mask: u32) -> Self {
        self.up = mask;
        self
    }

    /// Set the circle pad displacement
    pub fn circle(mut self, dx: i16, dy: i16) -> Self {
        self.circle = CirclePosition::new(dx, dy);
        self
    }

    /// Set the digitizer reading
    pub fn touch(mut self, px: u16, py: u16) -> Self {
        self.touch = TouchPosition::new(px, py);
        self
    }
}

/// HID service replaying queued frames
///
/// Each `scan` latches the next queued frame; once the queue is empty the
/// idle frame is latched.
#[derive(Debug, Default)]
pub struct SimInput {
    queue: VecDeque<InputFrame>,
    current: InputFrame,
    scans: u32,
}

impl SimInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a frame for a later `scan`
    pub fn push(&mut self, frame: InputFrame) {
        self.queue.push_back(frame);
    }

    /// Number of `scan` calls so far
    pub fn scan_count(&self) -> u32 {
        self.scans
    }

    /// Frames still waiting to be latched
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl InputService for SimInput {
    fn scan(&mut self) {
        self.scans += 1;
        self.current = self.queue.pop_front().unwrap_or_default();
    }

    fn keys_down(&self) -> u32 {
        self.current.down
    }

    fn keys_held(&self) -> u32 {
        self.current.held
    }

    fn keys_up(&self) -> u32 {
        self.current.up
    }

    fn circle_pad(&self) -> CirclePosition {
        self.current.circle
    }

    fn touch(&self) -> TouchPosition {
        self.current.touch
    }
}
