//! HID input abstractions
//!
//! Buttons are reported as 32-bit masks using the bit layout of the
//! console's HID shared memory (see [`keys`]).

/// Button bit assignments in the HID key masks
pub mod keys {
    pub const A: u32 = 1 << 0;
    pub const B: u32 = 1 << 1;
    pub const SELECT: u32 = 1 << 2;
    pub const START: u32 = 1 << 3;
    pub const DRIGHT: u32 = 1 << 4;
    pub const DLEFT: u32 = 1 << 5;
    pub const DUP: u32 = 1 << 6;
    pub const DDOWN: u32 = 1 << 7;
    pub const R: u32 = 1 << 8;
    pub const L: u32 = 1 << 9;
    pub const X: u32 = 1 << 10;
    pub const Y: u32 = 1 << 11;
    pub const ZL: u32 = 1 << 14;
    pub const ZR: u32 = 1 << 15;
    /// Set while the digitizer is being touched
    pub const TOUCH: u32 = 1 << 20;
    pub const CSTICK_RIGHT: u32 = 1 << 24;
    pub const CSTICK_LEFT: u32 = 1 << 25;
    pub const CSTICK_UP: u32 = 1 << 26;
    pub const CSTICK_DOWN: u32 = 1 << 27;
    pub const CPAD_RIGHT: u32 = 1 << 28;
    pub const CPAD_LEFT: u32 = 1 << 29;
    pub const CPAD_UP: u32 = 1 << 30;
    pub const CPAD_DOWN: u32 = 1 << 31;
}

/// Raw analog stick displacement
///
/// Roughly ±156 at full deflection, rarely exactly zero at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CirclePosition {
    pub dx: i16,
    pub dy: i16,
}

impl CirclePosition {
    pub const fn new(dx: i16, dy: i16) -> Self {
        Self { dx, dy }
    }
}

/// Raw digitizer reading in bottom-screen pixels
///
/// Only meaningful while [`keys::TOUCH`] is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPosition {
    pub px: u16,
    pub py: u16,
}

impl TouchPosition {
    pub const fn new(px: u16, py: u16) -> Self {
        Self { px, py }
    }
}

/// HID input service
///
/// `scan` latches one frame of input; every other method reports the
/// latched frame.
pub trait InputService {
    /// Latch the current hardware state
    fn scan(&mut self);

    /// Buttons that went down this frame
    fn keys_down(&self) -> u32;

    /// Buttons held since before this frame
    fn keys_held(&self) -> u32;

    /// Buttons that went up this frame
    fn keys_up(&self) -> u32;

    /// Primary circle pad displacement
    fn circle_pad(&self) -> CirclePosition;

    /// Digitizer position
    fn touch(&self) -> TouchPosition;

    /// Buttons currently down, whether new this frame or held
    fn keys_pressed(&self) -> u32 {
        self.keys_down() | self.keys_held()
    }
}
