//! Digital button mapping

use duoscreen_hal::input::keys;

use crate::traits::InputSink;

/// Number of abstract pad buttons
pub const BUTTON_COUNT: usize = 14;

/// Abstract gamepad buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PadButton {
    L,
    R,
    A,
    B,
    X,
    Y,
    Start,
    Select,
    Left,
    Right,
    Up,
    Down,
    ZL,
    ZR,
}

impl PadButton {
    /// All buttons, in the order they are written each frame
    pub const ALL: [PadButton; BUTTON_COUNT] = [
        PadButton::L,
        PadButton::R,
        PadButton::A,
        PadButton::B,
        PadButton::X,
        PadButton::Y,
        PadButton::Start,
        PadButton::Select,
        PadButton::Left,
        PadButton::Right,
        PadButton::Up,
        PadButton::Down,
        PadButton::ZL,
        PadButton::ZR,
    ];

    /// HID key bit for this button
    pub fn key_mask(self) -> u32 {
        match self {
            PadButton::L => keys::L,
            PadButton::R => keys::R,
            PadButton::A => keys::A,
            PadButton::B => keys::B,
            PadButton::X => keys::X,
            PadButton::Y => keys::Y,
            PadButton::Start => keys::START,
            PadButton::Select => keys::SELECT,
            PadButton::Left => keys::DLEFT,
            PadButton::Right => keys::DRIGHT,
            PadButton::Up => keys::DUP,
            PadButton::Down => keys::DDOWN,
            PadButton::ZL => keys::ZL,
            PadButton::ZR => keys::ZR,
        }
    }

    /// Position in [`PadButton::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Check if this button is down in a key mask
    pub fn is_set(self, mods: u32) -> bool {
        mods & self.key_mask() != 0
    }
}

/// Write every button's state from a down-or-held key mask
///
/// The mask is authoritative; no debouncing.
pub fn apply_buttons<S: InputSink>(mods: u32, sink: &mut S) {
    for button in PadButton::ALL {
        sink.set_button(button, button.is_set(mods));
    }
}
