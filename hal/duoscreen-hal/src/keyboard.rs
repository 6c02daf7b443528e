//! Software keyboard abstractions
//!
//! The keyboard overlay is an OS applet: it takes over both screens and
//! blocks the caller until the user presses one of its buttons.

use heapless::String;

/// Capacity in bytes of keyboard input and output text
pub const KEYBOARD_TEXT_LEN: usize = 600;

/// Keyboard layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyboardLayout {
    /// Full QWERTY layout
    Western,
    /// Digits only
    Numpad,
}

/// How typed characters are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PasswordMode {
    /// Characters shown as typed
    None,
    /// Characters masked immediately
    Hide,
    /// Each character shown briefly, then masked
    HideDelay,
}

/// Button the overlay was dismissed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyboardButton {
    Left,
    Middle,
    /// Rightmost button, used as the confirm button
    Right,
    /// Overlay closed without a button (HOME menu, power off)
    None,
}

impl KeyboardButton {
    /// Check if this is the confirm button
    pub fn is_confirm(&self) -> bool {
        matches!(self, KeyboardButton::Right)
    }
}

/// Parameters for one keyboard session
#[derive(Debug, Clone, Copy)]
pub struct KeyboardRequest<'a> {
    /// Layout to show
    pub layout: KeyboardLayout,
    /// Number of buttons along the bottom edge (1-3)
    pub button_count: u8,
    /// Text pre-filled in the edit box
    pub initial_text: &'a str,
    /// Greyed-out hint shown when the box is empty
    pub hint: &'a str,
    /// Label of the confirm button
    pub confirm_label: &'a str,
    /// Password masking
    pub password: PasswordMode,
    /// Allow newlines in the text
    pub multiline: bool,
}

/// On-device keyboard overlay
pub trait SoftKeyboard {
    /// Show the overlay and block until it is dismissed
    ///
    /// The edited text is written to `output`; it is only meaningful when the
    /// returned button is the confirm button.
    fn input_text(
        &mut self,
        request: &KeyboardRequest<'_>,
        output: &mut String<KEYBOARD_TEXT_LEN>,
    ) -> KeyboardButton;
}
