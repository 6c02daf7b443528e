//! Soft keyboard relay
//!
//! Maps the engine's text-input request onto the OS keyboard overlay. The
//! overlay blocks until dismissed; only a confirmed session reaches the
//! engine as a `text_changed` event.

use heapless::String;

use duoscreen_hal::{
    DisplayService, ExtraStick, InputService, KeyboardLayout, KeyboardRequest, PasswordMode,
    SoftKeyboard, SystemApplet, KEYBOARD_TEXT_LEN,
};

use super::Window;
use crate::traits::WindowEvents;

/// Overlay buttons: cancel, forgot, confirm
const BUTTON_COUNT: u8 = 3;

/// What kind of text the engine wants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyboardKind {
    Text,
    Number,
    Integer,
    Password,
}

/// Engine-side keyboard request
#[derive(Debug, Clone, Copy)]
pub struct KeyboardArgs<'a> {
    /// Current contents of the edit box
    pub text: &'a str,
    /// Hint shown when empty
    pub placeholder: &'a str,
    pub kind: KeyboardKind,
    /// Confirm button submits rather than inserting a line
    pub send: bool,
    pub multiline: bool,
}

impl<'a> KeyboardArgs<'a> {
    /// Plain text entry with no hint
    pub fn text(text: &'a str) -> Self {
        Self {
            text,
            placeholder: "",
            kind: KeyboardKind::Text,
            send: false,
            multiline: false,
        }
    }
}

impl KeyboardKind {
    pub fn layout(self) -> KeyboardLayout {
        match self {
            KeyboardKind::Number | KeyboardKind::Integer => KeyboardLayout::Numpad,
            KeyboardKind::Text | KeyboardKind::Password => KeyboardLayout::Western,
        }
    }

    pub fn password_mode(self) -> PasswordMode {
        match self {
            KeyboardKind::Password => PasswordMode::HideDelay,
            _ => PasswordMode::None,
        }
    }
}

/// Label for the confirm button
pub fn confirm_label(send: bool) -> &'static str {
    if send {
        "Send"
    } else {
        "Enter"
    }
}

/// Longest prefix of `text` that fits in `max` bytes without splitting a char
pub fn clip_to_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Build the overlay request for `args`
pub fn build_request<'a>(args: &KeyboardArgs<'a>) -> KeyboardRequest<'a> {
    KeyboardRequest {
        layout: args.kind.layout(),
        button_count: BUTTON_COUNT,
        initial_text: clip_to_boundary(args.text, KEYBOARD_TEXT_LEN),
        hint: args.placeholder,
        confirm_label: confirm_label(args.send),
        password: args.kind.password_mode(),
        multiline: args.multiline,
    }
}

impl<D, I, A, S> Window<D, I, A, S>
where
    D: DisplayService,
    I: InputService,
    A: SystemApplet,
    S: ExtraStick,
{
    /// Show the keyboard overlay and block until it is dismissed
    ///
    /// Raises `text_changed` with the edited text only when the confirm
    /// button was pressed.
    pub fn open_keyboard<K, E>(&mut self, keyboard: &mut K, args: &KeyboardArgs<'_>, events: &mut E)
    where
        K: SoftKeyboard,
        E: WindowEvents,
    {
        let request = build_request(args);
        let mut output: String<KEYBOARD_TEXT_LEN> = String::new();

        let button = keyboard.input_text(&request, &mut output);
        debug!("Keyboard closed with {:?}", button);

        if button.is_confirm() {
            events.text_changed(&output);
        }
    }

    /// The overlay owns its text while open
    pub fn set_keyboard_text(&mut self, _text: &str) {}

    /// The overlay closes itself
    pub fn close_keyboard(&mut self) {}
}
