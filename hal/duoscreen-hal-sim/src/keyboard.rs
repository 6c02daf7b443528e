//! Simulated keyboard overlay

use heapless::String;

use duoscreen_hal::{
    KeyboardButton, KeyboardLayout, KeyboardRequest, PasswordMode, SoftKeyboard, KEYBOARD_TEXT_LEN,
};

/// Owned copy of the last request shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub layout: KeyboardLayout,
    pub button_count: u8,
    pub initial_text: String<KEYBOARD_TEXT_LEN>,
    pub hint: String<KEYBOARD_TEXT_LEN>,
    pub confirm_label: String<16>,
    pub password: PasswordMode,
    pub multiline: bool,
}

/// Keyboard that answers every session with the same button and text
#[derive(Debug)]
pub struct SimKeyboard {
    button: KeyboardButton,
    text: String<KEYBOARD_TEXT_LEN>,
    last: Option<RecordedRequest>,
    sessions: u32,
}

impl SimKeyboard {
    /// Keyboard where the user types `text` and confirms
    pub fn confirming(text: &str) -> Self {
        Self::answering(KeyboardButton::Right, text)
    }

    /// Keyboard where the user types `text` and cancels
    pub fn cancelling(text: &str) -> Self {
        Self::answering(KeyboardButton::Left, text)
    }

    /// Keyboard dismissed with `button` after typing `text`
    ///
    /// Text longer than the keyboard buffer is truncated at a character
    /// boundary.
    pub fn answering(button: KeyboardButton, text: &str) -> Self {
        Self {
            button,
            text: truncated(text),
            last: None,
            sessions: 0,
        }
    }

    /// The last request shown, if any
    pub fn last_request(&self) -> Option<&RecordedRequest> {
        self.last.as_ref()
    }

    /// Number of sessions so far
    pub fn session_count(&self) -> u32 {
        self.sessions
    }
}

fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

impl SoftKeyboard for SimKeyboard {
    fn input_text(
        &mut self,
        request: &KeyboardRequest<'_>,
        output: &mut String<KEYBOARD_TEXT_LEN>,
    ) -> KeyboardButton {
        self.sessions += 1;
        self.last = Some(RecordedRequest {
            layout: request.layout,
            button_count: request.button_count,
            initial_text: truncated(request.initial_text),
            hint: truncated(request.hint),
            confirm_label: truncated(request.confirm_label),
            password: request.password,
            multiline: request.multiline,
        });

        output.clear();
        // Same capacity, cannot overflow
        let _ = output.push_str(&self.text);
        self.button
    }
}
