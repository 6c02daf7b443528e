//! Window event sink

/// Receiver for window-level events
pub trait WindowEvents {
    /// The window is about to close (OS exit request or explicit close)
    fn closing(&mut self);

    /// The keyboard overlay confirmed new text
    fn text_changed(&mut self, text: &str);
}
