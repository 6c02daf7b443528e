//! System applet abstractions

/// Operating system applet manager
///
/// The OS can ask the application to suspend or terminate at any time
/// (HOME menu, power button, lid close).
pub trait SystemApplet {
    /// Service pending applet events
    ///
    /// Returns `false` once the application has been asked to exit.
    fn main_loop(&mut self) -> bool;
}
