//! Extra analog stick abstractions
//!
//! The second stick is either built in (newer models) or provided by a
//! clip-on accessory. Its service may be missing entirely.

use crate::input::CirclePosition;

/// Errors from the extra stick service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StickError {
    /// No stick hardware or service on this device
    Unavailable,
    /// Service returned an error result code
    Service(i32),
}

/// Extra analog stick service
pub trait ExtraStick {
    /// Start the service
    fn init(&mut self) -> Result<(), StickError>;

    /// Latch the current stick state
    fn scan(&mut self);

    /// Latched stick displacement
    fn read(&self) -> CirclePosition;

    /// Stop the service
    fn exit(&mut self);
}
