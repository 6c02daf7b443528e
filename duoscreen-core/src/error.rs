//! Platform error type

use core::fmt;

use duoscreen_hal::DisplayError;

use crate::config::ConfigError;

/// Errors returned by the window backend
///
/// `NotSupported` marks a capability the device permanently lacks; callers
/// should hide the feature rather than retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// No hardware equivalent (clipboard, file dialogs)
    NotSupported,
    /// Graphics subsystem failure
    Display(DisplayError),
    /// Pixel buffer allocation failed
    OutOfMemory,
    /// Invalid platform configuration
    Config(ConfigError),
}

impl From<DisplayError> for PlatformError {
    fn from(e: DisplayError) -> Self {
        PlatformError::Display(e)
    }
}

impl From<ConfigError> for PlatformError {
    fn from(e: ConfigError) -> Self {
        PlatformError::Config(e)
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::NotSupported => f.write_str("operation not supported on this device"),
            PlatformError::Display(e) => write!(f, "display error: {:?}", e),
            PlatformError::OutOfMemory => f.write_str("out of memory allocating pixel buffer"),
            PlatformError::Config(e) => write!(f, "invalid configuration: {}", e),
        }
    }
}
