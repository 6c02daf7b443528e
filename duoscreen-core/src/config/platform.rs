//! Platform configuration

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw stick units treated as "centered"
pub const DEFAULT_AXIS_DEAD_ZONE: u16 = 16;

/// Divisor from raw stick units to engine axis units
pub const DEFAULT_AXIS_SCALE: f32 = 8.0;

/// Constant subtracted in the rotation transform `(w - bias - y + x*w)`
pub const DEFAULT_ROTATION_BIAS: u16 = 1;

/// DPI-style scale reported to the engine for both axes
pub const DEFAULT_DISPLAY_SCALE: f32 = 0.5;

/// Upper bound on the postcard encoding of [`PlatformConfig`]
pub const MAX_CONFIG_SIZE: usize = 32;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Axis scale is zero, negative, NaN or infinite
    InvalidAxisScale,
    /// Display scale is zero, negative, NaN or infinite
    InvalidDisplayScale,
    /// Rotation bias outside 0..=1
    InvalidRotationBias,
    /// Serialization failed (buffer too small)
    Encode,
    /// Stored bytes are not a valid configuration
    Decode,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::InvalidAxisScale => "axis scale must be finite and positive",
            ConfigError::InvalidDisplayScale => "display scale must be finite and positive",
            ConfigError::InvalidRotationBias => "rotation bias must be 0 or 1",
            ConfigError::Encode => "failed to encode configuration",
            ConfigError::Decode => "failed to decode configuration",
        };
        f.write_str(msg)
    }
}

/// Platform tunables
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlatformConfig {
    /// Stick readings with `|v| <= axis_dead_zone` become 0
    pub axis_dead_zone: u16,
    /// Stick readings are divided by this before reaching the engine
    pub axis_scale: f32,
    /// The `-1` term of the framebuffer rotation
    pub rotation_bias: u16,
    /// Scale reported in the display info
    pub display_scale: f32,
    /// Put the input layer in touch mode on the first frame
    pub touch_ui: bool,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            axis_dead_zone: DEFAULT_AXIS_DEAD_ZONE,
            axis_scale: DEFAULT_AXIS_SCALE,
            rotation_bias: DEFAULT_ROTATION_BIAS,
            display_scale: DEFAULT_DISPLAY_SCALE,
            touch_ui: true,
        }
    }
}

impl PlatformConfig {
    /// Check the configuration for values the backend cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.axis_scale.is_finite() || self.axis_scale <= 0.0 {
            return Err(ConfigError::InvalidAxisScale);
        }
        if !self.display_scale.is_finite() || self.display_scale <= 0.0 {
            return Err(ConfigError::InvalidDisplayScale);
        }
        if self.rotation_bias > 1 {
            return Err(ConfigError::InvalidRotationBias);
        }
        Ok(())
    }

    /// Encode into `buf` as postcard binary data
    ///
    /// Returns the used part of `buf`.
    #[cfg(feature = "serde")]
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Encode)
    }

    /// Decode and validate a configuration stored with [`Self::to_slice`]
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }
}
