//! Analog stick normalization
//!
//! Circle pads rarely report exactly zero at rest, so small readings are
//! snapped to zero before scaling. Stick Y grows upward; engine Y grows
//! downward.

use duoscreen_hal::CirclePosition;

use crate::config::PlatformConfig;

/// Abstract pad axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PadAxis {
    /// Fed by the extra stick (when present)
    Left,
    /// Fed by the primary circle pad
    Right,
}

impl PadAxis {
    pub fn index(self) -> usize {
        match self {
            PadAxis::Left => 0,
            PadAxis::Right => 1,
        }
    }
}

/// Dead-zone and scale applied to raw stick readings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisNormalizer {
    dead_zone: u16,
    scale: f32,
}

impl AxisNormalizer {
    pub fn new(dead_zone: u16, scale: f32) -> Self {
        Self { dead_zone, scale }
    }

    pub fn from_config(config: &PlatformConfig) -> Self {
        Self::new(config.axis_dead_zone, config.axis_scale)
    }

    /// Snap a raw component to zero inside the dead zone
    pub fn dead_zone(&self, value: i16) -> i32 {
        let value = i32::from(value);
        if value.unsigned_abs() <= u32::from(self.dead_zone) {
            0
        } else {
            value
        }
    }

    /// Convert a raw reading to engine axis units
    ///
    /// Returns `(x, y)` with Y inverted.
    pub fn normalize(&self, pos: CirclePosition) -> (f32, f32) {
        let dx = self.dead_zone(pos.dx);
        let dy = self.dead_zone(pos.dy);
        // Negate as integer so a centered stick gives +0.0, not -0.0
        (dx as f32 / self.scale, (-dy) as f32 / self.scale)
    }
}

impl Default for AxisNormalizer {
    fn default() -> Self {
        Self::from_config(&PlatformConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_zone_boundary() {
        let n = AxisNormalizer::default();
        assert_eq!(n.dead_zone(16), 0);
        assert_eq!(n.dead_zone(-16), 0);
        assert_eq!(n.dead_zone(17), 17);
        assert_eq!(n.dead_zone(-17), -17);
    }

    #[test]
    fn test_scale_and_invert() {
        let n = AxisNormalizer::default();
        assert_eq!(n.normalize(CirclePosition::new(80, 40)), (10.0, -5.0));
        assert_eq!(n.normalize(CirclePosition::new(-156, -156)), (-19.5, 19.5));
    }

    #[test]
    fn test_rest_is_positive_zero() {
        let n = AxisNormalizer::default();
        let (x, y) = n.normalize(CirclePosition::new(3, -5));
        assert_eq!((x, y), (0.0, 0.0));
        assert!(x.is_sign_positive());
        assert!(y.is_sign_positive());
    }

    #[test]
    fn test_components_independent() {
        let n = AxisNormalizer::default();
        assert_eq!(n.normalize(CirclePosition::new(10, 64)), (0.0, -8.0));
        assert_eq!(n.normalize(CirclePosition::new(64, 10)), (8.0, 0.0));
    }

    #[test]
    fn test_extreme_readings() {
        let n = AxisNormalizer::default();
        let (x, y) = n.normalize(CirclePosition::new(i16::MIN, i16::MIN));
        assert_eq!(x, -4096.0);
        assert_eq!(y, 4096.0);
    }
}
