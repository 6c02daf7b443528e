//! Logical screen geometry
//!
//! The panels are portrait devices mounted sideways. The graphics service
//! reports physical sizes (240x400 top, 240x320 bottom); the engine wants
//! landscape sizes, so width and height are deliberately swapped here once
//! and treated as canonical everywhere else.

use duoscreen_hal::{DisplayError, DisplayService, NativeLayout, NativeSize, Screen};

/// Landscape (logical) dimensions of one screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenGeometry {
    pub width: u16,
    pub height: u16,
}

impl ScreenGeometry {
    /// Convert a physical panel size to landscape dimensions
    pub fn from_native(size: NativeSize) -> Self {
        Self {
            width: size.height,
            height: size.width,
        }
    }
}

/// Logical dimensions of both screens, fixed after startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayGeometry {
    pub top: ScreenGeometry,
    pub bottom: ScreenGeometry,
}

impl DisplayGeometry {
    /// Initialize graphics and record both screens' logical dimensions
    ///
    /// A failure here is a fatal startup error for the host.
    pub fn init<D: DisplayService>(display: &mut D) -> Result<Self, DisplayError> {
        let layout = display.init()?;
        let geometry = Self::from_layout(layout);
        info!(
            "Displays: top {}x{}, bottom {}x{}",
            geometry.top.width,
            geometry.top.height,
            geometry.bottom.width,
            geometry.bottom.height
        );
        Ok(geometry)
    }

    /// Build from physical panel sizes
    pub fn from_layout(layout: NativeLayout) -> Self {
        Self {
            top: ScreenGeometry::from_native(layout.top),
            bottom: ScreenGeometry::from_native(layout.bottom),
        }
    }

    /// Get a specific screen's geometry
    pub fn screen(&self, screen: Screen) -> ScreenGeometry {
        match screen {
            Screen::Top => self.top,
            Screen::Bottom => self.bottom,
        }
    }
}
