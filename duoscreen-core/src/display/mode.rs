//! Display mode controller
//!
//! Two absorbing states. The 3D mode puts the logical window on the top
//! screen (the in-game view); the 2D mode puts it on the bottom screen
//! (the launcher). Every entry is unconditional and idempotent.

use duoscreen_hal::Screen;

use super::geometry::DisplayGeometry;

/// Application-selected display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Window on the top screen
    Mode3D,
    /// Window on the bottom screen
    Mode2D,
}

impl DisplayMode {
    /// Screen that backs the logical window in this mode
    pub fn window_screen(self) -> Screen {
        match self {
            DisplayMode::Mode3D => Screen::Top,
            DisplayMode::Mode2D => Screen::Bottom,
        }
    }

    /// Screen that backs the alt surface in this mode
    pub fn alt_screen(self) -> Screen {
        self.window_screen().other()
    }
}

/// Which screen backs the window, and the resulting widths
///
/// Only widths are tracked: both panels are 240 logical pixels tall, and
/// the presenter takes heights from the native framebuffer at blit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    active_screen: Screen,
    logical_width: u16,
    alt_width: u16,
    mode: DisplayMode,
}

impl DisplayState {
    /// Initial state after display init (3D mode)
    pub fn new(geometry: &DisplayGeometry) -> Self {
        let mut state = Self {
            active_screen: Screen::Top,
            logical_width: 0,
            alt_width: 0,
            mode: DisplayMode::Mode3D,
        };
        state.enter_3d(geometry);
        state
    }

    /// Bind the window to the top screen
    pub fn enter_3d(&mut self, geometry: &DisplayGeometry) {
        self.logical_width = geometry.top.width;
        self.alt_width = geometry.bottom.width;
        self.mode = DisplayMode::Mode3D;
        self.active_screen = Screen::Top;
    }

    /// Bind the window to the bottom screen
    pub fn enter_2d(&mut self, geometry: &DisplayGeometry) {
        self.logical_width = geometry.bottom.width;
        self.alt_width = geometry.top.width;
        self.mode = DisplayMode::Mode2D;
        self.active_screen = Screen::Bottom;
    }

    /// Enter the given mode
    pub fn enter(&mut self, mode: DisplayMode, geometry: &DisplayGeometry) {
        match mode {
            DisplayMode::Mode3D => self.enter_3d(geometry),
            DisplayMode::Mode2D => self.enter_2d(geometry),
        }
    }

    /// Screen the presenter draws to
    pub fn active_screen(&self) -> Screen {
        self.active_screen
    }

    /// Width of the logical window
    pub fn logical_width(&self) -> u16 {
        self.logical_width
    }

    /// Width of the alt surface
    pub fn alt_width(&self) -> u16 {
        self.alt_width
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }
}
