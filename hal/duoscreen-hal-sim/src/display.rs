//! Framebuffer-backed display

use alloc::vec;
use alloc::vec::Vec;

use duoscreen_hal::{
    DisplayError, DisplayService, NativeFramebuffer, NativeLayout, NativeSize, Screen,
};

/// Physical size of the top panel
pub const TOP_NATIVE: NativeSize = NativeSize::new(240, 400);

/// Physical size of the bottom panel
pub const BOTTOM_NATIVE: NativeSize = NativeSize::new(240, 320);

/// Simulated pair of panels
pub struct SimDisplay {
    layout: NativeLayout,
    top: Vec<u8>,
    bottom: Vec<u8>,
    initialized: bool,
    fail_init: bool,
    double_buffering: [bool; 2],
    flushes: u32,
}

impl Default for SimDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDisplay {
    /// Create a display with the real panel dimensions
    pub fn new() -> Self {
        Self::with_layout(NativeLayout {
            top: TOP_NATIVE,
            bottom: BOTTOM_NATIVE,
        })
    }

    /// Create a display with custom panel dimensions
    pub fn with_layout(layout: NativeLayout) -> Self {
        Self {
            layout,
            top: vec![0; layout.top.buffer_len()],
            bottom: vec![0; layout.bottom.buffer_len()],
            initialized: false,
            fail_init: false,
            // Page flipping is on after init on real hardware
            double_buffering: [true; 2],
            flushes: 0,
        }
    }

    /// Create a display whose graphics init fails
    pub fn failing() -> Self {
        let mut display = Self::new();
        display.fail_init = true;
        display
    }

    /// Raw bytes of a screen's framebuffer
    pub fn pixels(&self, screen: Screen) -> &[u8] {
        match screen {
            Screen::Top => &self.top,
            Screen::Bottom => &self.bottom,
        }
    }

    /// Fill a screen's framebuffer with one byte value
    pub fn fill(&mut self, screen: Screen, value: u8) {
        match screen {
            Screen::Top => self.top.fill(value),
            Screen::Bottom => self.bottom.fill(value),
        }
    }

    /// Whether page flipping is enabled for a screen
    pub fn double_buffering(&self, screen: Screen) -> bool {
        self.double_buffering[screen_index(screen)]
    }

    /// Number of `flush_buffers` calls so far
    pub fn flush_count(&self) -> u32 {
        self.flushes
    }

    /// Whether `init` has succeeded and `exit` has not been called
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

fn screen_index(screen: Screen) -> usize {
    match screen {
        Screen::Top => 0,
        Screen::Bottom => 1,
    }
}

impl DisplayService for SimDisplay {
    fn init(&mut self) -> Result<NativeLayout, DisplayError> {
        if self.fail_init {
            return Err(DisplayError::InitFailed);
        }
        self.initialized = true;
        Ok(self.layout)
    }

    fn set_double_buffering(&mut self, screen: Screen, enabled: bool) {
        self.double_buffering[screen_index(screen)] = enabled;
    }

    fn framebuffer(&mut self, screen: Screen) -> NativeFramebuffer<'_> {
        let size = self.layout.size(screen);
        let pixels = match screen {
            Screen::Top => &mut self.top,
            Screen::Bottom => &mut self.bottom,
        };
        NativeFramebuffer::new(pixels, size.width, size.height)
    }

    fn flush_buffers(&mut self) {
        self.flushes += 1;
    }

    fn exit(&mut self) {
        self.initialized = false;
    }
}
