//! Display service abstractions
//!
//! The handheld has two portrait panels mounted rotated 90° counter-clockwise.
//! Every size in this module is a *physical* size: the top panel is 240
//! pixels wide and 400 pixels tall, the bottom panel 240x320.

/// Bytes per pixel of the native framebuffer (BGR8)
pub const NATIVE_BYTES_PER_PIXEL: usize = 3;

/// Physical screen selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Upper (stereoscopic-capable) panel
    Top,
    /// Lower panel with the touch digitizer
    Bottom,
}

impl Screen {
    /// Get the other screen
    pub fn other(self) -> Self {
        match self {
            Screen::Top => Screen::Bottom,
            Screen::Bottom => Screen::Top,
        }
    }
}

/// Physical dimensions of one panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NativeSize {
    /// Pixels along the short (physical width) edge
    pub width: u16,
    /// Pixels along the long (physical height) edge
    pub height: u16,
}

impl NativeSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Size in bytes of a framebuffer with these dimensions
    pub const fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * NATIVE_BYTES_PER_PIXEL
    }
}

/// Physical dimensions of both panels, as reported by graphics init
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NativeLayout {
    pub top: NativeSize,
    pub bottom: NativeSize,
}

impl NativeLayout {
    /// Get the size of a specific screen
    pub fn size(&self, screen: Screen) -> NativeSize {
        match screen {
            Screen::Top => self.top,
            Screen::Bottom => self.bottom,
        }
    }
}

/// Errors from the display service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Graphics subsystem could not be brought up
    InitFailed,
}

/// Borrowed handle to a native framebuffer
///
/// Valid only for the duration of the borrow of the display service. The
/// memory is owned by the hardware; callers write through it and drop it
/// before flushing.
pub struct NativeFramebuffer<'a> {
    /// Raw BGR8 bytes, column-major in logical terms
    pub pixels: &'a mut [u8],
    /// Physical width (short edge)
    pub width: u16,
    /// Physical height (long edge)
    pub height: u16,
}

impl<'a> NativeFramebuffer<'a> {
    pub fn new(pixels: &'a mut [u8], width: u16, height: u16) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Physical dimensions of this framebuffer
    pub fn size(&self) -> NativeSize {
        NativeSize::new(self.width, self.height)
    }
}

/// Display service
///
/// Implementations wrap the console's graphics library. All calls are
/// synchronous.
pub trait DisplayService {
    /// Initialize both screens in BGR8 format
    ///
    /// Returns the physical dimensions of both panels.
    fn init(&mut self) -> Result<NativeLayout, DisplayError>;

    /// Enable or disable page flipping for a screen
    fn set_double_buffering(&mut self, screen: Screen, enabled: bool);

    /// Get the current framebuffer of a screen (left eye for the top panel)
    fn framebuffer(&mut self, screen: Screen) -> NativeFramebuffer<'_>;

    /// Make pending framebuffer writes visible to the display hardware
    fn flush_buffers(&mut self);

    /// Shut the graphics subsystem down
    fn exit(&mut self) {}
}
