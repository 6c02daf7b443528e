//! Engine-side pixel buffers

use alloc::vec::Vec;

use crate::error::PlatformError;

/// Bytes per logical pixel
pub const BITMAP_BYTES_PER_PIXEL: usize = 4;

/// Packed 32-bit color
///
/// Stored as `0xAARRGGBB`, i.e. bytes B, G, R, A in little-endian memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct BitmapCol(pub u32);

impl BitmapCol {
    pub const BLACK: BitmapCol = BitmapCol::new(0, 0, 0, 255);
    pub const WHITE: BitmapCol = BitmapCol::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        BitmapCol((b as u32) | ((g as u32) << 8) | ((r as u32) << 16) | ((a as u32) << 24))
    }

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

/// Rectangle in logical (landscape, top-left origin) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn right(&self) -> u32 {
        u32::from(self.x) + u32::from(self.width)
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> u32 {
        u32::from(self.y) + u32::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered
    pub fn area(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Intersect with `[0, width) x [0, height)`
    pub fn clip(&self, width: u16, height: u16) -> Rect {
        let right = self.right().min(u32::from(width));
        let bottom = self.bottom().min(u32::from(height));
        if u32::from(self.x) >= right || u32::from(self.y) >= bottom {
            return Rect::new(self.x.min(width), self.y.min(height), 0, 0);
        }
        // right <= width fits in u16
        Rect::new(
            self.x,
            self.y,
            (right - u32::from(self.x)) as u16,
            (bottom - u32::from(self.y)) as u16,
        )
    }
}

/// Row-major, top-left origin pixel buffer owned by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u16,
    height: u16,
    scan0: Vec<BitmapCol>,
}

impl Bitmap {
    /// Allocate a zeroed (transparent black) bitmap
    pub fn try_new(width: u16, height: u16) -> Result<Self, PlatformError> {
        let len = usize::from(width) * usize::from(height);
        let mut scan0 = Vec::new();
        scan0
            .try_reserve_exact(len)
            .map_err(|_| PlatformError::OutOfMemory)?;
        scan0.resize(len, BitmapCol::default());
        Ok(Self {
            width,
            height,
            scan0,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whole-bitmap rectangle
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Size of the pixel storage in bytes
    pub fn byte_len(&self) -> usize {
        self.scan0.len() * BITMAP_BYTES_PER_PIXEL
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    /// Get a pixel, `None` outside the bitmap
    pub fn pixel(&self, x: u16, y: u16) -> Option<BitmapCol> {
        self.index(x, y).map(|i| self.scan0[i])
    }

    /// Set a pixel; writes outside the bitmap are ignored
    pub fn set_pixel(&mut self, x: u16, y: u16, color: BitmapCol) {
        if let Some(i) = self.index(x, y) {
            self.scan0[i] = color;
        }
    }

    /// One row of pixels
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row(&self, y: u16) -> &[BitmapCol] {
        let start = usize::from(y) * usize::from(self.width);
        &self.scan0[start..start + usize::from(self.width)]
    }

    pub fn pixels(&self) -> &[BitmapCol] {
        &self.scan0
    }

    pub fn pixels_mut(&mut self) -> &mut [BitmapCol] {
        &mut self.scan0
    }

    /// Fill the whole bitmap with one color
    pub fn fill(&mut self, color: BitmapCol) {
        self.scan0.fill(color);
    }
}
