//! Logical-to-native coordinate rotation
//!
//! ```text
//!  logical (landscape)            native (portrait, as stored)
//!  x →                            byte 0 ... one native row = w pixels
//!  ┌──────────────┐               ┌──────┐
//! y│              │               │      │ logical x = native row
//! ↓│              │      ──►      │      │ logical y = w - bias - column
//!  └──────────────┘               │      │
//!                                 └──────┘
//! ```
//!
//! Increasing logical x walks down one native row; increasing logical y
//! walks backward across a row. The bias is the `-1` of
//! `(w - 1 - y + x * w) * 3`. It is kept adjustable because it has never
//! been confirmed against hardware; the default reproduces the transform
//! bit-for-bit.

use duoscreen_hal::{NativeSize, NATIVE_BYTES_PER_PIXEL};

/// Rotation transform for one native framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotatedLayout {
    native_width: u16,
    native_height: u16,
    bias: u16,
}

impl RotatedLayout {
    pub fn new(native: NativeSize, bias: u16) -> Self {
        Self {
            native_width: native.width,
            native_height: native.height,
            bias,
        }
    }

    /// Landscape width (the native height)
    pub fn logical_width(&self) -> u16 {
        self.native_height
    }

    /// Landscape height (the native width)
    pub fn logical_height(&self) -> u16 {
        self.native_width
    }

    /// Native buffer size in bytes
    pub fn buffer_len(&self) -> usize {
        NativeSize::new(self.native_width, self.native_height).buffer_len()
    }

    /// Byte offset of logical pixel `(x, y)` in the native buffer
    ///
    /// `None` when the transformed pixel does not fit in the buffer.
    pub fn offset(&self, x: u16, y: u16) -> Option<usize> {
        let w = usize::from(self.native_width);
        let column = w
            .checked_sub(usize::from(self.bias))?
            .checked_sub(usize::from(y))?;
        let offset = (column + usize::from(x) * w) * NATIVE_BYTES_PER_PIXEL;
        if offset + NATIVE_BYTES_PER_PIXEL > self.buffer_len() {
            return None;
        }
        Some(offset)
    }
}
