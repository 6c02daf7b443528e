//! Framebuffer presenter
//!
//! Single-buffered: pixels are written straight into the buffer being
//! scanned out, then flushed. There is no vsync wait, so tearing is
//! possible.

use duoscreen_hal::{DisplayService, Screen, NATIVE_BYTES_PER_PIXEL};

use super::bitmap::{Bitmap, Rect};
use super::rotation::RotatedLayout;
use crate::config::PlatformConfig;

/// Blits logical bitmaps to a native screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Presenter {
    rotation_bias: u16,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::from_config(&PlatformConfig::default())
    }
}

impl Presenter {
    pub fn new(rotation_bias: u16) -> Self {
        Self { rotation_bias }
    }

    pub fn from_config(config: &PlatformConfig) -> Self {
        Self::new(config.rotation_bias)
    }

    /// Copy `rect` of `bitmap` to `screen`
    ///
    /// The rectangle is clipped to the bitmap. Returns the number of pixels
    /// written.
    pub fn present<D: DisplayService>(
        &self,
        display: &mut D,
        screen: Screen,
        rect: Rect,
        bitmap: &Bitmap,
    ) -> usize {
        display.set_double_buffering(screen, false);

        let written = {
            let fb = display.framebuffer(screen);
            let layout = RotatedLayout::new(fb.size(), self.rotation_bias);
            blit(&layout, fb.pixels, rect, bitmap)
        };

        display.flush_buffers();
        trace!("Presented {} pixels to {:?}", written, screen);
        written
    }
}

/// Write `rect` of `bitmap` into a native BGR8 buffer
///
/// `rect` is clipped to the bitmap. Pixels whose rotated position falls
/// outside `dst` are skipped. Alpha is discarded.
fn blit(layout: &RotatedLayout, dst: &mut [u8], rect: Rect, bitmap: &Bitmap) -> usize {
    let rect = rect.clip(bitmap.width(), bitmap.height());
    let mut written = 0;

    for y in rect.y..rect.y + rect.height {
        let row = bitmap.row(y);
        for x in rect.x..rect.x + rect.width {
            let Some(offset) = layout.offset(x, y) else {
                continue;
            };
            let Some(out) = dst.get_mut(offset..offset + NATIVE_BYTES_PER_PIXEL) else {
                continue;
            };
            let color = row[usize::from(x)];
            out[0] = color.b();
            out[1] = color.g();
            out[2] = color.r();
            written += 1;
        }
    }

    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::BitmapCol;
    use duoscreen_hal::{DisplayError, NativeFramebuffer, NativeLayout, NativeSize};

    struct MockDisplay {
        size: NativeSize,
        buf: [u8; 48],
        double_buffered: bool,
        flushes: u32,
    }

    impl MockDisplay {
        fn new_4x4() -> Self {
            Self {
                size: NativeSize::new(4, 4),
                buf: [0xEE; 48],
                double_buffered: true,
                flushes: 0,
            }
        }
    }

    impl DisplayService for MockDisplay {
        fn init(&mut self) -> Result<NativeLayout, DisplayError> {
            Ok(NativeLayout {
                top: self.size,
                bottom: self.size,
            })
        }

        fn set_double_buffering(&mut self, _screen: Screen, enabled: bool) {
            self.double_buffered = enabled;
        }

        fn framebuffer(&mut self, _screen: Screen) -> NativeFramebuffer<'_> {
            NativeFramebuffer::new(&mut self.buf, self.size.width, self.size.height)
        }

        fn flush_buffers(&mut self) {
            self.flushes += 1;
        }
    }

    fn four_colors() -> Bitmap {
        let mut bmp = Bitmap::try_new(2, 2).unwrap();
        bmp.set_pixel(0, 0, BitmapCol::new(0x10, 0x11, 0x12, 0xF0));
        bmp.set_pixel(1, 0, BitmapCol::new(0x20, 0x21, 0x22, 0xF1));
        bmp.set_pixel(0, 1, BitmapCol::new(0x30, 0x31, 0x32, 0xF2));
        bmp.set_pixel(1, 1, BitmapCol::new(0x40, 0x41, 0x42, 0xF3));
        bmp
    }

    #[test]
    fn test_two_by_two_blit() {
        let mut display = MockDisplay::new_4x4();
        let bmp = four_colors();

        let written = Presenter::default().present(&mut display, Screen::Top, bmp.bounds(), &bmp);

        assert_eq!(written, 4);
        // (4 - 1 - y + 4x) * 3
        assert_eq!(display.buf[9..12], [0x12, 0x11, 0x10]); // (0,0)
        assert_eq!(display.buf[21..24], [0x22, 0x21, 0x20]); // (1,0)
        assert_eq!(display.buf[6..9], [0x32, 0x31, 0x30]); // (0,1)
        assert_eq!(display.buf[18..21], [0x42, 0x41, 0x40]); // (1,1)

        // Everything else untouched, no alpha byte written
        let touched = [6..9, 9..12, 18..21, 21..24];
        for (i, byte) in display.buf.iter().enumerate() {
            if !touched.iter().any(|r| r.contains(&i)) {
                assert_eq!(*byte, 0xEE, "byte {} modified", i);
            }
        }
    }

    #[test]
    fn test_single_buffered_and_flushed() {
        let mut display = MockDisplay::new_4x4();
        let bmp = four_colors();

        Presenter::default().present(&mut display, Screen::Bottom, bmp.bounds(), &bmp);

        assert!(!display.double_buffered);
        assert_eq!(display.flushes, 1);
    }

    #[test]
    fn test_partial_rect() {
        let mut display = MockDisplay::new_4x4();
        let bmp = four_colors();

        let written =
            Presenter::default().present(&mut display, Screen::Top, Rect::new(1, 1, 1, 1), &bmp);

        assert_eq!(written, 1);
        assert_eq!(display.buf[18..21], [0x42, 0x41, 0x40]);
        assert_eq!(display.buf[9..12], [0xEE, 0xEE, 0xEE]);
    }

    #[test]
    fn test_rect_clipped_to_bitmap() {
        let mut display = MockDisplay::new_4x4();
        let bmp = four_colors();

        let written =
            Presenter::default().present(&mut display, Screen::Top, Rect::new(1, 0, 50, 50), &bmp);

        assert_eq!(written, 2);
    }

    #[test]
    fn test_bitmap_larger_than_screen() {
        let mut display = MockDisplay::new_4x4();
        let mut bmp = Bitmap::try_new(6, 6).unwrap();
        bmp.fill(BitmapCol::WHITE);

        let written = Presenter::default().present(&mut display, Screen::Top, bmp.bounds(), &bmp);

        // Only the 4x4 logical area maps into the native buffer
        assert_eq!(written, 16);
        assert!(display.buf.iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn test_blit_clips_oversized_rect() {
        let layout = RotatedLayout::new(NativeSize::new(4, 4), 1);
        let mut buf = [0u8; 48];
        let bmp = four_colors();

        let written = blit(&layout, &mut buf, Rect::new(1, 1, u16::MAX, u16::MAX), &bmp);
        assert_eq!(written, 1);
        assert_eq!(buf[18..21], [0x42, 0x41, 0x40]);

        let written = blit(&layout, &mut buf, Rect::new(u16::MAX, u16::MAX, u16::MAX, 1), &bmp);
        assert_eq!(written, 0);
    }

    #[test]
    fn test_zero_bias_skips_overflowing_pixels() {
        let mut display = MockDisplay::new_4x4();
        let mut bmp = Bitmap::try_new(4, 4).unwrap();
        bmp.fill(BitmapCol::WHITE);

        let written = Presenter::new(0).present(&mut display, Screen::Top, bmp.bounds(), &bmp);

        // (4 - 0 - 0 + 3*4) * 3 = 48 is past the end
        assert_eq!(written, 15);
    }
}
