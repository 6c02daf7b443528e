//! Framebuffer presentation
//!
//! The engine draws into a landscape, row-major [`Bitmap`]. The panels
//! scan out a portrait, BGR8 buffer, so every pixel is rotated on its way
//! to the screen.

pub mod bitmap;
pub mod presenter;
pub mod rotation;

pub use bitmap::{Bitmap, BitmapCol, Rect, BITMAP_BYTES_PER_PIXEL};
pub use presenter::Presenter;
pub use rotation::RotatedLayout;
