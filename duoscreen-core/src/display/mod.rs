//! Display geometry and mode selection
//!
//! The engine renders into one logical landscape window. Which physical
//! panel backs it is decided by the display mode.

pub mod geometry;
pub mod mode;

pub use geometry::{DisplayGeometry, ScreenGeometry};
pub use mode::{DisplayMode, DisplayState};
