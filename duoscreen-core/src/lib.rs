//! Board-agnostic window backend for a dual-screen handheld
//!
//! This crate contains all platform logic that does not depend on the
//! actual OS services:
//!
//! - Logical screen geometry and the 2D/3D display mode
//! - Per-frame input aggregation (buttons, sticks, touch)
//! - Rotated framebuffer presentation
//! - The window facade and soft keyboard relay
//! - Platform configuration and error types

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod present;
pub mod traits;
pub mod window;

pub use config::PlatformConfig;
pub use error::PlatformError;
pub use window::{TickOutcome, Window};
