//! In-memory HAL for the duoscreen window backend
//!
//! This crate provides host-side implementations of the shared
//! `duoscreen-hal` traits:
//!
//! - Framebuffers backed by byte vectors with the real panel dimensions
//! - Scripted HID frames (buttons, circle pad, touch)
//! - An extra stick that can be present or missing
//! - An applet that asks to exit after a number of frames
//! - A keyboard overlay with a canned answer

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod applet;
pub mod display;
pub mod input;
pub mod keyboard;
pub mod stick;

pub use applet::SimApplet;
pub use display::SimDisplay;
pub use input::{InputFrame, SimInput};
pub use keyboard::SimKeyboard;
pub use stick::SimStick;
