//! Duoscreen Hardware Abstraction Layer
//!
//! This crate defines the hardware services the window backend talks to.
//! A console port implements them on top of the system libraries; the
//! `duoscreen-hal-sim` crate implements them in memory for host testing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Engine (game loop, UI, renderer)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  duoscreen-core (window, input, blit)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  duoscreen-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  console port │       │ duoscreen-    │
//! │  (libctru)    │       │   hal-sim     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`display::DisplayService`] - Screen setup and native framebuffers
//! - [`input::InputService`] - Buttons, circle pad and touch digitizer
//! - [`stick::ExtraStick`] - Optional second analog stick accessory
//! - [`applet::SystemApplet`] - OS suspend / exit requests
//! - [`keyboard::SoftKeyboard`] - On-device keyboard overlay

#![no_std]
#![deny(unsafe_code)]

pub mod applet;
pub mod display;
pub mod input;
pub mod keyboard;
pub mod stick;

// Re-export key traits at crate root for convenience
pub use applet::SystemApplet;
pub use display::{
    DisplayError, DisplayService, NativeFramebuffer, NativeLayout, NativeSize, Screen,
    NATIVE_BYTES_PER_PIXEL,
};
pub use input::{CirclePosition, InputService, TouchPosition};
pub use keyboard::{
    KeyboardButton, KeyboardLayout, KeyboardRequest, PasswordMode, SoftKeyboard, KEYBOARD_TEXT_LEN,
};
pub use stick::{ExtraStick, StickError};
