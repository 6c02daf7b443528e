//! Configuration types
//!
//! Tunables for input normalization and presentation. With the `serde`
//! feature the configuration can be stored as postcard binary data.

pub mod platform;

pub use platform::*;
