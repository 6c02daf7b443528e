//! Engine-facing interfaces
//!
//! The backend never owns the engine's input registry or event bus; it
//! writes into them through these traits.

pub mod events;
pub mod input_sink;

pub use events::WindowEvents;
pub use input_sink::{InputSink, InputSource};
