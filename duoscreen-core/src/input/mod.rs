//! Input aggregation
//!
//! Turns one frame of raw HID state (button masks, two circle pads, the
//! touch digitizer) into button, axis and touch updates on an
//! [`InputSink`](crate::traits::InputSink).

pub mod aggregator;
pub mod axis;
pub mod buttons;
pub mod snapshot;
pub mod touch;

pub use aggregator::InputAggregator;
pub use axis::{AxisNormalizer, PadAxis};
pub use buttons::{PadButton, BUTTON_COUNT};
pub use snapshot::{AxisState, InputSnapshot, TouchPoint};
pub use touch::{TouchId, TouchTracker, PRIMARY_TOUCH};
