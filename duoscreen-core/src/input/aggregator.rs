//! Per-frame input aggregation
//!
//! Reads buttons, touch and both sticks once per frame and writes the
//! normalized result into an input sink. The extra stick is probed once;
//! if it is missing the left axis is never written.

use duoscreen_hal::{ExtraStick, InputService};

use super::axis::{AxisNormalizer, PadAxis};
use super::buttons::apply_buttons;
use super::touch::TouchTracker;
use crate::config::PlatformConfig;
use crate::traits::InputSink;

/// Input aggregator
pub struct InputAggregator<S> {
    stick: S,
    /// Extra stick service running
    stick_active: bool,
    touch: TouchTracker,
    normalizer: AxisNormalizer,
}

impl<S: ExtraStick> InputAggregator<S> {
    /// Create an aggregator, probing the extra stick once
    pub fn new(mut stick: S, config: &PlatformConfig) -> Self {
        let stick_active = match stick.init() {
            Ok(()) => {
                info!("Extra stick available");
                true
            }
            Err(e) => {
                warn!("Extra stick unavailable: {:?}", e);
                false
            }
        };

        Self {
            stick,
            stick_active,
            touch: TouchTracker::new(),
            normalizer: AxisNormalizer::from_config(config),
        }
    }

    /// Whether the extra stick was detected at startup
    pub fn has_extra_stick(&self) -> bool {
        self.stick_active
    }

    /// The extra stick service
    pub fn stick(&self) -> &S {
        &self.stick
    }

    /// Touch contact state
    pub fn touch(&self) -> &TouchTracker {
        &self.touch
    }

    /// Process one frame of input
    ///
    /// `delta` is the frame time in seconds, passed through to the axes.
    pub fn tick<I, K>(&mut self, input: &mut I, delta: f64, sink: &mut K)
    where
        I: InputService,
        K: InputSink,
    {
        input.scan();

        let mods = input.keys_pressed();
        apply_buttons(mods, sink);

        self.touch.update(mods, input.keys_up(), input.touch(), sink);

        let (x, y) = self.normalizer.normalize(input.circle_pad());
        sink.set_axis(PadAxis::Right, x, y, delta);

        if self.stick_active {
            self.stick.scan();
            let (x, y) = self.normalizer.normalize(self.stick.read());
            sink.set_axis(PadAxis::Left, x, y, delta);
        }
    }

    /// Stop the extra stick service if it was started
    pub fn shutdown(&mut self) {
        if self.stick_active {
            self.stick.exit();
            self.stick_active = false;
            debug!("Extra stick stopped");
        }
    }
}
