//! Simulated extra stick

use alloc::collections::VecDeque;

use duoscreen_hal::{CirclePosition, ExtraStick, StickError};

/// Extra stick that is either attached or missing
#[derive(Debug)]
pub struct SimStick {
    present: bool,
    started: bool,
    queue: VecDeque<CirclePosition>,
    current: CirclePosition,
    scans: u32,
    init_calls: u32,
}

impl SimStick {
    /// Create an attached stick
    pub fn attached() -> Self {
        Self {
            present: true,
            started: false,
            queue: VecDeque::new(),
            current: CirclePosition::default(),
            scans: 0,
            init_calls: 0,
        }
    }

    /// Create a stick whose service fails to start
    pub fn missing() -> Self {
        Self {
            present: false,
            ..Self::attached()
        }
    }

    /// Queue a reading for a later `scan`
    pub fn push(&mut self, dx: i16, dy: i16) {
        self.queue.push_back(CirclePosition::new(dx, dy));
    }

    /// Whether the service is running
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of `scan` calls so far
    pub fn scan_count(&self) -> u32 {
        self.scans
    }

    /// Number of `init` calls so far
    pub fn init_count(&self) -> u32 {
        self.init_calls
    }
}

impl ExtraStick for SimStick {
    fn init(&mut self) -> Result<(), StickError> {
        self.init_calls += 1;
        if !self.present {
            return Err(StickError::Unavailable);
        }
        self.started = true;
        Ok(())
    }

    fn scan(&mut self) {
        self.scans += 1;
        self.current = self.queue.pop_front().unwrap_or_default();
    }

    fn read(&self) -> CirclePosition {
        self.current
    }

    fn exit(&mut self) {
        self.started = false;
    }
}
