//! Simulated applet manager

use duoscreen_hal::SystemApplet;

/// Applet that keeps running until told to exit
#[derive(Debug, Default)]
pub struct SimApplet {
    /// Frames left before the exit request, `None` = run forever
    frames_left: Option<u32>,
    polls: u32,
}

impl SimApplet {
    /// Applet that never asks to exit
    pub fn running() -> Self {
        Self::default()
    }

    /// Applet that reports `frames` more running frames, then exit
    pub fn exit_after(frames: u32) -> Self {
        Self {
            frames_left: Some(frames),
            polls: 0,
        }
    }

    /// Ask to exit from the next poll on
    pub fn request_exit(&mut self) {
        self.frames_left = Some(0);
    }

    /// Number of `main_loop` calls so far
    pub fn poll_count(&self) -> u32 {
        self.polls
    }
}

impl SystemApplet for SimApplet {
    fn main_loop(&mut self) -> bool {
        self.polls += 1;
        match self.frames_left {
            None => true,
            Some(0) => false,
            Some(ref mut n) => {
                *n -= 1;
                true
            }
        }
    }
}
