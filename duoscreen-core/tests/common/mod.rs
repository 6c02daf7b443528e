//! Shared helpers for window integration tests

#![allow(dead_code)]

use duoscreen_core::input::{PadAxis, PadButton, TouchId};
use duoscreen_core::traits::{InputSink, InputSource, WindowEvents};
use duoscreen_core::{PlatformConfig, Window};
use duoscreen_hal::{NativeLayout, NativeSize};
use duoscreen_hal_sim::{SimApplet, SimDisplay, SimInput, SimStick};

pub type SimWindow = Window<SimDisplay, SimInput, SimApplet, SimStick>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down(TouchId, i32, i32),
    Up(TouchId, i32, i32),
}

/// Sink that records every call in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub buttons: Vec<(PadButton, bool)>,
    pub axes: Vec<(PadAxis, f32, f32, f64)>,
    pub touches: Vec<TouchEvent>,
    pub touch_mode: Option<bool>,
    pub raw_mode: Option<bool>,
    pub source: Option<InputSource>,
}

impl RecordingSink {
    pub fn input_updates(&self) -> usize {
        self.buttons.len() + self.axes.len() + self.touches.len()
    }

    pub fn last_axis(&self, axis: PadAxis) -> Option<(f32, f32)> {
        self.axes
            .iter()
            .rev()
            .find(|(a, ..)| *a == axis)
            .map(|(_, x, y, _)| (*x, *y))
    }

    pub fn clear(&mut self) {
        self.buttons.clear();
        self.axes.clear();
        self.touches.clear();
    }
}

impl InputSink for RecordingSink {
    fn set_button(&mut self, button: PadButton, pressed: bool) {
        self.buttons.push((button, pressed));
    }

    fn set_axis(&mut self, axis: PadAxis, x: f32, y: f32, delta: f64) {
        self.axes.push((axis, x, y, delta));
    }

    fn add_touch(&mut self, id: TouchId, x: i32, y: i32) {
        self.touches.push(TouchEvent::Down(id, x, y));
    }

    fn remove_touch(&mut self, id: TouchId, x: i32, y: i32) {
        self.touches.push(TouchEvent::Up(id, x, y));
    }

    fn set_touch_mode(&mut self, enabled: bool) {
        self.touch_mode = Some(enabled);
    }

    fn set_raw_mode(&mut self, enabled: bool) {
        self.raw_mode = Some(enabled);
    }

    fn set_source(&mut self, source: InputSource) {
        self.source = Some(source);
    }
}

/// Window event recorder
#[derive(Debug, Default)]
pub struct RecordingEvents {
    pub closing: u32,
    pub texts: Vec<String>,
}

impl WindowEvents for RecordingEvents {
    fn closing(&mut self) {
        self.closing += 1;
    }

    fn text_changed(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }
}

/// Window over the real panel sizes
pub fn sim_window(stick: SimStick) -> SimWindow {
    Window::init(
        SimDisplay::new(),
        SimInput::new(),
        SimApplet::running(),
        stick,
        PlatformConfig::default(),
    )
    .expect("sim display init")
}

/// Window whose panels are both `width` x `height` native pixels
pub fn tiny_window(width: u16, height: u16) -> SimWindow {
    let size = NativeSize::new(width, height);
    let display = SimDisplay::with_layout(NativeLayout {
        top: size,
        bottom: size,
    });
    Window::init(
        display,
        SimInput::new(),
        SimApplet::running(),
        SimStick::missing(),
        PlatformConfig::default(),
    )
    .expect("sim display init")
}
