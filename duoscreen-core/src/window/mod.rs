//! Window facade
//!
//! Owns every platform service and presents the dual-screen device to the
//! engine as a single fullscreen landscape window. The window is backed by
//! whichever screen the current display mode selects; the other screen is
//! the "alt" window.

pub mod keyboard;

pub use keyboard::{KeyboardArgs, KeyboardKind};

use alloc::string::String;

use duoscreen_hal::{DisplayService, ExtraStick, InputService, SystemApplet};

use crate::config::PlatformConfig;
use crate::display::{DisplayGeometry, DisplayMode, DisplayState};
use crate::error::PlatformError;
use crate::input::InputAggregator;
use crate::present::{Bitmap, Presenter, Rect};
use crate::traits::{InputSink, InputSource, WindowEvents};

/// Result of one event-processing tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Input was processed
    Running,
    /// The OS asked the application to exit; no input was processed
    Closing,
}

/// Window presentation state
///
/// The window always covers the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowState {
    Fullscreen,
}

/// Display properties reported to the engine
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayInfo {
    pub width: u16,
    pub height: u16,
    pub scale_x: f32,
    pub scale_y: f32,
}

/// Main window properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowInfo {
    pub width: u16,
    pub height: u16,
    pub focused: bool,
    /// Cleared once the OS requests exit
    pub exists: bool,
}

/// Secondary screen properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AltWindowInfo {
    pub width: u16,
    pub height: u16,
}

/// The platform window
pub struct Window<D, I, A, S> {
    display: D,
    input: I,
    applet: A,
    aggregator: InputAggregator<S>,
    presenter: Presenter,
    config: PlatformConfig,

    geometry: DisplayGeometry,
    state: DisplayState,
    display_info: DisplayInfo,
    main: WindowInfo,
    alt: AltWindowInfo,

    /// Sink has been switched to touch/gamepad mode
    input_configured: bool,
}

impl<D, I, A, S> Window<D, I, A, S>
where
    D: DisplayService,
    I: InputService,
    A: SystemApplet,
    S: ExtraStick,
{
    /// Bring up graphics and input
    ///
    /// Starts in 3D mode with the window on the top screen. The extra stick is
    /// probed once here and never again.
    pub fn init(
        mut display: D,
        input: I,
        applet: A,
        stick: S,
        config: PlatformConfig,
    ) -> Result<Self, PlatformError> {
        config.validate()?;

        let geometry = match DisplayGeometry::init(&mut display) {
            Ok(g) => g,
            Err(e) => {
                error!("Graphics init failed: {:?}", e);
                return Err(e.into());
            }
        };
        let state = DisplayState::new(&geometry);

        let display_info = DisplayInfo {
            width: geometry.top.width,
            height: geometry.top.height,
            scale_x: config.display_scale,
            scale_y: config.display_scale,
        };
        let main = WindowInfo {
            width: geometry.top.width,
            height: geometry.top.height,
            focused: true,
            exists: true,
        };
        let alt = AltWindowInfo {
            width: geometry.bottom.width,
            height: geometry.bottom.height,
        };

        Ok(Self {
            display,
            input,
            applet,
            aggregator: InputAggregator::new(stick, &config),
            presenter: Presenter::from_config(&config),
            config,
            geometry,
            state,
            display_info,
            main,
            alt,
            input_configured: false,
        })
    }

    /// Release platform resources held by the window
    ///
    /// Stops the extra stick, then shuts graphics down.
    pub fn free(&mut self) {
        self.aggregator.shutdown();
        self.display.exit();
        debug!("Window freed");
    }

    /// Back the window with the bottom screen
    ///
    /// The requested size is ignored; the screen's own size is used.
    pub fn create_2d(&mut self, _width: u16, _height: u16) {
        self.switch_mode(DisplayMode::Mode2D);
    }

    /// Back the window with the top screen
    ///
    /// The requested size is ignored; the screen's own size is used.
    pub fn create_3d(&mut self, _width: u16, _height: u16) {
        self.switch_mode(DisplayMode::Mode3D);
    }

    fn switch_mode(&mut self, mode: DisplayMode) {
        self.state.enter(mode, &self.geometry);

        let width = self.state.logical_width();
        self.display_info.width = width;
        self.main.width = width;
        self.alt.width = self.state.alt_width();

        debug!("Window on {:?}, width {}", self.state.active_screen(), width);
    }

    /// Run one frame of event processing
    ///
    /// Checks for an OS exit request first. When one is pending the window
    /// stops existing, `closing` is raised once and no input is read.
    pub fn process_events<K, E>(&mut self, delta: f64, sink: &mut K, events: &mut E) -> TickOutcome
    where
        K: InputSink,
        E: WindowEvents,
    {
        if !self.main.exists {
            return TickOutcome::Closing;
        }

        if !self.applet.main_loop() {
            info!("Exit requested by system");
            self.main.exists = false;
            events.closing();
            return TickOutcome::Closing;
        }

        if !self.input_configured {
            if self.config.touch_ui {
                sink.set_touch_mode(true);
            }
            sink.set_source(InputSource::Gamepad);
            self.input_configured = true;
        }

        self.aggregator.tick(&mut self.input, delta, sink);
        TickOutcome::Running
    }

    /// Ask the engine to close the window
    pub fn request_close<E: WindowEvents>(&mut self, events: &mut E) {
        events.closing();
    }

    /// Allocate an engine-side pixel buffer
    pub fn alloc_framebuffer(&self, width: u16, height: u16) -> Result<Bitmap, PlatformError> {
        Bitmap::try_new(width, height)
    }

    /// Release a buffer from [`Window::alloc_framebuffer`]
    pub fn free_framebuffer(&self, bitmap: Bitmap) {
        drop(bitmap);
    }

    /// Present `rect` of `bitmap` on the active screen
    ///
    /// Returns the number of pixels written.
    pub fn draw_framebuffer(&mut self, rect: Rect, bitmap: &Bitmap) -> usize {
        let screen = self.state.active_screen();
        self.presenter.present(&mut self.display, screen, rect, bitmap)
    }

    pub fn window_state(&self) -> WindowState {
        WindowState::Fullscreen
    }

    pub fn enter_fullscreen(&mut self) -> Result<(), PlatformError> {
        Ok(())
    }

    pub fn exit_fullscreen(&mut self) -> Result<(), PlatformError> {
        Ok(())
    }

    pub fn is_obscured(&self) -> bool {
        false
    }

    pub fn show(&mut self) {}

    pub fn set_size(&mut self, _width: u16, _height: u16) {}

    pub fn set_title(&mut self, _title: &str) {}

    pub fn set_cursor_position(&mut self, _x: i32, _y: i32) {}

    /// Route pointer movement as raw deltas
    pub fn enable_raw_mouse<K: InputSink>(&mut self, sink: &mut K) {
        sink.set_raw_mode(true);
    }

    pub fn update_raw_mouse(&mut self) {}

    pub fn disable_raw_mouse<K: InputSink>(&mut self, sink: &mut K) {
        sink.set_raw_mode(false);
    }

    pub fn clipboard_get_text(&self) -> Result<String, PlatformError> {
        Err(PlatformError::NotSupported)
    }

    pub fn clipboard_set_text(&mut self, _text: &str) -> Result<(), PlatformError> {
        Err(PlatformError::NotSupported)
    }

    pub fn open_file_dialog(&mut self, _filters: &[&str]) -> Result<(), PlatformError> {
        Err(PlatformError::NotSupported)
    }

    pub fn save_file_dialog(
        &mut self,
        _default_name: &str,
        _filters: &[&str],
    ) -> Result<(), PlatformError> {
        Err(PlatformError::NotSupported)
    }

    /// Show a message to the user
    ///
    /// There is no modal dialog; the message only goes to the log.
    pub fn show_dialog(&mut self, title: &str, msg: &str) {
        info!("{}", title);
        info!("{}", msg);
    }
}

impl<D, I, A, S> Window<D, I, A, S> {
    pub fn geometry(&self) -> &DisplayGeometry {
        &self.geometry
    }

    pub fn display_state(&self) -> &DisplayState {
        &self.state
    }

    pub fn display_info(&self) -> &DisplayInfo {
        &self.display_info
    }

    pub fn main_window(&self) -> &WindowInfo {
        &self.main
    }

    pub fn alt_window(&self) -> &AltWindowInfo {
        &self.alt
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    pub fn aggregator(&self) -> &InputAggregator<S> {
        &self.aggregator
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn applet_mut(&mut self) -> &mut A {
        &mut self.applet
    }
}
