use winit::dpi::PhysicalSize;

use crate::device::SurfaceInit;
use crate::input::{key_action, CanvasAction, InputEvent, Key, KeyState};

/// Main loop state.
///
/// `Closing` is terminal: once entered, the loop never runs another frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LoopState {
    #[default]
    Running,
    Closing,
}

impl LoopState {
    /// Computes the state for the next iteration.
    pub fn advance(self, close_requested: bool) -> Self {
        match self {
            LoopState::Running if close_requested => LoopState::Closing,
            LoopState::Running => LoopState::Running,
            LoopState::Closing => LoopState::Closing,
        }
    }

    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}

/// Window-side state of a `Canvas` that does not touch the window system.
///
/// Holds the close flag, the last known framebuffer size and the active
/// surface configuration. All input dispatch for the canvas goes through
/// [`CanvasState::handle`].
#[derive(Debug)]
pub struct CanvasState {
    surface_init: SurfaceInit,

    /// Last known framebuffer size. May be 0x0 while minimized.
    size: PhysicalSize<u32>,

    /// `None` until the surface is configured.
    config: Option<wgpu::SurfaceConfiguration>,

    close_requested: bool,
}

impl CanvasState {
    pub fn new(size: PhysicalSize<u32>, surface_init: SurfaceInit) -> Self {
        Self {
            surface_init,
            size,
            config: None,
            close_requested: false,
        }
    }

    pub fn surface_init(&self) -> &SurfaceInit {
        &self.surface_init
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Applies an input event.
    ///
    /// Returns the configuration the surface must be reconfigured with, if the
    /// event requires one.
    pub fn handle(&mut self, event: InputEvent) -> Option<wgpu::SurfaceConfiguration> {
        match event {
            InputEvent::Key { key, state } => {
                self.key_event(key, state);
                None
            }
            InputEvent::CloseRequested => {
                self.request_close();
                None
            }
            InputEvent::Resized { width, height } => {
                self.resize(PhysicalSize::new(width, height))
            }
        }
    }

    /// Handles a key transition. Escape on release requests close.
    pub fn key_event(&mut self, key: Key, state: KeyState) {
        if let Some(action) = key_action(key, state) {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: CanvasAction) {
        match action {
            CanvasAction::RequestClose => self.request_close(),
        }
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Records a successful surface configuration made at `size`.
    pub fn set_configured(&mut self, size: PhysicalSize<u32>, config: wgpu::SurfaceConfiguration) {
        self.size = size;
        self.config = Some(config);
    }

    /// Updates the stored size.
    ///
    /// wgpu does not support configuring a surface with a 0x0 size; in that case
    /// no configuration is returned and reconfiguration is deferred.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) -> Option<wgpu::SurfaceConfiguration> {
        self.size = new_size;
        if !self.has_area() {
            return None;
        }

        let config = self.config.as_mut()?;
        config.width = new_size.width;
        config.height = new_size.height;
        Some(config.clone())
    }

    /// Configuration to reapply after a lost/outdated surface, if any can be applied.
    pub fn reconfigure_target(&self) -> Option<&wgpu::SurfaceConfiguration> {
        if !self.has_area() {
            return None;
        }
        self.config.as_ref()
    }

    /// Whether a frame should be acquired this iteration.
    ///
    /// False until the surface is configured and while the window is minimized.
    pub fn presentable(&self) -> bool {
        self.reconfigure_target().is_some()
    }

    fn has_area(&self) -> bool {
        self.size.width > 0 && self.size.height > 0
    }
}
