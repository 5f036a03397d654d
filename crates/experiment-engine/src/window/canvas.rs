use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::device::{surface_config, Gpu, SurfaceErrorAction, SurfaceInit};
use crate::input::{InputEvent, Key, KeyState};

use super::state::CanvasState;

/// Window + surface configuration.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    pub title: String,
    /// Initial framebuffer size in physical pixels.
    pub size: PhysicalSize<u32>,
    pub resizable: bool,
    pub surface: SurfaceInit,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            title: "Experiment".to_string(),
            size: PhysicalSize::new(800, 600),
            resizable: true,
            surface: SurfaceInit::default(),
        }
    }
}

/// A native window and the wgpu surface presenting into it.
///
/// The surface borrows the window, so it can never outlive it. Dropping the
/// canvas releases the surface first, then the window.
#[self_referencing]
pub struct Canvas {
    state: CanvasState,

    window: Window,

    #[borrows(window)]
    #[covariant]
    surface: wgpu::Surface<'this>,
}

impl Canvas {
    /// Opens the window and creates its surface.
    ///
    /// The surface is left unconfigured until a device exists; see [`Canvas::configure`].
    pub fn create(
        event_loop: &ActiveEventLoop,
        instance: &wgpu::Instance,
        config: &CanvasConfig,
    ) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.size)
            .with_resizable(config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let size = window.inner_size();
        log::debug!(
            "opened window \"{}\" at {}x{}",
            config.title,
            size.width,
            size.height
        );

        CanvasTryBuilder {
            state: CanvasState::new(size, config.surface.clone()),
            window,
            surface_builder: |window: &Window| {
                instance
                    .create_surface(window)
                    .context("failed to create wgpu surface")
            },
        }
        .try_build()
    }

    pub fn window_id(&self) -> WindowId {
        self.borrow_window().id()
    }

    pub fn surface(&self) -> &wgpu::Surface<'_> {
        self.borrow_surface()
    }

    /// Current framebuffer size as `(width, height)` in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        let size = self.borrow_window().inner_size();
        (size.width, size.height)
    }

    pub fn state(&self) -> &CanvasState {
        self.borrow_state()
    }

    /// Applies an input event, reconfiguring the surface when the event needs it.
    pub fn handle(&mut self, gpu: Option<&Gpu>, event: InputEvent) {
        let config = self.with_state_mut(|s| s.handle(event));

        if let (Some(config), Some(gpu)) = (config, gpu) {
            self.borrow_surface().configure(gpu.device(), &config);
        }
    }

    /// Handles a key transition. Escape on release requests close.
    pub fn key_event(&mut self, key: Key, state: KeyState) {
        self.with_state_mut(|s| s.key_event(key, state));
    }

    pub fn close_requested(&self) -> bool {
        self.borrow_state().close_requested()
    }

    /// Configures the surface for `gpu` from the surface capabilities.
    pub fn configure(&mut self, gpu: &Gpu) -> Result<()> {
        let size = self.physical_size();
        let caps = self.borrow_surface().get_capabilities(gpu.adapter());

        let config = surface_config(&caps, self.borrow_state().surface_init(), size)
            .context("no supported surface formats")?;

        self.borrow_surface().configure(gpu.device(), &config);
        log::debug!(
            "configured surface {:?} {}x{} ({:?})",
            config.format,
            config.width,
            config.height,
            config.present_mode
        );

        self.with_state_mut(|s| s.set_configured(PhysicalSize::new(size.0, size.1), config));

        Ok(())
    }

    /// Presents the current surface texture as-is.
    ///
    /// Does nothing while the canvas is not presentable (unconfigured or
    /// minimized). Lost/outdated surfaces are reconfigured and transient errors
    /// skip the frame; only fatal errors are returned.
    ///
    /// Returns whether a frame was presented.
    pub fn present(&self, gpu: &Gpu) -> Result<bool> {
        if !self.borrow_state().presentable() {
            return Ok(false);
        }

        let frame = match self.borrow_surface().get_current_texture() {
            Ok(frame) => frame,
            Err(err) => {
                return match SurfaceErrorAction::from_error(&err) {
                    SurfaceErrorAction::Reconfigure => {
                        if self.reconfigure(gpu) {
                            log::debug!("surface {err}; reconfigured");
                        }
                        Ok(false)
                    }
                    SurfaceErrorAction::SkipFrame => {
                        log::debug!("skipping frame: {err}");
                        Ok(false)
                    }
                    SurfaceErrorAction::Fatal => {
                        Err(err).context("failed to acquire surface texture")
                    }
                };
            }
        };

        self.borrow_window().pre_present_notify();
        frame.present();
        Ok(true)
    }

    fn reconfigure(&self, gpu: &Gpu) -> bool {
        match self.borrow_state().reconfigure_target() {
            Some(config) => {
                self.borrow_surface().configure(gpu.device(), config);
                true
            }
            None => false,
        }
    }
}
