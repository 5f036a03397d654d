use std::time::Duration;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::device::{Gpu, GpuInit};
use crate::input::platform::translate_window_event;
use crate::time::FpsCounter;

use super::canvas::{Canvas, CanvasConfig};
use super::state::{CanvasState, LoopState};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub canvas: CanvasConfig,
    pub gpu: GpuInit,
    /// Minimum time between two FPS log lines.
    pub fps_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            gpu: GpuInit::default(),
            fps_interval: FpsCounter::DEFAULT_INTERVAL,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the canvas, initializes the GPU and presents until the canvas
    /// asks to close.
    ///
    /// Errors raised inside event loop callbacks stop the loop and are
    /// returned from here.
    pub fn run(config: RuntimeConfig) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.finish()
    }
}

struct AppState {
    config: RuntimeConfig,
    instance: wgpu::Instance,

    canvas: Option<Canvas>,
    gpu: Option<Gpu>,

    fps: FpsCounter,
    loop_state: LoopState,
    error: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig) -> Self {
        let instance = Gpu::create_instance(&config.gpu);
        let fps = FpsCounter::new(config.fps_interval);

        Self {
            config,
            instance,
            canvas: None,
            gpu: None,
            fps,
            loop_state: LoopState::Running,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let mut canvas = Canvas::create(event_loop, &self.instance, &self.config.canvas)?;

        let gpu = pollster::block_on(Gpu::new(
            &self.instance,
            canvas.surface(),
            self.config.gpu.clone(),
        ))?;

        canvas.configure(&gpu)?;

        // Setup time is not part of the first FPS sample.
        self.fps.reset();

        self.canvas = Some(canvas);
        self.gpu = Some(gpu);
        Ok(())
    }

    /// One Running iteration: present, count, report.
    fn frame(&mut self) -> Result<()> {
        let (Some(canvas), Some(gpu)) = (self.canvas.as_ref(), self.gpu.as_ref()) else {
            return Ok(());
        };

        // Nothing is rendered yet; the acquired texture is presented unchanged.
        if !canvas.present(gpu)? {
            return Ok(());
        }

        if let Some(sample) = self.fps.tick() {
            log::debug!("{sample}");
        }

        Ok(())
    }

    fn destroy_canvas(&mut self) {
        if release(&mut self.canvas) {
            log::debug!("destroyed canvas");
        }
        self.gpu = None;
    }

    /// Stops the loop and keeps `err` for `Runtime::run` to return.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
        self.loop_state = LoopState::Closing;
        self.destroy_canvas();
        event_loop.exit();
    }

    fn finish(mut self) -> Result<()> {
        self.destroy_canvas();
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.canvas.is_some() || !self.loop_state.is_running() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e.context("initialization failed"));
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };

        if canvas.window_id() != window_id {
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            canvas.handle(self.gpu.as_ref(), ev);
        }
    }

    /// Runs after winit has drained the pending OS events.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let canvas_state = self.canvas.as_ref().map(Canvas::state);

        match next_iteration(&mut self.loop_state, canvas_state) {
            Iteration::Present => {
                event_loop.set_control_flow(ControlFlow::Poll);
                if let Err(e) = self.frame() {
                    self.fail(event_loop, e);
                }
            }
            Iteration::Idle => {
                // Woken again by the next window event (e.g. restore from minimize).
                event_loop.set_control_flow(ControlFlow::Wait);
            }
            Iteration::Close => {
                self.destroy_canvas();
                event_loop.exit();
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.destroy_canvas();
    }
}

/// What one pass of the main loop does.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Iteration {
    /// Present a frame and count it.
    Present,
    /// Running, but there is nothing to present (no canvas yet, or minimized).
    Idle,
    /// Release the canvas and leave the loop.
    Close,
}

/// Advances `loop_state` from the canvas close flag and picks the iteration.
fn next_iteration(loop_state: &mut LoopState, canvas: Option<&CanvasState>) -> Iteration {
    let close_requested = canvas.is_some_and(CanvasState::close_requested);
    *loop_state = loop_state.advance(close_requested);

    match *loop_state {
        LoopState::Closing => Iteration::Close,
        LoopState::Running if canvas.is_some_and(CanvasState::presentable) => Iteration::Present,
        LoopState::Running => Iteration::Idle,
    }
}

/// Drops the value in `slot`, if any. Returns whether something was released.
fn release<T>(slot: &mut Option<T>) -> bool {
    slot.take().is_some()
}
