//! Standalone walkthrough window backed by winit.
//!
//! The viewer owns the event loop, translates winit events into
//! [`InputEvent`]s, and drives the engine's advance/render cycle. Scene
//! content is registered as deferred stage constructors that run once
//! the GPU exists.
//!
//! ```no_run
//! # use roam::viewer::Viewer;
//! Viewer::builder()
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{sync::Arc, time::Instant};

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    engine::{RoamCommand, RoamEngine},
    error::RoamError,
    input::{InputEvent, InputProcessor},
    options::Options,
    stage::{RenderStage, StageContext},
};

/// Deferred stage constructor, run once the GPU exists.
type StageConstructor = Box<dyn FnOnce(&StageContext<'_>) -> Box<dyn RenderStage>>;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Options,
    title: Option<String>,
    stages: Vec<StageConstructor>,
}

impl ViewerBuilder {
    /// Builder with default options and no stages.
    fn new() -> Self {
        Self {
            options: Options::default(),
            title: None,
            stages: Vec::new(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set the window title, overriding the one in the options.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Register scene content. The constructor runs after GPU startup
    /// with the engine's formats and bind group layouts; stages draw in
    /// registration order.
    #[must_use]
    pub fn with_stage(
        mut self,
        build: impl FnOnce(&StageContext<'_>) -> Box<dyn RenderStage> + 'static,
    ) -> Self {
        self.stages.push(Box::new(build));
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options;
        if let Some(title) = self.title {
            options.display.title = title;
        }
        Viewer {
            options,
            stages: self.stages,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that walks a camera through registered scene
/// content.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    stages: Vec<StageConstructor>,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window
    /// is closed.
    ///
    /// # Errors
    ///
    /// Returns [`RoamError`] if the event loop cannot be created or
    /// exits abnormally.
    pub fn run(self) -> Result<(), RoamError> {
        let event_loop =
            EventLoop::new().map_err(|e| RoamError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let processor =
            InputProcessor::with_bindings(self.options.keybindings.clone());
        let mut app = ViewerApp {
            window: None,
            engine: None,
            processor,
            last_frame_time: Instant::now(),
            options: self.options,
            pending_stages: self.stages,
            cursor_captured: false,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| RoamError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<RoamEngine>,
    processor: InputProcessor,
    last_frame_time: Instant,
    options: Options,
    pending_stages: Vec<StageConstructor>,
    cursor_captured: bool,
}

impl ViewerApp {
    /// Grab or release the cursor for mouse-look.
    fn set_capture(&mut self, captured: bool) {
        let Some(window) = &self.window else {
            return;
        };
        if captured {
            // Locked is unsupported on some platforms; Confined is the
            // fallback.
            if let Err(e) = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
            {
                log::warn!("cursor grab unavailable: {e}");
            }
            window.set_cursor_visible(false);
            self.processor.reset_cursor();
        } else {
            if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                log::warn!("cursor release failed: {e}");
            }
            window.set_cursor_visible(true);
        }
        self.cursor_captured = captured;
    }

    /// Route a command to the shell or the engine.
    fn apply_command(&mut self, command: RoamCommand, event_loop: &ActiveEventLoop) {
        match command {
            RoamCommand::ToggleCapture => self.set_capture(!self.cursor_captured),
            RoamCommand::Exit => event_loop.exit(),
            other => {
                if let Some(engine) = &mut self.engine {
                    engine.execute(other);
                }
            }
        }
    }

    /// Feed one event through the processor and apply any command.
    fn dispatch(&mut self, event: InputEvent, event_loop: &ActiveEventLoop) {
        if let Some(command) = self.processor.handle_event(event) {
            self.apply_command(command, event_loop);
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.options.display.title.clone())
            .with_inner_size(LogicalSize::new(
                self.options.display.width,
                self.options.display.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let size = (inner.width.max(1), inner.height.max(1));

        let engine_result = pollster::block_on(RoamEngine::new(
            window.clone(),
            size,
            self.options.clone(),
        ));
        let mut engine = match engine_result {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        // Stages build against the engine's formats and layouts.
        let stages: Vec<_> = {
            let context = engine.stage_context();
            self.pending_stages
                .drain(..)
                .map(|build| build(&context))
                .collect()
        };
        for stage in stages {
            engine.add_stage(stage);
        }

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);

        if self.options.display.capture_cursor {
            self.set_capture(true);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(engine) = &mut self.engine {
                    engine.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;

                if let Some(engine) = &mut self.engine {
                    engine.advance(self.processor.movement(), dt);
                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated
                            | wgpu::SurfaceError::Lost,
                        ) => {
                            if let Some(w) = &self.window {
                                let inner = w.inner_size();
                                engine.resize(inner.width, inner.height);
                            }
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                // Free cursor movement never turns the camera.
                if self.cursor_captured {
                    self.dispatch(
                        InputEvent::CursorMoved {
                            x: position.x as f32,
                            y: position.y as f32,
                        },
                        event_loop,
                    );
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.dispatch(
                    InputEvent::Scroll {
                        delta: scroll_delta,
                    },
                    event_loop,
                );
            }

            WindowEvent::KeyboardInput { event, .. } => {
                // OS key repeat would re-trigger discrete actions.
                if event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.dispatch(
                    InputEvent::Key {
                        code: format!("{code:?}"),
                        pressed: event.state == ElementState::Pressed,
                    },
                    event_loop,
                );
            }

            WindowEvent::Focused(focused) => {
                // Release events may never arrive for keys held across a
                // focus change.
                if focused {
                    if self.cursor_captured {
                        self.processor.reset_cursor();
                    }
                } else {
                    self.processor.release_all();
                }
            }

            _ => (),
        }
    }
}
