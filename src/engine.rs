//! The frame driver: GPU context, camera rig, lighting, and the
//! registered render stages, advanced once per frame.

use glam::Vec2;

use crate::camera::controller::CameraController;
use crate::error::RoamError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::{DEPTH_FORMAT, DepthTarget};
use crate::input::keyboard::MovementState;
use crate::lighting::Lighting;
use crate::options::Options;
use crate::stage::{FrameBindGroups, RenderStage, StageContext};
use crate::util::frame_clock::FrameClock;

/// Target FPS limit
const TARGET_FPS: u32 = 300;

// =============================================================================
// Commands
// =============================================================================

/// A discrete action produced by input translation.
///
/// Commands are applied immediately via [`RoamEngine::execute`]; held
/// movement keys are not commands and flow through
/// [`RoamEngine::advance`] instead, because they need the frame's time
/// step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoamCommand {
    /// Turn the camera by a cursor offset, in pixels with up positive.
    Look {
        /// Cursor travel since the previous sample.
        delta: Vec2,
    },
    /// Narrow or widen the field of view. Positive zooms in.
    Zoom {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Toggle cursor capture. Handled by the windowing shell; the
    /// engine ignores it.
    ToggleCapture,
    /// Quit the application. Handled by the windowing shell; the
    /// engine ignores it.
    Exit,
}

// =============================================================================
// Engine
// =============================================================================

/// The core frame driver for first-person scene walkthroughs.
///
/// Owns the wgpu context, the camera rig, the light set, and a list of
/// [`RenderStage`]s supplying scene content.
///
/// # Frame loop
///
/// Each frame, the shell:
/// 1. translates raw input, calling [`execute`](Self::execute) for each
///    command as it arrives,
/// 2. calls [`advance`](Self::advance) with the held-movement state and
///    the frame's time step,
/// 3. calls [`render`](Self::render) to draw and present.
///
/// Call [`resize`](Self::resize) when the window size changes.
pub struct RoamEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    /// Shared depth buffer, kept sized to the surface.
    depth: DepthTarget,
    /// First-person camera and its GPU resources.
    pub camera_controller: CameraController,
    /// Scene lights and their GPU resources.
    pub lighting: Lighting,
    /// Registered scene content, drawn in registration order.
    stages: Vec<Box<dyn RenderStage>>,
    /// Runtime configuration.
    options: Options,
    /// Per-frame timing and FPS tracking.
    frame_clock: FrameClock,
    /// Pass background color.
    clear_color: wgpu::Color,
}

impl RoamEngine {
    /// Bring up the GPU and build the camera and lighting resources.
    ///
    /// # Errors
    ///
    /// Returns [`RoamError`] if GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, RoamError> {
        let context = RenderContext::new(window, size).await?;
        let depth = DepthTarget::new(
            &context.device,
            context.config.width,
            context.config.height,
        );
        let camera_controller = CameraController::new(&context, &options.camera);
        let lighting = Lighting::new(&context, &options.lighting);

        let [r, g, b] = options.display.clear_color;
        let clear_color = wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: 1.0,
        };

        log::debug!(
            "engine up: surface {:?}, {} point lights",
            context.format(),
            lighting.set.points.len()
        );

        Ok(Self {
            context,
            depth,
            camera_controller,
            lighting,
            stages: Vec::new(),
            options,
            frame_clock: FrameClock::new(TARGET_FPS),
            clear_color,
        })
    }

    /// Everything a stage needs to build its pipelines against this
    /// engine's formats and bind group layouts.
    #[must_use]
    pub fn stage_context(&self) -> StageContext<'_> {
        StageContext {
            device: &self.context.device,
            queue: &self.context.queue,
            surface_format: self.context.format(),
            depth_format: DEPTH_FORMAT,
            camera_layout: &self.camera_controller.layout,
            lighting_layout: &self.lighting.layout,
        }
    }

    /// Register scene content. Stages draw in registration order.
    pub fn add_stage(&mut self, stage: Box<dyn RenderStage>) {
        self.stages.push(stage);
    }

    /// Apply one frame of held movement and refresh per-frame GPU state.
    ///
    /// `dt` is the frame's time step in seconds. The spot light is
    /// re-collocated with the camera after movement so the flashlight
    /// never lags a frame behind.
    pub fn advance(&mut self, movement: &MovementState, dt: f32) {
        self.camera_controller.advance(movement, dt);
        self.lighting.follow_camera(&self.camera_controller.camera);
        self.camera_controller.update_gpu(&self.context.queue);
        self.lighting.update_gpu(&self.context.queue);
    }

    /// Apply a discrete command.
    pub fn execute(&mut self, command: RoamCommand) {
        match command {
            RoamCommand::Look { delta } => self.camera_controller.look(delta),
            RoamCommand::Zoom { delta } => self.camera_controller.zoom(delta),
            // Shell-level commands; the engine has no window to act on.
            RoamCommand::ToggleCapture | RoamCommand::Exit => {}
        }
    }

    /// Execute one frame: clear, run every stage, and present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        // Check if we should render based on FPS limit
        if !self.frame_clock.should_render() {
            return Ok(());
        }

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            let binds = FrameBindGroups {
                camera: &self.camera_controller.bind_group,
                lighting: &self.lighting.bind_group,
            };
            for stage in &mut self.stages {
                stage.render(&mut pass, &binds);
            }
        }

        self.context.submit(encoder);
        frame.present();

        self.frame_clock.end_frame();

        Ok(())
    }

    /// Resize the surface, depth buffer, and camera projection to the
    /// new window size. Ignores zero-sized dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.depth.resize(&self.context.device, width, height);
        self.camera_controller.resize(width, height);
        for stage in &mut self.stages {
            stage.resize(&self.context);
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Smoothed frames-per-second estimate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_clock.fps()
    }
}
