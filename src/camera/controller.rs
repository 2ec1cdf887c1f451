use glam::{Vec2, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::core::Camera;
use crate::camera::uniform::{CameraUniform, Projection};
use crate::gpu::render_context::RenderContext;
use crate::input::keyboard::MovementState;
use crate::options::CameraOptions;

/// Owns a [`Camera`] together with its projection parameters and GPU
/// uniform resources, and applies per-frame input to it.
///
/// The controller is the single mutation point for the camera during a
/// frame: held movement goes through [`advance`](Self::advance), cursor
/// deltas through [`look`](Self::look), scroll through
/// [`zoom`](Self::zoom). After mutations, [`update_gpu`](Self::update_gpu)
/// refreshes the uniform buffer the shading stages bind.
pub struct CameraController {
    /// The camera being driven.
    pub camera: Camera,
    /// Perspective parameters for the output surface.
    pub projection: Projection,
    /// CPU copy of the uniform block.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout for render pipelines.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group binding the uniform buffer.
    pub bind_group: wgpu::BindGroup,

    /// Whether look input clamps pitch to ±89°.
    constrain_pitch: bool,
}

impl CameraController {
    /// Build a controller from camera options, sized to the context's
    /// current surface.
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let mut camera = Camera::new(Vec3::from_array(options.position));
        camera.movement_speed = options.movement_speed;
        camera.mouse_sensitivity = options.mouse_sensitivity;
        camera.set_zoom(options.fov);

        let projection = Projection::new(
            context.config.width,
            context.config.height,
            options.znear,
            options.zfar,
        );

        let mut uniform = CameraUniform::new();
        uniform.update(&camera, &projection);

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some("Camera Bind Group"),
            });

        Self {
            camera,
            projection,
            uniform,
            buffer,
            layout,
            bind_group,
            constrain_pitch: options.constrain_pitch,
        }
    }

    /// Apply a cursor delta (already screen-Y-flipped) as a look rotation.
    pub fn look(&mut self, delta: Vec2) {
        self.camera.process_look(delta.x, delta.y, self.constrain_pitch);
    }

    /// Apply a scroll delta as a zoom change.
    pub fn zoom(&mut self, delta: f32) {
        self.camera.process_zoom(delta);
    }

    /// Apply every held movement direction for this frame.
    ///
    /// One camera displacement per held direction — opposing directions
    /// cancel, perpendicular ones combine into the diagonal speedup the
    /// camera documents.
    pub fn advance(&mut self, movement: &MovementState, dt: f32) {
        for direction in movement.directions() {
            self.camera.process_movement(direction, dt);
        }
    }

    /// Update the projection aspect for a resized surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    /// Refresh the uniform from camera state and upload it.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update(&self.camera, &self.projection);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}
