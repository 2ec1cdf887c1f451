//! The seam between the frame driver and whatever gets drawn.
//!
//! The engine owns the camera and lighting; scene content plugs in as
//! [`RenderStage`] implementations. Each frame the engine opens one
//! render pass, hands every stage the pass plus the shared bind
//! groups, and the stage records its own pipeline and draw calls.

use crate::gpu::render_context::RenderContext;

/// Bind groups shared with every stage in a frame.
pub struct FrameBindGroups<'a> {
    /// Camera uniform bind group (view, projection, position, front).
    pub camera: &'a wgpu::BindGroup,
    /// Lighting uniform bind group.
    pub lighting: &'a wgpu::BindGroup,
}

/// Everything a stage needs to build its pipelines.
///
/// Handed out once at registration time; stages create their pipeline
/// layouts against the shared bind group layouts so the engine can set
/// the matching groups at draw time.
pub struct StageContext<'a> {
    /// Device for resource creation.
    pub device: &'a wgpu::Device,
    /// Queue for initial uploads.
    pub queue: &'a wgpu::Queue,
    /// Color format the pass renders into.
    pub surface_format: wgpu::TextureFormat,
    /// Depth format of the shared depth buffer.
    pub depth_format: wgpu::TextureFormat,
    /// Layout of the camera bind group (group 0 by convention).
    pub camera_layout: &'a wgpu::BindGroupLayout,
    /// Layout of the lighting bind group (group 1 by convention).
    pub lighting_layout: &'a wgpu::BindGroupLayout,
}

/// A piece of scene content drawn inside the engine's render pass.
pub trait RenderStage {
    /// Record this stage's draw calls.
    ///
    /// The pass already has the color and depth attachments set; the
    /// stage binds its pipeline, sets the shared bind groups it needs,
    /// and draws.
    fn render(&mut self, pass: &mut wgpu::RenderPass<'_>, binds: &FrameBindGroups<'_>);

    /// React to a surface resize. Most stages have no size-dependent
    /// resources, so the default does nothing.
    fn resize(&mut self, _context: &RenderContext) {}
}
