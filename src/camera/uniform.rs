use glam::Mat4;

use crate::camera::core::Camera;

/// Caller-side perspective parameters.
///
/// The camera itself only tracks `zoom` (the vertical fov in degrees);
/// aspect and clip planes belong to whoever owns the output surface, so
/// they live here and are combined with the camera per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Projection for a surface of the given pixel dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            znear,
            zfar,
        }
    }

    /// Update the aspect ratio for a resized surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Perspective matrix with the given vertical fov in degrees
    /// (typically the camera's current zoom).
    ///
    /// `perspective_rh` already uses the [0, 1] depth range (wgpu/Vulkan
    /// convention).
    #[must_use]
    pub fn matrix(&self, fovy_deg: f32) -> Mat4 {
        Mat4::perspective_rh(
            fovy_deg.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            aspect: 4.0 / 3.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the per-frame camera state.
///
/// View and projection are uploaded separately (not premultiplied) so
/// shading stages can reconstruct view-space positions; `position` and
/// `front` feed lighting terms such as the camera-collocated spotlight.
pub struct CameraUniform {
    /// View matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Projection matrix, column-major.
    pub proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees (the camera's zoom).
    pub fovy: f32,
    /// Camera forward direction.
    pub front: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Identity matrices, origin position, -Z forward.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: 45.0,
            front: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }

    /// Refresh every field from the camera and projection's current state.
    pub fn update(&mut self, camera: &Camera, projection: &Projection) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.proj = projection.matrix(camera.zoom()).to_cols_array_2d();
        self.position = camera.position().to_array();
        self.fovy = camera.zoom();
        self.front = camera.front().to_array();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn uniform_is_tightly_packed_for_gpu() {
        // Two mat4s plus two padded vec4s; WGSL expects exactly this size.
        assert_eq!(size_of::<CameraUniform>(), 160);
        assert_eq!(align_of::<CameraUniform>(), 4);
    }

    #[test]
    fn update_reflects_camera_state() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        camera.process_zoom(15.0);
        let projection = Projection::new(1600, 1200, 0.1, 100.0);

        let mut uniform = CameraUniform::new();
        uniform.update(&camera, &projection);

        assert_eq!(uniform.position, [0.0, 0.0, 3.0]);
        assert_eq!(uniform.fovy, 30.0);
        assert!((uniform.front[2] + 1.0).abs() < 1e-5);
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(uniform.proj, projection.matrix(30.0).to_cols_array_2d());
    }

    #[test]
    fn projection_tracks_zoom_as_fovy() {
        let projection = Projection::new(800, 600, 0.1, 100.0);
        let narrow = projection.matrix(1.0);
        let wide = projection.matrix(45.0);
        // Narrower fov scales view-space extents harder.
        assert!(narrow.col(0).x > wide.col(0).x);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut projection = Projection::new(1600, 1200, 0.1, 100.0);
        assert!((projection.aspect - 4.0 / 3.0).abs() < 1e-6);
        projection.resize(1920, 1080);
        assert!((projection.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn zero_height_resize_does_not_poison_aspect() {
        let mut projection = Projection::new(1600, 1200, 0.1, 100.0);
        projection.resize(800, 0);
        assert!(projection.aspect.is_finite());
    }
}
