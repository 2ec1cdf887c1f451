//! GPU-side mirror of the light set.
//!
//! Plain-old-data structs uploaded as a single uniform buffer. Field
//! order and padding follow WGSL uniform layout rules, so attenuation
//! coefficients ride in the pad slots after each `vec3<f32>`.

use crate::lighting::{DirectionalLight, LightSet, MAX_POINT_LIGHTS, PointLight, SpotLight};

/// Directional light as the shader sees it.
///
/// WGSL layout (auto-padded):
///   direction: vec3<f32>   (offset 0,  align 16)
///   ambient: vec3<f32>     (offset 16, align 16)
///   diffuse: vec3<f32>     (offset 32, align 16)
///   specular: vec3<f32>    (offset 48, align 16)
///   Total: 64 bytes
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuDirectionalLight {
    /// World-space direction the light travels in.
    pub direction: [f32; 3],
    pub(crate) _pad0: f32,
    /// Ambient contribution.
    pub ambient: [f32; 3],
    pub(crate) _pad1: f32,
    /// Diffuse contribution.
    pub diffuse: [f32; 3],
    pub(crate) _pad2: f32,
    /// Specular contribution.
    pub specular: [f32; 3],
    pub(crate) _pad3: f32,
}

/// Point light as the shader sees it.
///
/// The scalar attenuation coefficients fill the pad slots the
/// `vec3<f32>` members would otherwise waste:
///   position: vec3<f32>, constant: f32    (offset 0)
///   ambient: vec3<f32>, linear: f32       (offset 16)
///   diffuse: vec3<f32>, quadratic: f32    (offset 32)
///   specular: vec3<f32>                   (offset 48)
///   Total: 64 bytes
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuPointLight {
    /// World-space position.
    pub position: [f32; 3],
    /// Constant attenuation term.
    pub constant: f32,
    /// Ambient contribution.
    pub ambient: [f32; 3],
    /// Linear attenuation coefficient.
    pub linear: f32,
    /// Diffuse contribution.
    pub diffuse: [f32; 3],
    /// Quadratic attenuation coefficient.
    pub quadratic: f32,
    /// Specular contribution.
    pub specular: [f32; 3],
    pub(crate) _pad: f32,
}

/// Spot light as the shader sees it, same pad-slot packing:
///   position: vec3<f32>, cutoff: f32        (offset 0)
///   direction: vec3<f32>, outer_cutoff: f32 (offset 16)
///   ambient: vec3<f32>, constant: f32       (offset 32)
///   diffuse: vec3<f32>, linear: f32         (offset 48)
///   specular: vec3<f32>, quadratic: f32     (offset 64)
///   Total: 80 bytes
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuSpotLight {
    /// World-space position (the camera position in flashlight mode).
    pub position: [f32; 3],
    /// Cosine of the inner cone angle.
    pub cutoff: f32,
    /// World-space direction (the camera front in flashlight mode).
    pub direction: [f32; 3],
    /// Cosine of the outer cone angle.
    pub outer_cutoff: f32,
    /// Ambient contribution.
    pub ambient: [f32; 3],
    /// Constant attenuation term.
    pub constant: f32,
    /// Diffuse contribution.
    pub diffuse: [f32; 3],
    /// Linear attenuation coefficient.
    pub linear: f32,
    /// Specular contribution.
    pub specular: [f32; 3],
    /// Quadratic attenuation coefficient.
    pub quadratic: f32,
}

/// Full lighting state shared with every shading stage.
/// NOTE: Must match WGSL struct layout exactly (416 bytes)
///
/// WGSL layout (auto-padded):
///   directional: DirectionalLight          (offset 0,   64 bytes)
///   points: array<PointLight, 4>           (offset 64,  256 bytes)
///   spot: SpotLight                        (offset 320, 80 bytes)
///   point_count: u32                       (offset 400)
///   Total: 416 bytes
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// The scene's key light.
    pub directional: GpuDirectionalLight,
    /// Fixed-capacity point light array; only the first
    /// `point_count` entries carry data.
    pub points: [GpuPointLight; MAX_POINT_LIGHTS],
    /// The camera-following spot light.
    pub spot: GpuSpotLight,
    /// Number of live entries in `points`.
    pub point_count: u32,
    pub(crate) _pad: [u32; 3],
}

impl From<&DirectionalLight> for GpuDirectionalLight {
    fn from(light: &DirectionalLight) -> Self {
        Self {
            direction: light.direction.to_array(),
            _pad0: 0.0,
            ambient: light.ambient.to_array(),
            _pad1: 0.0,
            diffuse: light.diffuse.to_array(),
            _pad2: 0.0,
            specular: light.specular.to_array(),
            _pad3: 0.0,
        }
    }
}

impl From<&PointLight> for GpuPointLight {
    fn from(light: &PointLight) -> Self {
        Self {
            position: light.position.to_array(),
            constant: light.constant,
            ambient: light.ambient.to_array(),
            linear: light.linear,
            diffuse: light.diffuse.to_array(),
            quadratic: light.quadratic,
            specular: light.specular.to_array(),
            _pad: 0.0,
        }
    }
}

impl From<&SpotLight> for GpuSpotLight {
    fn from(light: &SpotLight) -> Self {
        Self {
            position: light.position.to_array(),
            cutoff: light.cutoff,
            direction: light.direction.to_array(),
            outer_cutoff: light.outer_cutoff,
            ambient: light.ambient.to_array(),
            constant: light.constant,
            diffuse: light.diffuse.to_array(),
            linear: light.linear,
            specular: light.specular.to_array(),
            quadratic: light.quadratic,
        }
    }
}

impl LightingUniform {
    /// Zeroed uniform; call [`update`](Self::update) before uploading.
    #[must_use]
    pub fn new() -> Self {
        bytemuck::Zeroable::zeroed()
    }

    /// Mirror the CPU-side light set into GPU layout.
    ///
    /// Point lights beyond [`MAX_POINT_LIGHTS`] are dropped.
    pub fn update(&mut self, set: &LightSet) {
        self.directional = (&set.directional).into();
        self.points = bytemuck::Zeroable::zeroed();
        for (slot, light) in self.points.iter_mut().zip(&set.points) {
            *slot = light.into();
        }
        self.point_count = set.points.len().min(MAX_POINT_LIGHTS) as u32;
        self.spot = (&set.spot).into();
    }
}

impl Default for LightingUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn uniform_is_tightly_packed_for_gpu() {
        assert_eq!(size_of::<GpuDirectionalLight>(), 64);
        assert_eq!(size_of::<GpuPointLight>(), 64);
        assert_eq!(size_of::<GpuSpotLight>(), 80);
        assert_eq!(size_of::<LightingUniform>(), 416);
        assert_eq!(align_of::<LightingUniform>(), 4);
    }

    #[test]
    fn update_mirrors_light_set() {
        let mut set = LightSet::default();
        set.directional.direction = Vec3::new(0.0, -1.0, 0.0);
        set.points[2].position = Vec3::new(5.0, 6.0, 7.0);
        set.spot.position = Vec3::new(1.0, 2.0, 3.0);

        let mut uniform = LightingUniform::new();
        uniform.update(&set);

        assert_eq!(uniform.directional.direction, [0.0, -1.0, 0.0]);
        assert_eq!(uniform.points[2].position, [5.0, 6.0, 7.0]);
        assert_eq!(uniform.spot.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.point_count, 4);
    }

    #[test]
    fn point_count_saturates_at_capacity() {
        let mut set = LightSet::default();
        set.points.push(PointLight::default());
        set.points.push(PointLight::default());
        assert_eq!(set.points.len(), 6);

        let mut uniform = LightingUniform::new();
        uniform.update(&set);
        assert_eq!(uniform.point_count, MAX_POINT_LIGHTS as u32);
    }

    #[test]
    fn dropping_points_zeroes_stale_slots() {
        let mut set = LightSet::default();
        let mut uniform = LightingUniform::new();
        uniform.update(&set);
        assert_ne!(uniform.points[3].position, [0.0, 0.0, 0.0]);

        set.points.truncate(1);
        uniform.update(&set);
        assert_eq!(uniform.point_count, 1);
        assert_eq!(uniform.points[3].position, [0.0, 0.0, 0.0]);
    }
}
