//! Scene lighting: one key directional light, a small bank of point
//! lights, and a spot light that rides along with the camera.
//!
//! The CPU-side [`LightSet`] is plain mutable state; [`Lighting`] wraps
//! it together with the uniform buffer and bind group every shading
//! stage shares.

/// GPU-layout mirror structs for the light set.
pub mod uniform;

pub use uniform::LightingUniform;

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::camera::core::Camera;
use crate::gpu::render_context::RenderContext;
use crate::options::LightingOptions;

/// Point light capacity of the GPU uniform.
pub const MAX_POINT_LIGHTS: usize = 4;

/// A sun-style light defined by direction alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// World-space direction the light travels in. Shaders normalize,
    /// so any non-zero vector works.
    pub direction: Vec3,
    /// Ambient color contribution.
    pub ambient: Vec3,
    /// Diffuse color contribution.
    pub diffuse: Vec3,
    /// Specular color contribution.
    pub specular: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(-0.2, -1.0, -0.3),
            ambient: Vec3::splat(0.05),
            diffuse: Vec3::splat(0.4),
            specular: Vec3::splat(0.5),
        }
    }
}

/// A light radiating from a point, dimming with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position.
    pub position: Vec3,
    /// Ambient color contribution.
    pub ambient: Vec3,
    /// Diffuse color contribution.
    pub diffuse: Vec3,
    /// Specular color contribution.
    pub specular: Vec3,
    /// Constant attenuation term, normally 1.0.
    pub constant: f32,
    /// Linear attenuation coefficient.
    pub linear: f32,
    /// Quadratic attenuation coefficient.
    pub quadratic: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            ambient: Vec3::splat(0.05),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::ONE,
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

/// A cone-shaped light with a soft edge between the inner and outer
/// cutoff angles.
///
/// Cutoffs are stored as cosines so shaders can compare them straight
/// against a dot product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    /// World-space position of the cone apex.
    pub position: Vec3,
    /// World-space direction the cone points in.
    pub direction: Vec3,
    /// Cosine of the inner cone angle.
    pub cutoff: f32,
    /// Cosine of the outer cone angle.
    pub outer_cutoff: f32,
    /// Ambient color contribution.
    pub ambient: Vec3,
    /// Diffuse color contribution.
    pub diffuse: Vec3,
    /// Specular color contribution.
    pub specular: Vec3,
    /// Constant attenuation term, normally 1.0.
    pub constant: f32,
    /// Linear attenuation coefficient.
    pub linear: f32,
    /// Quadratic attenuation coefficient.
    pub quadratic: f32,
}

impl SpotLight {
    /// Collocate with the camera: position and aim copy the camera's
    /// position and front vector, giving the flashlight effect.
    pub fn follow(&mut self, camera: &Camera) {
        self.position = camera.position();
        self.direction = camera.front();
    }
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            cutoff: 12.5_f32.to_radians().cos(),
            outer_cutoff: 15.0_f32.to_radians().cos(),
            ambient: Vec3::ZERO,
            diffuse: Vec3::ONE,
            specular: Vec3::ONE,
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

/// All lights in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct LightSet {
    /// The key light.
    pub directional: DirectionalLight,
    /// Point lights; only the first [`MAX_POINT_LIGHTS`] reach the GPU.
    pub points: Vec<PointLight>,
    /// The camera-following spot light.
    pub spot: SpotLight,
}

impl LightSet {
    /// Build a light set from configuration.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        let directional = DirectionalLight {
            direction: Vec3::from_array(options.key_direction),
            ambient: Vec3::splat(options.ambient),
            diffuse: Vec3::splat(0.4 * options.key_intensity),
            specular: Vec3::splat(0.5 * options.key_intensity),
        };

        let points = options
            .point_positions
            .iter()
            .map(|&position| PointLight {
                position: Vec3::from_array(position),
                diffuse: Vec3::splat(0.8 * options.point_intensity),
                specular: Vec3::splat(options.point_intensity),
                linear: options.attenuation_linear,
                quadratic: options.attenuation_quadratic,
                ..PointLight::default()
            })
            .collect();

        // A disabled flashlight keeps its geometry but emits nothing.
        let beam = if options.flashlight {
            Vec3::ONE
        } else {
            Vec3::ZERO
        };
        let spot = SpotLight {
            cutoff: options.flashlight_cutoff_deg.to_radians().cos(),
            outer_cutoff: options.flashlight_outer_cutoff_deg.to_radians().cos(),
            diffuse: beam,
            specular: beam,
            linear: options.attenuation_linear,
            quadratic: options.attenuation_quadratic,
            ..SpotLight::default()
        };

        Self {
            directional,
            points,
            spot,
        }
    }
}

impl Default for LightSet {
    fn default() -> Self {
        Self::from_options(&LightingOptions::default())
    }
}

/// Light set plus the GPU resources that publish it to shaders.
pub struct Lighting {
    /// CPU-side light state.
    pub set: LightSet,
    /// GPU-layout mirror of `set`.
    pub uniform: LightingUniform,
    /// Uniform buffer holding the serialized light set.
    pub buffer: wgpu::Buffer,
    /// Bind group layout for the lighting uniform.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group exposing the buffer to fragment shaders.
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Create the light set and its GPU resources.
    #[must_use]
    pub fn new(context: &RenderContext, options: &LightingOptions) -> Self {
        let set = LightSet::from_options(options);
        let mut uniform = LightingUniform::new();
        uniform.update(&set);

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
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
                label: Some("Lighting Bind Group"),
            });

        Self {
            set,
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Collocate the spot light with the camera.
    ///
    /// Call once per frame after input has been applied, before
    /// [`update_gpu`](Self::update_gpu).
    pub fn follow_camera(&mut self, camera: &Camera) {
        self.set.spot.follow(camera);
    }

    /// Serialize the light set and upload it to the GPU.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update(&self.set);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_four_point_lights() {
        let set = LightSet::default();
        assert_eq!(set.points.len(), 4);
        assert_eq!(set.points[0].position, Vec3::new(0.7, 0.2, 2.0));
        assert_eq!(set.points[3].position, Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(set.directional.direction, Vec3::new(-0.2, -1.0, -0.3));
    }

    #[test]
    fn spot_cutoffs_are_cosines_with_inner_wider_than_outer() {
        let spot = SpotLight::default();
        // cos shrinks as the angle opens, so inner > outer.
        assert!(spot.cutoff > spot.outer_cutoff);
        assert!((spot.cutoff - 12.5_f32.to_radians().cos()).abs() < 1e-6);
        assert!((spot.outer_cutoff - 15.0_f32.to_radians().cos()).abs() < 1e-6);
    }

    #[test]
    fn follow_copies_camera_position_and_front() {
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        camera.process_look(300.0, 150.0, true);

        let mut spot = SpotLight::default();
        spot.follow(&camera);

        assert_eq!(spot.position, camera.position());
        assert_eq!(spot.direction, camera.front());
    }

    #[test]
    fn options_scale_light_intensities() {
        let options = LightingOptions {
            key_intensity: 2.0,
            point_intensity: 0.5,
            ..LightingOptions::default()
        };
        let set = LightSet::from_options(&options);

        assert_eq!(set.directional.diffuse, Vec3::splat(0.8));
        assert_eq!(set.directional.specular, Vec3::splat(1.0));
        assert_eq!(set.points[0].diffuse, Vec3::splat(0.4));
        assert_eq!(set.points[0].specular, Vec3::splat(0.5));
    }

    #[test]
    fn disabling_flashlight_zeroes_its_colors() {
        let options = LightingOptions {
            flashlight: false,
            ..LightingOptions::default()
        };
        let set = LightSet::from_options(&options);
        assert_eq!(set.spot.diffuse, Vec3::ZERO);
        assert_eq!(set.spot.specular, Vec3::ZERO);
    }
}
