use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Light set parameters.
///
/// Per-light colors are derived from the intensity multipliers here;
/// see [`LightSet::from_options`](crate::lighting::LightSet::from_options).
pub struct LightingOptions {
    /// Key light direction (the way the light travels).
    pub key_direction: [f32; 3],
    /// Key light intensity multiplier.
    pub key_intensity: f32,
    /// Ambient level contributed by the key light.
    pub ambient: f32,
    /// Point light world positions; only the first four reach the GPU.
    pub point_positions: Vec<[f32; 3]>,
    /// Point light intensity multiplier.
    pub point_intensity: f32,
    /// Linear attenuation coefficient shared by point and spot lights.
    pub attenuation_linear: f32,
    /// Quadratic attenuation coefficient shared by point and spot
    /// lights.
    pub attenuation_quadratic: f32,
    /// Whether the camera-mounted flashlight is on.
    pub flashlight: bool,
    /// Flashlight inner cone angle in degrees.
    pub flashlight_cutoff_deg: f32,
    /// Flashlight outer cone angle in degrees; the beam fades between
    /// the inner and outer angles.
    pub flashlight_outer_cutoff_deg: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            key_direction: [-0.2, -1.0, -0.3],
            key_intensity: 1.0,
            ambient: 0.05,
            point_positions: vec![
                [0.7, 0.2, 2.0],
                [2.3, -3.3, -4.0],
                [-4.0, 2.0, -12.0],
                [0.0, 0.0, -3.0],
            ],
            point_intensity: 1.0,
            attenuation_linear: 0.09,
            attenuation_quadratic: 0.032,
            flashlight: true,
            flashlight_cutoff_deg: 12.5,
            flashlight_outer_cutoff_deg: 15.0,
        }
    }
}
