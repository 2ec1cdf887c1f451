use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera placement, motion, and projection parameters.
pub struct CameraOptions {
    /// Starting world-space position.
    pub position: [f32; 3],
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Look sensitivity in degrees per pixel of cursor travel.
    pub mouse_sensitivity: f32,
    /// Starting vertical field of view in degrees.
    pub fov: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Whether pitch is clamped short of straight up/down.
    pub constrain_pitch: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            fov: 45.0,
            znear: 0.1,
            zfar: 100.0,
            constrain_pitch: true,
        }
    }
}
