//! First-person camera: Euler-angle core, projection, and GPU uniform
//! plumbing.
//!
//! [`core::Camera`] is pure math — position plus a yaw/pitch-derived
//! orthonormal basis. [`controller::CameraController`] wraps it with the
//! wgpu uniform buffer and per-frame input application.

/// Camera controller owning the camera, projection, and GPU resources.
pub mod controller;
/// Core Euler-angle camera and movement directions.
pub mod core;
/// Projection parameters and the camera GPU uniform block.
pub mod uniform;
