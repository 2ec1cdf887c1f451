//! GPU resource management.
//!
//! Provides wgpu device/surface initialization and the shared depth
//! buffer.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth buffer texture management.
pub mod texture;
