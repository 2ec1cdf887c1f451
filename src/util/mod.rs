//! Shared utilities for the frame driver.

/// Frame pacing and FPS tracking.
pub mod frame_clock;
