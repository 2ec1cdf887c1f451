// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! First-person walkthrough camera rig and frame driver for wgpu scene
//! viewers.
//!
//! Roam owns the pieces every walkthrough viewer rebuilds: a yaw/pitch
//! camera with held-key movement and mouse look, the uniform plumbing
//! that publishes it to shaders, a classic directional/point/spot light
//! rig with a camera-mounted flashlight, and a frame driver that runs
//! them in the right order each frame. Scene content plugs in through
//! the [`stage::RenderStage`] trait.
//!
//! # Key entry points
//!
//! - [`camera::core::Camera`] - the orientable first-person camera
//! - [`engine::RoamEngine`] - the frame driver
//! - [`viewer::Viewer`] - a ready-made winit shell (feature `viewer`)
//! - [`options::Options`] - runtime configuration (display, lighting,
//!   camera, keybindings)
//!
//! # Architecture
//!
//! Camera and lighting math live in plain structs with no GPU types, so
//! the core modules are testable headless. Controllers pair that state
//! with uniform buffers and bind groups; each frame the engine applies
//! input, refreshes GPU state, and opens a single render pass that
//! every registered stage records into.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod lighting;
pub mod options;
pub mod stage;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
