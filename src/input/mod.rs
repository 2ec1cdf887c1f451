//! Input handling: raw event types, key bindings, and the processor
//! that folds them into engine commands.
//!
//! The shell (or an embedding application) translates its windowing
//! library's events into [`InputEvent`]s and feeds them to an
//! [`InputProcessor`]; everything downstream of that seam is
//! windowing-agnostic.

/// Window-system-agnostic input event types.
pub mod event;
/// Key actions and held-movement tracking.
pub mod keyboard;
/// Cursor tracking with first-sample suppression.
pub mod mouse;
/// Event → command translation.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::{KeyAction, MovementState};
pub use mouse::CursorTracker;
pub use processor::InputProcessor;
