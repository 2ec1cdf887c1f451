/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`RoamCommand`](crate::engine::RoamCommand) values
/// and held-movement state. The windowing shell (winit when the `viewer`
/// feature is on, anything else otherwise) translates its native events
/// into these.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (screen-space, Y down).
        y: f32,
    },
    /// Scroll wheel movement.
    Scroll {
        /// Scroll amount in lines (positive = away from the user).
        delta: f32,
    },
    /// Keyboard key transition.
    Key {
        /// Physical key name in `winit::keyboard::KeyCode` debug format:
        /// `"KeyW"`, `"Tab"`, `"Escape"`, etc.
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}
