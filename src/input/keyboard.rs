use serde::{Deserialize, Serialize};

use crate::camera::core::MoveDirection;

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// toggle_capture = "Tab"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Hold to move along the camera's front vector.
    MoveForward,
    /// Hold to move against the camera's front vector.
    MoveBackward,
    /// Hold to strafe against the camera's right vector.
    StrafeLeft,
    /// Hold to strafe along the camera's right vector.
    StrafeRight,
    /// Toggle cursor capture (mouse-look) on and off.
    ToggleCapture,
    /// Quit the application.
    Exit,
}

impl KeyAction {
    /// The movement direction this action drives, if it is a held-movement
    /// action rather than a discrete one.
    #[must_use]
    pub fn movement(self) -> Option<MoveDirection> {
        match self {
            Self::MoveForward => Some(MoveDirection::Forward),
            Self::MoveBackward => Some(MoveDirection::Backward),
            Self::StrafeLeft => Some(MoveDirection::StrafeLeft),
            Self::StrafeRight => Some(MoveDirection::StrafeRight),
            Self::ToggleCapture | Self::Exit => None,
        }
    }
}

/// The set of movement directions currently held.
///
/// Replaces per-frame key polling: key transitions set and clear entries,
/// and the frame driver applies every held direction once per frame.
/// Iteration order is fixed ([`MoveDirection::ALL`]) so per-frame
/// application is deterministic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    held: [bool; 4],
}

impl MovementState {
    /// Empty state — nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press (`true`) or release (`false`) of a direction.
    pub fn set(&mut self, direction: MoveDirection, pressed: bool) {
        self.held[direction as usize] = pressed;
    }

    /// Whether a direction is currently held.
    #[must_use]
    pub fn is_held(&self, direction: MoveDirection) -> bool {
        self.held[direction as usize]
    }

    /// Whether any direction is held.
    #[must_use]
    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&h| h)
    }

    /// Release everything (e.g. on window focus loss, where key-up events
    /// may never arrive).
    pub fn clear(&mut self) {
        self.held = [false; 4];
    }

    /// Iterate over held directions in fixed order.
    pub fn directions(&self) -> impl Iterator<Item = MoveDirection> + '_ {
        MoveDirection::ALL
            .into_iter()
            .filter(|&direction| self.held[direction as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear_track_held_directions() {
        let mut state = MovementState::new();
        assert!(!state.any_held());

        state.set(MoveDirection::Forward, true);
        state.set(MoveDirection::StrafeLeft, true);
        assert!(state.is_held(MoveDirection::Forward));
        assert!(state.is_held(MoveDirection::StrafeLeft));
        assert!(!state.is_held(MoveDirection::Backward));

        state.set(MoveDirection::Forward, false);
        assert!(!state.is_held(MoveDirection::Forward));
        assert!(state.any_held());

        state.clear();
        assert!(!state.any_held());
    }

    #[test]
    fn directions_iterate_in_fixed_order() {
        let mut state = MovementState::new();
        state.set(MoveDirection::StrafeRight, true);
        state.set(MoveDirection::Forward, true);

        let held: Vec<_> = state.directions().collect();
        assert_eq!(
            held,
            vec![MoveDirection::Forward, MoveDirection::StrafeRight]
        );
    }

    #[test]
    fn movement_actions_map_to_directions() {
        assert_eq!(
            KeyAction::MoveForward.movement(),
            Some(MoveDirection::Forward)
        );
        assert_eq!(
            KeyAction::StrafeLeft.movement(),
            Some(MoveDirection::StrafeLeft)
        );
        assert_eq!(KeyAction::ToggleCapture.movement(), None);
        assert_eq!(KeyAction::Exit.movement(), None);
    }
}
