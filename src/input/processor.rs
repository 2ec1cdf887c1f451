//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (the held-movement
//! set and the cursor tracker) and the key-binding map. It is the only
//! thing that sits between raw window events and the engine's
//! [`execute`](crate::engine::RoamEngine::execute) method.

use crate::engine::RoamCommand;
use crate::input::event::InputEvent;
use crate::input::keyboard::{KeyAction, MovementState};
use crate::input::mouse::CursorTracker;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`RoamCommand`]s and held-movement
/// state.
///
/// Movement keys never produce commands — they flip entries in the
/// [`MovementState`] that the frame driver consumes once per frame.
/// Everything else (cursor travel, scroll, discrete bound keys) comes
/// back as zero or one commands per event.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// // Once per frame:
/// engine.advance(input_processor.movement(), dt);
/// ```
pub struct InputProcessor {
    /// Held movement directions.
    movement: MovementState,
    /// Cursor position → look offset tracker.
    cursor: CursorTracker,
    /// Key string → action mapping.
    bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bindings(KeybindingOptions::default())
    }

    /// Processor with custom key bindings.
    #[must_use]
    pub fn with_bindings(bindings: KeybindingOptions) -> Self {
        Self {
            movement: MovementState::new(),
            cursor: CursorTracker::new(),
            bindings,
        }
    }

    /// The movement directions currently held.
    #[must_use]
    pub fn movement(&self) -> &MovementState {
        &self.movement
    }

    /// Re-arm the cursor tracker's first-sample suppression.
    ///
    /// Call when cursor capture is gained or regained.
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }

    /// Drop all transient state: held keys released, cursor re-armed.
    ///
    /// Call on window focus loss, where release events may never arrive.
    pub fn release_all(&mut self) {
        self.movement.clear();
        self.cursor.reset();
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<RoamCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self
                .cursor
                .offset(x, y)
                .map(|delta| RoamCommand::Look { delta }),
            InputEvent::Scroll { delta } => Some(RoamCommand::Zoom { delta }),
            InputEvent::Key { code, pressed } => {
                self.handle_key(&code, pressed)
            }
        }
    }

    /// Key transition — update held state or produce a discrete command.
    fn handle_key(&mut self, code: &str, pressed: bool) -> Option<RoamCommand> {
        let action = self.bindings.lookup(code)?;

        if let Some(direction) = action.movement() {
            self.movement.set(direction, pressed);
            return None;
        }

        // Discrete actions fire on press only.
        if !pressed {
            return None;
        }
        match action {
            KeyAction::ToggleCapture => Some(RoamCommand::ToggleCapture),
            KeyAction::Exit => Some(RoamCommand::Exit),
            KeyAction::MoveForward
            | KeyAction::MoveBackward
            | KeyAction::StrafeLeft
            | KeyAction::StrafeRight => None,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::camera::core::MoveDirection;

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.to_owned(),
            pressed,
        }
    }

    #[test]
    fn movement_keys_update_held_state_without_commands() {
        let mut processor = InputProcessor::new();

        assert_eq!(processor.handle_event(key("KeyW", true)), None);
        assert_eq!(processor.handle_event(key("KeyD", true)), None);
        assert!(processor.movement().is_held(MoveDirection::Forward));
        assert!(processor.movement().is_held(MoveDirection::StrafeRight));

        assert_eq!(processor.handle_event(key("KeyW", false)), None);
        assert!(!processor.movement().is_held(MoveDirection::Forward));
        assert!(processor.movement().is_held(MoveDirection::StrafeRight));
    }

    #[test]
    fn discrete_keys_fire_on_press_only() {
        let mut processor = InputProcessor::new();

        assert_eq!(
            processor.handle_event(key("Escape", true)),
            Some(RoamCommand::Exit)
        );
        assert_eq!(processor.handle_event(key("Escape", false)), None);
        assert_eq!(
            processor.handle_event(key("Tab", true)),
            Some(RoamCommand::ToggleCapture)
        );
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.handle_event(key("KeyZ", true)), None);
        assert!(!processor.movement().any_held());
    }

    #[test]
    fn cursor_seeding_sample_produces_no_look() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 }),
            None
        );
        assert_eq!(
            processor.handle_event(InputEvent::CursorMoved { x: 410.0, y: 280.0 }),
            Some(RoamCommand::Look {
                delta: Vec2::new(10.0, 20.0)
            })
        );
    }

    #[test]
    fn scroll_becomes_zoom() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_event(InputEvent::Scroll { delta: 1.5 }),
            Some(RoamCommand::Zoom { delta: 1.5 })
        );
    }

    #[test]
    fn release_all_clears_held_state_and_rearms_cursor() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(key("KeyS", true));
        let _ = processor.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });

        processor.release_all();
        assert!(!processor.movement().any_held());
        // Next cursor sample re-seeds instead of producing a huge jump.
        assert_eq!(
            processor.handle_event(InputEvent::CursorMoved { x: 500.0, y: 500.0 }),
            None
        );
    }
}
