//! Runtime configuration with TOML file support.
//!
//! All tweakable settings (display, lighting, camera, keybindings) are
//! consolidated here. Options serialize to/from TOML so a config file
//! can override any subset of them.

mod camera;
mod display;
mod keybindings;
mod lighting;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
use serde::{Deserialize, Serialize};

use crate::error::RoamError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[camera]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window and presentation settings.
    pub display: DisplayOptions,
    /// Light set parameters.
    pub lighting: LightingOptions,
    /// Camera placement and motion parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RoamError`] if the file cannot be read or does not
    /// parse as TOML.
    pub fn load(path: &Path) -> Result<Self, RoamError> {
        let content = std::fs::read_to_string(path).map_err(RoamError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| RoamError::OptionsParse(e.to_string()))?;
        // The skipped reverse map deserializes from the default
        // bindings, not the loaded ones.
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`RoamError`] if serialization or the file write fails.
    pub fn save(&self, path: &Path) -> Result<(), RoamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RoamError::Io)?;
        }
        std::fs::write(path, content).map_err(RoamError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
movement_speed = 5.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.movement_speed, 5.0);
        // Everything else should be default
        assert_eq!(opts.camera.fov, 45.0);
        assert_eq!(opts.display.width, 1600);
        assert_eq!(opts.lighting.point_positions.len(), 4);
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Exit));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn remapped_bindings_replace_the_whole_map() {
        use crate::input::KeyAction;
        let toml_str = r#"
[keybindings.bindings]
move_forward = "ArrowUp"
"#;
        let mut opts: Options = toml::from_str(toml_str).unwrap();
        opts.keybindings.rebuild_reverse_map();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        // A supplied bindings table replaces the defaults wholesale.
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
        assert_eq!(opts.keybindings.lookup("Escape"), None);
    }
}
