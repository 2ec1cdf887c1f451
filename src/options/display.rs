use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Window and presentation settings.
pub struct DisplayOptions {
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Whether the cursor is captured for mouse-look on startup.
    pub capture_cursor: bool,
    /// Background color, linear RGB.
    pub clear_color: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1200,
            title: "roam".to_owned(),
            capture_cursor: true,
            clear_color: [0.1, 0.1, 0.1],
        }
    }
}
