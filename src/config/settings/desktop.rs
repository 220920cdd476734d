//! Simulated desktop settings

use serde::{Deserialize, Serialize};

/// Workspace rectangle and virtual cursor placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopSettings {
    /// Workspace width in pixels; the cursor is clamped to `0..=width`
    #[serde(default = "default_width")]
    pub width: u32,

    /// Workspace height in pixels; the cursor is clamped to `0..=height`
    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_cursor_start_x")]
    pub cursor_start_x: i64,

    #[serde(default = "default_cursor_start_y")]
    pub cursor_start_y: i64,

    /// Size of the cursor glyph, used to keep it visible when rendering
    #[serde(default = "default_cursor_glyph_size")]
    pub cursor_glyph_size: u32,
}

fn default_width() -> u32 {
    960
}

fn default_height() -> u32 {
    600
}

fn default_cursor_start_x() -> i64 {
    200
}

fn default_cursor_start_y() -> i64 {
    200
}

fn default_cursor_glyph_size() -> u32 {
    64
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            cursor_start_x: default_cursor_start_x(),
            cursor_start_y: default_cursor_start_y(),
            cursor_glyph_size: default_cursor_glyph_size(),
        }
    }
}
