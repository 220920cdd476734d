use crate::config::DesktopSettings;
use crate::desktop::CursorState;

/// Where the cursor glyph is drawn.
///
/// The logical cursor may sit on the workspace edge; the glyph is kept fully
/// inside the workspace.
#[derive(Debug, Clone, Copy)]
pub struct VirtualCursor {
    workspace_width: i64,
    workspace_height: i64,
    glyph_size: i64,
}

impl Default for VirtualCursor {
    fn default() -> Self {
        Self::new(&DesktopSettings::default())
    }
}

impl VirtualCursor {
    pub fn new(settings: &DesktopSettings) -> Self {
        Self {
            workspace_width: i64::from(settings.width),
            workspace_height: i64::from(settings.height),
            glyph_size: i64::from(settings.cursor_glyph_size),
        }
    }

    /// Top-left corner of the glyph for a cursor position
    pub fn render_position(&self, cursor: CursorState) -> (i64, i64) {
        let max_x = (self.workspace_width - self.glyph_size).max(0);
        let max_y = (self.workspace_height - self.glyph_size).max(0);
        (cursor.x.clamp(0, max_x), cursor.y.clamp(0, max_y))
    }

    pub fn render(&self, cursor: CursorState) -> String {
        let (x, y) = self.render_position(cursor);
        format!("translate({x}px, {y}px)")
    }
}
