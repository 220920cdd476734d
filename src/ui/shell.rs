use chrono::{DateTime, Local};

use super::{EMPTY_HISTORY_HINT, VirtualCursor};
use crate::config::DesktopSettings;
use crate::desktop::{AppState, Desktop};
use crate::domain::ListeningStatus;

const TRAY_ID: &str = "taskbar-tray";

/// Taskbar and cursor chrome around the desktop
#[derive(Debug, Clone, Default)]
pub struct Win95Shell {
    cursor: VirtualCursor,
    cursor_position: Option<(i64, i64)>,
    clock: Option<String>,
}

impl Win95Shell {
    pub fn new(settings: &DesktopSettings) -> Self {
        Self {
            cursor: VirtualCursor::new(settings),
            cursor_position: None,
            clock: None,
        }
    }

    /// Re-render the cursor and the taskbar clock.
    ///
    /// The clock text is also written into the desktop's tray element.
    pub fn boot(
        &mut self,
        state: &AppState,
        desktop: Option<&mut Desktop>,
        now: DateTime<Local>,
    ) {
        self.cursor_position = Some(self.cursor.render_position(state.cursor));

        let clock = format_clock(&now);
        if let Some(desktop) = desktop {
            let tray = desktop
                .find_by_id(TRAY_ID)
                .and_then(|h| desktop.element_mut(h));
            if let Some(tray) = tray {
                tray.text_content = clock.clone();
            }
        }
        self.clock = Some(clock);
    }

    /// Glyph position from the last boot
    pub fn cursor_position(&self) -> Option<(i64, i64)> {
        self.cursor_position
    }

    pub fn clock(&self) -> Option<&str> {
        self.clock.as_deref()
    }

    /// One-line taskbar: status, cursor and clock
    pub fn render_taskbar(&self, state: &AppState) -> String {
        let mut line = format!(
            "{} | cursor ({}, {})",
            render_status(state.status),
            state.cursor.x,
            state.cursor.y
        );
        if let Some(clock) = &self.clock {
            line.push_str(&format!(" | {clock}"));
        }
        line
    }
}

/// `HH:MM`
pub fn format_clock(now: &DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}

/// Status indicator label
pub fn render_status(status: ListeningStatus) -> String {
    match status {
        ListeningStatus::Listening => "● Listening".to_string(),
        ListeningStatus::Idle => "○ Idle".to_string(),
    }
}

/// Numbered recent commands, newest first, or the empty hint
pub fn render_command_history(history: &[String]) -> String {
    if history.is_empty() {
        return EMPTY_HISTORY_HINT.to_string();
    }

    history
        .iter()
        .enumerate()
        .map(|(i, summary)| format!("{}. {}", i + 1, summary))
        .collect::<Vec<_>>()
        .join("\n")
}
