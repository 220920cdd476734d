//! Command execution against the simulated desktop.

mod describe;
mod dispatch;

use serde::{Deserialize, Serialize};

use crate::config::DesktopSettings;
use crate::desktop::{Desktop, ElementHandle, Store};
use crate::domain::{ClickKind, Command, CommandKind, Direction, KeyModifier, TranscriptResultStatus};

pub use describe::{describe_element, truncate};

/// Outcome class of executing a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    Success,
    /// Executed, but the cursor was clamped to the workspace
    SuccessWithClamp,
    /// Nothing clickable under the cursor
    ErrorNoTarget,
    /// No focused element able to receive the input
    ErrorNoFocus,
    /// No desktop surface to act on
    ErrorEnvironment,
    ErrorUnsupportedCommand,
}

impl ExecutionStatus {
    /// How this outcome is classed in the transcript
    pub fn transcript_status(&self) -> TranscriptResultStatus {
        match self {
            ExecutionStatus::Success => TranscriptResultStatus::Success,
            ExecutionStatus::SuccessWithClamp => TranscriptResultStatus::Warning,
            _ => TranscriptResultStatus::Error,
        }
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExecutionStatus::Success => "SUCCESS",
            ExecutionStatus::SuccessWithClamp => "SUCCESS_WITH_CLAMP",
            ExecutionStatus::ErrorNoTarget => "ERROR_NO_TARGET",
            ExecutionStatus::ErrorNoFocus => "ERROR_NO_FOCUS",
            ExecutionStatus::ErrorEnvironment => "ERROR_ENVIRONMENT",
            ExecutionStatus::ErrorUnsupportedCommand => "ERROR_UNSUPPORTED_COMMAND",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_description: Option<String>,
}

impl ExecutionResult {
    fn new(status: ExecutionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            target_description: None,
        }
    }

    fn with_target(status: ExecutionStatus, message: String, description: String) -> Self {
        Self {
            status,
            message,
            target_description: Some(description),
        }
    }
}

/// Applies commands to the state store and, for clicks and keys, to the desktop.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    width: i64,
    height: i64,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new(&DesktopSettings::default())
    }
}

impl CommandExecutor {
    pub fn new(settings: &DesktopSettings) -> Self {
        Self {
            width: i64::from(settings.width),
            height: i64::from(settings.height),
        }
    }

    /// Execute a command.
    ///
    /// `desktop` is `None` when running headless; commands that need a surface
    /// then fail with [`ExecutionStatus::ErrorEnvironment`].
    pub fn execute(
        &self,
        command: &Command,
        store: &mut Store,
        desktop: Option<&mut Desktop>,
    ) -> ExecutionResult {
        let result = match &command.kind {
            CommandKind::MouseMoveRelative {
                direction,
                distance_px,
            } => self.move_relative(command, *direction, *distance_px, store),
            CommandKind::MouseMoveAbsolute { x, y } => self.move_absolute(command, *x, *y, store),
            CommandKind::MouseClick { click } => self.click(command, *click, store, desktop),
            CommandKind::KeyType { text } => self.type_text(command, text, store, desktop),
            CommandKind::KeyPress { key, modifiers, .. } => {
                self.press_key(command, key, modifiers, store, desktop)
            }
        };

        tracing::debug!(
            "[soundgo:executor] {} -> {}: {}",
            command.type_name(),
            result.status,
            result.message
        );
        result
    }

    fn clamp_x(&self, x: i64) -> i64 {
        x.clamp(0, self.width)
    }

    fn clamp_y(&self, y: i64) -> i64 {
        y.clamp(0, self.height)
    }

    fn move_relative(
        &self,
        command: &Command,
        direction: Direction,
        distance_px: i64,
        store: &mut Store,
    ) -> ExecutionResult {
        let (dx, dy) = direction.unit();
        let mut clamped = false;

        store.update(|draft| {
            let x = draft.cursor.x.saturating_add(dx.saturating_mul(distance_px));
            let y = draft.cursor.y.saturating_add(dy.saturating_mul(distance_px));
            let clamped_x = self.clamp_x(x);
            let clamped_y = self.clamp_y(y);
            clamped = clamped_x != x || clamped_y != y;
            draft.cursor.x = clamped_x;
            draft.cursor.y = clamped_y;
            draft.last_command = Some(command.clone());
        });

        let base = format!("Moved cursor {} {}px.", direction.as_word(), distance_px);
        if clamped {
            ExecutionResult::new(
                ExecutionStatus::SuccessWithClamp,
                format!("{base} Clamped to workspace edges."),
            )
        } else {
            ExecutionResult::new(ExecutionStatus::Success, base)
        }
    }

    fn move_absolute(&self, command: &Command, x: i64, y: i64, store: &mut Store) -> ExecutionResult {
        let next_x = self.clamp_x(x);
        let next_y = self.clamp_y(y);
        let clamped = next_x != x || next_y != y;

        store.update(|draft| {
            draft.cursor.x = next_x;
            draft.cursor.y = next_y;
            draft.last_command = Some(command.clone());
        });

        let base = format!("Moved cursor to ({x}, {y}).");
        if clamped {
            ExecutionResult::new(
                ExecutionStatus::SuccessWithClamp,
                format!("{base} Clamped within workspace."),
            )
        } else {
            ExecutionResult::new(ExecutionStatus::Success, base)
        }
    }

    fn click(
        &self,
        command: &Command,
        click: ClickKind,
        store: &mut Store,
        desktop: Option<&mut Desktop>,
    ) -> ExecutionResult {
        let Some(desktop) = desktop else {
            return ExecutionResult::new(
                ExecutionStatus::ErrorEnvironment,
                "Click commands require a desktop surface.",
            );
        };

        // The cursor may rest on the far edge, which no half-open rect contains
        let cursor = store.state().cursor;
        let point = (
            cursor.x.clamp(0, (self.width - 1).max(0)),
            cursor.y.clamp(0, (self.height - 1).max(0)),
        );

        let Some(target) = hit_target(desktop, point) else {
            record_last_command(store, command);
            return ExecutionResult::new(
                ExecutionStatus::ErrorNoTarget,
                "No clickable target beneath the virtual cursor.",
            );
        };

        dispatch::click_sequence(desktop, target, click, point);
        desktop.focus(target);
        record_last_command(store, command);

        let description = describe_element(desktop, target);
        ExecutionResult::with_target(
            ExecutionStatus::Success,
            format!("{} {}.", click.action_label(), description),
            description,
        )
    }

    fn type_text(
        &self,
        command: &Command,
        text: &str,
        store: &mut Store,
        desktop: Option<&mut Desktop>,
    ) -> ExecutionResult {
        let Some(desktop) = desktop else {
            return ExecutionResult::new(
                ExecutionStatus::ErrorEnvironment,
                "Typing commands require a desktop surface.",
            );
        };

        let target = desktop.active_element();
        let accepts_text = desktop.element(target).is_some_and(|e| e.accepts_text());
        if !accepts_text {
            return ExecutionResult::new(
                ExecutionStatus::ErrorNoFocus,
                "No focused text field available for typing.",
            );
        }

        dispatch::inject_text(desktop, target, text);
        record_last_command(store, command);

        let description = describe_element(desktop, target);
        ExecutionResult::with_target(
            ExecutionStatus::Success,
            format!("Typed \"{}\" into {}.", truncate(text, 40), description),
            description,
        )
    }

    fn press_key(
        &self,
        command: &Command,
        key: &str,
        modifiers: &[KeyModifier],
        store: &mut Store,
        desktop: Option<&mut Desktop>,
    ) -> ExecutionResult {
        let Some(desktop) = desktop else {
            return ExecutionResult::new(
                ExecutionStatus::ErrorEnvironment,
                "Key press commands require a desktop surface.",
            );
        };

        let target = desktop.active_element();
        if desktop.element(target).is_none() {
            return ExecutionResult::new(
                ExecutionStatus::ErrorNoFocus,
                "No focused element available for key press.",
            );
        }

        dispatch::key_combo(desktop, target, key, modifiers);
        record_last_command(store, command);

        let description = describe_element(desktop, target);
        ExecutionResult::with_target(
            ExecutionStatus::Success,
            format!("Sent \"{}\" to {}.", command.summary, description),
            description,
        )
    }
}

/// Topmost element under the point, skipping the cursor glyph layer
fn hit_target(desktop: &Desktop, (x, y): (i64, i64)) -> Option<ElementHandle> {
    desktop
        .elements_from_point(x, y)
        .into_iter()
        .find(|h| desktop.element(*h).is_some_and(|e| !e.cursor_overlay))
}

fn record_last_command(store: &mut Store, command: &Command) {
    store.update(|draft| {
        draft.last_command = Some(command.clone());
    });
}

#[cfg(test)]
mod tests;
