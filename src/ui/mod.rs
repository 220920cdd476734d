//! Text rendering of the session
//!
//! - `TranscriptPanel`: heard utterances with parse and execution results
//! - `VirtualCursor`: on-screen cursor position
//! - `Win95Shell`: cursor, taskbar clock, status indicator and recent commands

mod cursor;
mod shell;
mod transcript_panel;

pub use cursor::VirtualCursor;
pub use shell::{Win95Shell, render_command_history, render_status};
pub use transcript_panel::{ResultVariant, TranscriptPanel};

/// Shown in the recent-commands list before anything was executed
pub const EMPTY_HISTORY_HINT: &str = "No commands yet. Say “Hey Go” to begin.";

#[cfg(test)]
mod tests;
