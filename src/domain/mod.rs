//! Core domain types for SoundGO

mod command;
mod parse_error;
mod status;
mod transcript;

pub use command::{ClickKind, Command, CommandKind, Direction, KeyModifier};
pub use parse_error::{ParseError, ParseErrorCode};
pub use status::ListeningStatus;
pub use transcript::{TranscriptEntry, TranscriptResult, TranscriptResultStatus};

#[cfg(test)]
mod tests;
