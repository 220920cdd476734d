//! Transcript log: every heard utterance with its parsed command and outcome.

mod logger;

pub use logger::{LogPayload, TranscriptExport, TranscriptLogger, export_json};

#[cfg(test)]
mod tests;
