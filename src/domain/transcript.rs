use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome class of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TranscriptResultStatus {
    Success,
    /// Executed, but something was adjusted (e.g. cursor clamped)
    Warning,
    Error,
}

impl std::fmt::Display for TranscriptResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptResultStatus::Success => write!(f, "SUCCESS"),
            TranscriptResultStatus::Warning => write!(f, "WARNING"),
            TranscriptResultStatus::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptResult {
    pub status: TranscriptResultStatus,
    pub message: String,
}

/// One heard utterance with what we made of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub raw_text: String,

    /// Summary of the parsed command, if parsing succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_command: Option<String>,

    /// Result of parsing/execution; `None` while still pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TranscriptResult>,
}
