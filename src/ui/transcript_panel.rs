use chrono::{DateTime, Local, Utc};

use crate::domain::{TranscriptEntry, TranscriptResult, TranscriptResultStatus};

/// Display class of a transcript result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultVariant {
    Ok,
    Warning,
    Error,
    Pending,
}

impl ResultVariant {
    pub fn from_result(result: Option<&TranscriptResult>) -> Self {
        match result.map(|r| r.status) {
            None => ResultVariant::Pending,
            Some(TranscriptResultStatus::Error) => ResultVariant::Error,
            Some(TranscriptResultStatus::Warning) => ResultVariant::Warning,
            Some(TranscriptResultStatus::Success) => ResultVariant::Ok,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultVariant::Ok => "ok",
            ResultVariant::Warning => "warning",
            ResultVariant::Error => "error",
            ResultVariant::Pending => "pending",
        }
    }
}

/// Renders transcript entries as text blocks.
///
/// With `max_visible` set, only the newest entries are shown, like a panel
/// pinned to the bottom.
#[derive(Debug, Clone, Default)]
pub struct TranscriptPanel {
    max_visible: Option<usize>,
}

impl TranscriptPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = Some(max_visible);
        self
    }

    pub fn render(&self, entries: &[TranscriptEntry]) -> String {
        let skip = self
            .max_visible
            .map_or(0, |max| entries.len().saturating_sub(max));

        entries[skip..]
            .iter()
            .map(render_entry)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Meta line (time, variant, result), then `Heard` and `Parsed` rows
pub fn render_entry(entry: &TranscriptEntry) -> String {
    let parsed = entry.parsed_command.as_deref().unwrap_or("—");
    let result_text = entry
        .result
        .as_ref()
        .map_or("Pending", |r| r.message.as_str());
    let variant = ResultVariant::from_result(entry.result.as_ref());

    format!(
        "[{}] {:<7} {}\n  Heard   {}\n  Parsed  {}\n",
        format_timestamp(&entry.timestamp),
        variant.as_str(),
        result_text,
        entry.raw_text,
        parsed
    )
}

/// Local wall-clock time of an entry
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}
