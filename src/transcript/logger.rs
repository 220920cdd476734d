use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{TranscriptSettings, write_atomic};
use crate::desktop::{AppState, Store};
use crate::domain::{Command, TranscriptEntry, TranscriptResult};

/// What to record for one utterance
#[derive(Debug, Clone)]
pub struct LogPayload<'a> {
    pub raw_text: &'a str,
    /// The parsed command, when parsing succeeded
    pub command: Option<&'a Command>,
    pub result: TranscriptResult,
}

/// Appends transcript entries to the store
#[derive(Debug, Clone)]
pub struct TranscriptLogger {
    history_limit: usize,
}

impl Default for TranscriptLogger {
    fn default() -> Self {
        Self::new(&TranscriptSettings::default())
    }
}

impl TranscriptLogger {
    pub fn new(settings: &TranscriptSettings) -> Self {
        Self {
            history_limit: settings.history_limit,
        }
    }

    /// Append an entry and return the resulting state.
    ///
    /// With a command, its summary is recorded on the entry, it becomes the
    /// last command, and the summary is pushed to the front of the command
    /// history (capped at `history_limit`).
    pub fn log(&self, store: &mut Store, payload: LogPayload<'_>) -> AppState {
        self.log_at(store, payload, Utc::now())
    }

    /// [`Self::log`] with an explicit timestamp
    pub fn log_at(
        &self,
        store: &mut Store,
        payload: LogPayload<'_>,
        timestamp: DateTime<Utc>,
    ) -> AppState {
        let LogPayload {
            raw_text,
            command,
            result,
        } = payload;

        store.update(|draft| {
            let mut entry = TranscriptEntry {
                id: Uuid::new_v4().to_string(),
                timestamp,
                raw_text: raw_text.to_string(),
                parsed_command: None,
                result: Some(result),
            };

            if let Some(command) = command.filter(|c| !c.summary.is_empty()) {
                entry.parsed_command = Some(command.summary.clone());
                draft.last_command = Some(command.clone());
                draft.command_history.insert(0, command.summary.clone());
                draft.command_history.truncate(self.history_limit);
            }

            draft.transcript.push(entry);
        })
    }
}

/// On-disk shape of an exported transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptExport {
    pub exported_at: DateTime<Utc>,
    pub command_history: Vec<String>,
    pub entries: Vec<TranscriptEntry>,
}

impl TranscriptExport {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            exported_at: Utc::now(),
            command_history: state.command_history.clone(),
            entries: state.transcript.clone(),
        }
    }
}

/// Write the transcript of `state` as pretty JSON
pub fn export_json(state: &AppState, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let export = TranscriptExport::from_state(state);
    let json =
        serde_json::to_string_pretty(&export).context("Failed to serialize transcript")?;
    write_atomic(path, &json)?;

    tracing::info!(
        "[soundgo:transcript] Exported {} entries to {}",
        export.entries.len(),
        path.display()
    );
    Ok(())
}
