//! Application state container

use serde::Serialize;

use crate::config::DesktopSettings;
use crate::domain::{Command, ListeningStatus, TranscriptEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CursorState {
    pub x: i64,
    pub y: i64,
}

/// Everything the UI renders from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub cursor: CursorState,
    pub transcript: Vec<TranscriptEntry>,
    pub status: ListeningStatus,
    /// Summaries of recent commands, newest first
    pub command_history: Vec<String>,
    pub last_command: Option<Command>,
}

impl AppState {
    pub fn new(settings: &DesktopSettings) -> Self {
        Self {
            cursor: CursorState {
                x: settings.cursor_start_x,
                y: settings.cursor_start_y,
            },
            transcript: Vec::new(),
            status: ListeningStatus::Idle,
            command_history: Vec::new(),
            last_command: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&DesktopSettings::default())
    }
}

/// Copy-on-update state store.
///
/// `update` runs the mutator on a copy and swaps it in, so a snapshot taken
/// earlier never observes later changes.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self { state: initial }
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> AppState {
        self.state.clone()
    }

    /// Borrow the current state without copying
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply a mutation and return the resulting snapshot
    pub fn update<F>(&mut self, mutator: F) -> AppState
    where
        F: FnOnce(&mut AppState),
    {
        let mut draft = self.state.clone();
        mutator(&mut draft);
        self.state = draft;
        self.snapshot()
    }
}
