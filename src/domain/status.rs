use serde::{Deserialize, Serialize};

/// Whether the session is waiting for the wake phrase or capturing a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListeningStatus {
    #[default]
    Idle,
    Listening,
}

impl ListeningStatus {
    pub fn is_listening(&self) -> bool {
        matches!(self, ListeningStatus::Listening)
    }
}

impl std::fmt::Display for ListeningStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListeningStatus::Idle => write!(f, "Idle"),
            ListeningStatus::Listening => write!(f, "Listening"),
        }
    }
}
