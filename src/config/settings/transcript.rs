use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSettings {
    /// Number of command summaries kept in the recent-commands list
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize {
    5
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}
