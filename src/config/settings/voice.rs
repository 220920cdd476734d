//! Voice input settings

use serde::{Deserialize, Serialize};

/// Wake phrase detection and command capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Phrase that switches the listener into command capture (case-insensitive)
    #[serde(default = "default_wake_phrase")]
    pub wake_phrase: String,

    /// Repeated wake phrases within this window are ignored (milliseconds)
    #[serde(default = "default_wake_debounce_ms")]
    pub wake_debounce_ms: u64,

    /// How long to wait for a command after the wake phrase (milliseconds)
    #[serde(default = "default_capture_window_ms")]
    pub capture_window_ms: u64,

    /// Recognition language tag reported in the session banner
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_wake_phrase() -> String {
    "hey go".to_string()
}

fn default_wake_debounce_ms() -> u64 {
    1500
}

fn default_capture_window_ms() -> u64 {
    6000
}

fn default_language() -> String {
    "en-US".to_string()
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            wake_phrase: default_wake_phrase(),
            wake_debounce_ms: default_wake_debounce_ms(),
            capture_window_ms: default_capture_window_ms(),
            language: default_language(),
        }
    }
}
