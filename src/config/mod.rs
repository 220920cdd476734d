//! Configuration loading and management

mod io;
mod settings;

pub use io::DEFAULT_CONFIG;
pub(crate) use io::write_atomic;
pub use settings::{DesktopSettings, HistorySettings, TranscriptSettings, VoiceSettings};

use serde::{Deserialize, Serialize};

/// Main configuration structure (`~/.soundgo/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Simulated workspace geometry
    #[serde(default)]
    pub desktop: DesktopSettings,

    /// Wake phrase and command capture
    #[serde(default)]
    pub voice: VoiceSettings,

    /// Transcript panel behaviour
    #[serde(default)]
    pub transcript: TranscriptSettings,

    /// Today-in-history API
    #[serde(default)]
    pub history: HistorySettings,
}

/// Grammar reference shown by `soundgo grammar` and the session banner
pub const COMMAND_GRAMMAR_REFERENCE: &[&str] = &[
    "mouse left/right/up/down <n> pixels",
    "mouse to x <n> y <m>",
    "click | double click | right click",
    "type <text>",
    "press [ctrl] [shift] [alt] <key>",
];

/// Example utterances for first-time users
pub const COMMAND_EXAMPLES: &[&str] = &[
    "Hey Go, mouse left 150 pixels",
    "Hey Go, mouse to x 400 y 300",
    "Hey Go, click",
    "Hey Go, type hello world",
    "Hey Go, press ctrl s",
];

#[cfg(test)]
mod tests;
