//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;

/// Commented default configuration written by `soundgo init`
pub const DEFAULT_CONFIG: &str = r#"# SoundGO Configuration
# ======================
#
# Say the wake phrase, then a command. Recognized speech arrives one
# utterance per line (stdin for `soundgo listen`, a file for `soundgo replay`).

# ============================================================================
# DESKTOP - The simulated workspace the virtual cursor moves on
# ============================================================================
#
#   width / height      - Workspace size in pixels; the cursor is clamped to it
#   cursor_start_x/_y   - Where the cursor starts
#   cursor_glyph_size   - Cursor glyph size, keeps the rendered glyph on screen

[desktop]
width = 960
height = 600
cursor_start_x = 200
cursor_start_y = 200
cursor_glyph_size = 64

# ============================================================================
# VOICE - Wake phrase and command capture
# ============================================================================
#
#   wake_phrase         - Phrase that starts command capture (case-insensitive)
#   wake_debounce_ms    - Ignore repeated wake phrases within this window
#   capture_window_ms   - Give up waiting for a command after this long

[voice]
wake_phrase = "hey go"
wake_debounce_ms = 1500
capture_window_ms = 6000
language = "en-US"

# ============================================================================
# TRANSCRIPT
# ============================================================================

[transcript]
# Number of entries kept in the recent-commands list
history_limit = 5

# ============================================================================
# HISTORY - "On this day" facts (`soundgo history`)
# ============================================================================

[history]
api_base_url = "https://history.muffinlabs.com"
timeout_secs = 10
"#;

impl Config {
    /// Get the global config directory path (~/.soundgo/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".soundgo")
    }

    /// Get the global config file path (~/.soundgo/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from `path`, or from the global config path when `None`.
    ///
    /// A missing file is not an error: built-in defaults are used instead.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::global_config_path);

        if !path.exists() {
            tracing::debug!(
                "[soundgo:config] No config at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let config = Self::from_file(&path)?;
        tracing::debug!("[soundgo:config] Loaded {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file (temp file + rename)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        write_atomic(path, &content)
    }
}

/// Write `content` to a sibling temp file, then rename over `path`
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;

    temp_file
        .sync_all()
        .with_context(|| format!("Failed to sync {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to {}", path.display()))?;

    Ok(())
}
