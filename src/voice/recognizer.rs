//! Command capture after the wake phrase.

use std::time::{Duration, Instant};

use super::{RecognitionError, RecognitionResult, VoiceEvent};
use crate::config::VoiceSettings;

pub const TIMEOUT_MESSAGE: &str = "No speech detected before timeout.";

#[derive(Debug, Clone, Copy)]
struct Capture {
    deadline: Instant,
}

/// Captures one command per wake.
///
/// A capture ends on the first non-empty final transcript, on timeout, or on
/// error. Only one capture is active at a time.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    window: Duration,
    active: Option<Capture>,
    /// Our own stop produces an `aborted` error that must not surface
    ignore_aborted: bool,
}

impl Default for CommandRecognizer {
    fn default() -> Self {
        Self::new(&VoiceSettings::default())
    }
}

impl CommandRecognizer {
    pub fn new(settings: &VoiceSettings) -> Self {
        Self {
            window: Duration::from_millis(settings.capture_window_ms),
            active: None,
            ignore_aborted: false,
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.active.is_some()
    }

    /// When the active capture times out
    pub fn deadline(&self) -> Option<Instant> {
        self.active.map(|c| c.deadline)
    }

    /// Open a capture window, replacing any active one
    pub fn capture(&mut self, now: Instant) {
        tracing::info!("[soundgo:voice] Waiting for command after wake phrase");
        if self.active.is_some() {
            self.stop(true);
        } else {
            self.ignore_aborted = false;
        }
        self.active = Some(Capture {
            deadline: now + self.window,
        });
    }

    /// Feed recognition results. Emits `CommandRecognized` for the first
    /// non-empty concatenation of final results and closes the capture.
    pub fn on_results(&mut self, results: &[RecognitionResult], now: Instant) -> Option<VoiceEvent> {
        if let Some(event) = self.poll_timeout(now) {
            tracing::debug!("[soundgo:voice] Results arrived after the capture window");
            return Some(event);
        }
        self.active?;

        let transcript: String = results
            .iter()
            .filter(|r| r.is_final)
            .map(|r| r.transcript.as_str())
            .collect();
        let normalized = transcript.trim();
        if normalized.is_empty() {
            return None;
        }

        self.stop(true);
        Some(VoiceEvent::CommandRecognized {
            raw_text: normalized.to_string(),
        })
    }

    /// Emit `CommandTimeout` if the active capture has expired
    pub fn poll_timeout(&mut self, now: Instant) -> Option<VoiceEvent> {
        let capture = self.active?;
        if now < capture.deadline {
            return None;
        }

        tracing::info!("[soundgo:voice] Capture timed out without speech");
        self.stop(true);
        Some(VoiceEvent::CommandTimeout {
            message: TIMEOUT_MESSAGE.to_string(),
        })
    }

    /// Handle a recognition error. A single `aborted` following our own stop
    /// is swallowed, as is any `aborted` with no capture open. Other errors
    /// end the capture with `CommandError`.
    pub fn on_error(&mut self, error: &RecognitionError) -> Option<VoiceEvent> {
        if *error == RecognitionError::Aborted && (self.ignore_aborted || self.active.is_none()) {
            tracing::debug!("[soundgo:voice] Ignoring aborted recognition");
            self.ignore_aborted = false;
            return None;
        }
        self.ignore_aborted = false;

        tracing::warn!("[soundgo:voice] Speech recognition error: {}", error);
        self.stop(false);
        Some(VoiceEvent::CommandError {
            message: error.code().to_string(),
        })
    }

    fn stop(&mut self, suppress_aborted: bool) {
        if self.active.take().is_some() && suppress_aborted {
            self.ignore_aborted = true;
        }
    }
}
