//! Wake phrase detection.

use std::time::{Duration, Instant};

use super::{MicrophoneStatus, RecognitionError, RecognitionResult, VoiceEvent};
use crate::command::WakePhrase;
use crate::config::VoiceSettings;

/// Listens for the wake phrase in recognized speech.
///
/// A wake phrase heard within `debounce` of the previous one is ignored.
#[derive(Debug, Clone)]
pub struct WakeListener {
    wake: WakePhrase,
    debounce: Duration,
    last_wake: Option<Instant>,
    status: MicrophoneStatus,
    active: bool,
}

impl Default for WakeListener {
    fn default() -> Self {
        Self::new(&VoiceSettings::default())
    }
}

impl WakeListener {
    pub fn new(settings: &VoiceSettings) -> Self {
        Self {
            wake: WakePhrase::new(&settings.wake_phrase),
            debounce: Duration::from_millis(settings.wake_debounce_ms),
            last_wake: None,
            status: MicrophoneStatus::Idle,
            active: false,
        }
    }

    pub fn status(&self) -> MicrophoneStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn wake_phrase(&self) -> &WakePhrase {
        &self.wake
    }

    /// Bring up the input and start wake detection.
    ///
    /// Returns the status transitions, in order. Starting an already ready
    /// listener is a no-op.
    pub fn start(&mut self) -> Vec<VoiceEvent> {
        if self.status == MicrophoneStatus::Ready {
            return Vec::new();
        }

        let events = vec![
            self.set_status(MicrophoneStatus::RequestingPermission, None),
            self.set_status(MicrophoneStatus::Ready, None),
        ];
        self.active = true;
        tracing::info!(
            "[soundgo:voice] Listening for wake phrase \"{}\"",
            self.wake.phrase()
        );
        events
    }

    /// Mark speech input as unavailable
    pub fn unsupported(&mut self, details: &str) -> VoiceEvent {
        self.active = false;
        self.set_status(MicrophoneStatus::Unsupported, Some(details.to_string()))
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.status = MicrophoneStatus::Idle;
    }

    /// Check final results for the wake phrase
    pub fn process_results(
        &mut self,
        results: &[RecognitionResult],
        now: Instant,
    ) -> Option<VoiceEvent> {
        let mut wake = None;
        for result in results.iter().filter(|r| r.is_final) {
            if let Some(event) = self.detect(&result.transcript, now) {
                wake = Some(event);
            }
        }
        wake
    }

    /// Emit `Wake` if the transcript contains the wake phrase and the
    /// debounce window since the last wake has passed
    pub fn detect(&mut self, transcript: &str, now: Instant) -> Option<VoiceEvent> {
        if !self.active {
            return None;
        }

        let normalized = transcript.trim().to_lowercase();
        if normalized.is_empty() || !self.wake.occurs_in(&normalized) {
            return None;
        }

        if let Some(last) = self.last_wake {
            if now.saturating_duration_since(last) < self.debounce {
                tracing::info!("[soundgo:voice] Wake phrase ignored due to debounce window");
                return None;
            }
        }

        self.last_wake = Some(now);
        tracing::info!("[soundgo:voice] Wake phrase detected");
        Some(VoiceEvent::Wake { at: now })
    }

    /// Command spoken in the same utterance after the wake phrase, if any.
    /// The returned text starts with the wake phrase.
    pub fn wake_remainder<'a>(&self, transcript: &'a str) -> Option<&'a str> {
        self.wake.command_after(transcript)
    }

    /// Handle a wake recognition error.
    ///
    /// Permission errors move the input into `Error` and stop detection;
    /// anything else restarts detection and produces no event.
    pub fn on_error(&mut self, error: &RecognitionError) -> Option<VoiceEvent> {
        tracing::warn!("[soundgo:voice] Wake recognition error: {}", error);

        if error.is_permission_denied() {
            self.active = false;
            return Some(self.set_status(
                MicrophoneStatus::Error,
                Some("Wake recognition blocked by input permissions.".to_string()),
            ));
        }

        tracing::debug!("[soundgo:voice] Restarting wake recognition");
        None
    }

    fn set_status(&mut self, status: MicrophoneStatus, details: Option<String>) -> VoiceEvent {
        self.status = status;
        match &details {
            Some(d) => tracing::info!("[soundgo:voice] Microphone status: {} ({})", status, d),
            None => tracing::info!("[soundgo:voice] Microphone status: {}", status),
        }
        VoiceEvent::MicrophoneStatus { status, details }
    }
}
