//! Voice event and status types.

use std::time::Instant;

use serde::Serialize;

/// Input device status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MicrophoneStatus {
    #[default]
    Idle,
    RequestingPermission,
    Ready,
    /// Input blocked, e.g. permission denied
    Error,
    /// No speech input available at all
    Unsupported,
}

impl std::fmt::Display for MicrophoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MicrophoneStatus::Idle => write!(f, "IDLE"),
            MicrophoneStatus::RequestingPermission => write!(f, "REQUESTING_PERMISSION"),
            MicrophoneStatus::Ready => write!(f, "READY"),
            MicrophoneStatus::Error => write!(f, "ERROR"),
            MicrophoneStatus::Unsupported => write!(f, "UNSUPPORTED"),
        }
    }
}

/// One recognition result; only final results are acted on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionResult {
    pub transcript: String,
    pub is_final: bool,
}

impl RecognitionResult {
    pub fn final_text(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: true,
        }
    }

    pub fn interim(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: false,
        }
    }
}

/// Speech recognition error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    /// Recognition was stopped, usually by us
    Aborted,
    NoSpeech,
    AudioCapture,
    Network,
    NotAllowed,
    ServiceNotAllowed,
    Other(String),
}

impl RecognitionError {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "aborted" => RecognitionError::Aborted,
            "no-speech" => RecognitionError::NoSpeech,
            "audio-capture" => RecognitionError::AudioCapture,
            "network" => RecognitionError::Network,
            "not-allowed" => RecognitionError::NotAllowed,
            "service-not-allowed" => RecognitionError::ServiceNotAllowed,
            other => RecognitionError::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            RecognitionError::Aborted => "aborted",
            RecognitionError::NoSpeech => "no-speech",
            RecognitionError::AudioCapture => "audio-capture",
            RecognitionError::Network => "network",
            RecognitionError::NotAllowed => "not-allowed",
            RecognitionError::ServiceNotAllowed => "service-not-allowed",
            RecognitionError::Other(code) => code,
        }
    }

    /// Permission failures stop wake detection for good
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            RecognitionError::NotAllowed | RecognitionError::ServiceNotAllowed
        )
    }
}

impl std::fmt::Display for RecognitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Events emitted by the listener and recognizer
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceEvent {
    /// Wake phrase heard
    Wake { at: Instant },
    /// Input status changed
    MicrophoneStatus {
        status: MicrophoneStatus,
        details: Option<String>,
    },
    /// A command transcript was captured
    CommandRecognized { raw_text: String },
    /// The capture window closed without speech
    CommandTimeout { message: String },
    /// Recognition failed during capture
    CommandError { message: String },
}
