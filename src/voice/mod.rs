//! Voice input for the session
//!
//! This module provides:
//! 1. `WakeListener`: watches recognized speech for the wake phrase and
//!    tracks the input (microphone) status
//! 2. `CommandRecognizer`: a single capture window after the wake phrase that
//!    yields exactly one command transcript, a timeout, or an error
//!
//! Recognition results arrive as text from the caller (stdin lines or a
//! replay script), so both types are plain state machines driven by explicit
//! timestamps.

mod listener;
mod recognizer;
mod types;

pub use listener::WakeListener;
pub use recognizer::CommandRecognizer;
pub use types::{MicrophoneStatus, RecognitionError, RecognitionResult, VoiceEvent};
