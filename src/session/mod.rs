//! Session wiring: voice events in, parsed and executed commands out.
//!
//! A [`Session`] owns the state store, the simulated desktop and every
//! component between them. Callers feed it utterances, recognition errors and
//! clock ticks with explicit timestamps, and render the returned
//! [`SessionUpdate`]s.

mod script;

use std::time::Instant;

use chrono::Local;

use crate::command::{CommandExecutor, CommandParser};
use crate::config::Config;
use crate::desktop::{AppState, Desktop, Store};
use crate::domain::{
    Command, ListeningStatus, TranscriptEntry, TranscriptResult, TranscriptResultStatus,
};
use crate::transcript::{LogPayload, TranscriptLogger};
use crate::ui::Win95Shell;
use crate::voice::{
    CommandRecognizer, MicrophoneStatus, RecognitionError, RecognitionResult, VoiceEvent,
    WakeListener,
};

pub use script::{ReplayScript, ReplayStep};

/// Raw text logged when a capture times out
pub const NO_SPEECH_TEXT: &str = "[no speech detected]";
/// Raw text logged when recognition fails during capture
pub const NOT_CAPTURED_TEXT: &str = "[command not captured]";

/// Something the caller may want to render
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    Status(ListeningStatus),
    Microphone {
        status: MicrophoneStatus,
        details: Option<String>,
    },
    /// A transcript entry was appended
    Logged(TranscriptEntry),
}

pub struct Session {
    store: Store,
    desktop: Option<Desktop>,
    parser: CommandParser,
    executor: CommandExecutor,
    logger: TranscriptLogger,
    listener: WakeListener,
    recognizer: CommandRecognizer,
    shell: Win95Shell,
}

impl Session {
    /// Session over the default Win95 desktop
    pub fn new(config: &Config) -> Self {
        Self::build(config, Some(Desktop::win95(&config.desktop)))
    }

    /// Session without a desktop surface: moves work, everything else
    /// reports an environment error
    pub fn headless(config: &Config) -> Self {
        Self::build(config, None)
    }

    fn build(config: &Config, desktop: Option<Desktop>) -> Self {
        Self {
            store: Store::new(AppState::new(&config.desktop)),
            desktop,
            parser: CommandParser::new(&config.voice.wake_phrase),
            executor: CommandExecutor::new(&config.desktop),
            logger: TranscriptLogger::new(&config.transcript),
            listener: WakeListener::new(&config.voice),
            recognizer: CommandRecognizer::new(&config.voice),
            shell: Win95Shell::new(&config.desktop),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn desktop(&self) -> Option<&Desktop> {
        self.desktop.as_ref()
    }

    pub fn shell(&self) -> &Win95Shell {
        &self.shell
    }

    /// When the active capture will time out
    pub fn capture_deadline(&self) -> Option<Instant> {
        self.recognizer.deadline()
    }

    /// Boot the shell and start wake detection
    pub fn start(&mut self) -> Vec<SessionUpdate> {
        self.shell
            .boot(self.store.state(), self.desktop.as_mut(), Local::now());

        let mut updates = Vec::new();
        for event in self.listener.start() {
            updates.extend(self.handle(event));
        }
        updates
    }

    /// Route one final recognized utterance.
    ///
    /// During a capture the utterance is the command. Otherwise it is checked
    /// for the wake phrase; a command spoken right after the wake phrase in
    /// the same utterance is captured immediately.
    pub fn hear(&mut self, utterance: &str, now: Instant) -> Vec<SessionUpdate> {
        let mut updates = self.tick(now);

        if self.recognizer.is_capturing() {
            let results = [RecognitionResult::final_text(utterance)];
            if let Some(event) = self.recognizer.on_results(&results, now) {
                updates.extend(self.handle(event));
            }
            return updates;
        }

        let Some(wake) = self.listener.detect(utterance, now) else {
            tracing::debug!("[soundgo:session] Ignoring speech without wake phrase");
            return updates;
        };
        updates.extend(self.handle(wake));

        if let Some(command_text) = self.listener.wake_remainder(utterance) {
            let results = [RecognitionResult::final_text(command_text)];
            if let Some(event) = self.recognizer.on_results(&results, now) {
                updates.extend(self.handle(event));
            }
        }

        updates
    }

    /// Route a recognition error to whichever recognizer is running
    pub fn recognition_error(
        &mut self,
        error: &RecognitionError,
        now: Instant,
    ) -> Vec<SessionUpdate> {
        let mut updates = self.tick(now);

        // `aborted` always comes from stopping a capture
        let event = if self.recognizer.is_capturing() || *error == RecognitionError::Aborted {
            self.recognizer.on_error(error)
        } else {
            self.listener.on_error(error)
        };

        if let Some(event) = event {
            updates.extend(self.handle(event));
        }
        updates
    }

    /// Expire a capture whose window has passed
    pub fn tick(&mut self, now: Instant) -> Vec<SessionUpdate> {
        match self.recognizer.poll_timeout(now) {
            Some(event) => self.handle(event),
            None => Vec::new(),
        }
    }

    /// Apply a voice event
    pub fn handle(&mut self, event: VoiceEvent) -> Vec<SessionUpdate> {
        match event {
            VoiceEvent::Wake { at } => {
                let update = self.set_status(ListeningStatus::Listening);
                self.recognizer.capture(at);
                vec![update]
            }
            VoiceEvent::MicrophoneStatus { status, details } => {
                vec![SessionUpdate::Microphone { status, details }]
            }
            VoiceEvent::CommandRecognized { raw_text } => self.run_command(&raw_text),
            VoiceEvent::CommandTimeout { message } => vec![
                self.set_status(ListeningStatus::Idle),
                self.log(NO_SPEECH_TEXT, None, TranscriptResultStatus::Warning, message),
            ],
            VoiceEvent::CommandError { message } => vec![
                self.set_status(ListeningStatus::Idle),
                self.log(NOT_CAPTURED_TEXT, None, TranscriptResultStatus::Error, message),
            ],
        }
    }

    fn run_command(&mut self, raw_text: &str) -> Vec<SessionUpdate> {
        let mut updates = vec![self.set_status(ListeningStatus::Idle)];

        let command = match self.parser.parse(raw_text) {
            Ok(command) => command,
            Err(err) => {
                tracing::info!("[soundgo:session] Parse failed ({}): {}", err.code, err.message);
                updates.push(self.log(
                    raw_text,
                    None,
                    TranscriptResultStatus::Error,
                    err.display_message(),
                ));
                return updates;
            }
        };

        let result = self
            .executor
            .execute(&command, &mut self.store, self.desktop.as_mut());
        self.shell
            .boot(self.store.state(), self.desktop.as_mut(), Local::now());

        updates.push(self.log(
            raw_text,
            Some(&command),
            result.status.transcript_status(),
            result.message,
        ));
        updates
    }

    fn set_status(&mut self, status: ListeningStatus) -> SessionUpdate {
        self.store.update(|draft| draft.status = status);
        SessionUpdate::Status(status)
    }

    fn log(
        &mut self,
        raw_text: &str,
        command: Option<&Command>,
        status: TranscriptResultStatus,
        message: String,
    ) -> SessionUpdate {
        let state = self.logger.log(
            &mut self.store,
            LogPayload {
                raw_text,
                command,
                result: TranscriptResult { status, message },
            },
        );

        match state.transcript.last() {
            Some(entry) => SessionUpdate::Logged(entry.clone()),
            None => SessionUpdate::Status(state.status),
        }
    }
}
