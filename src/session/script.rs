//! Replay scripts: recorded utterances driven through a session on a
//! simulated clock.
//!
//! ```text
//! # comment
//! hey go
//! mouse left 150 pixels
//! @wait 7000
//! @error network
//! ```
//!
//! Every utterance advances the clock by the step interval first. `@wait`
//! advances it by the given milliseconds and lets pending captures expire.
//! `@error` reports a recognition error with the given code.

use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};

use super::{Session, SessionUpdate};
use crate::voice::RecognitionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayStep {
    Utterance(String),
    Wait(Duration),
    Error(RecognitionError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayScript {
    steps: Vec<ReplayStep>,
}

impl ReplayScript {
    pub fn parse(source: &str) -> Result<Self> {
        let mut steps = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some(directive) = line.strip_prefix('@') else {
                steps.push(ReplayStep::Utterance(line.to_string()));
                continue;
            };

            let (name, arg) = directive
                .split_once(char::is_whitespace)
                .map(|(n, a)| (n, a.trim()))
                .unwrap_or((directive, ""));

            let step = match name {
                "wait" => {
                    let ms: u64 = arg.parse().with_context(|| {
                        format!("line {}: invalid @wait \"{}\"", index + 1, arg)
                    })?;
                    ReplayStep::Wait(Duration::from_millis(ms))
                }
                "error" => {
                    if arg.is_empty() {
                        bail!("line {}: @error needs an error code", index + 1);
                    }
                    ReplayStep::Error(RecognitionError::from_code(arg))
                }
                other => bail!("line {}: unknown directive @{}", index + 1, other),
            };
            steps.push(step);
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[ReplayStep] {
        &self.steps
    }

    /// Drive the script through `session` starting at `start`.
    ///
    /// Returns all updates in order and the final simulated time.
    pub fn run(
        &self,
        session: &mut Session,
        start: Instant,
        step: Duration,
    ) -> (Vec<SessionUpdate>, Instant) {
        let mut now = start;
        let mut updates = Vec::new();

        for replay_step in &self.steps {
            match replay_step {
                ReplayStep::Utterance(text) => {
                    now += step;
                    tracing::debug!("[soundgo:replay] hear {:?}", text);
                    updates.extend(session.hear(text, now));
                }
                ReplayStep::Wait(duration) => {
                    now += *duration;
                    updates.extend(session.tick(now));
                }
                ReplayStep::Error(error) => {
                    updates.extend(session.recognition_error(error, now));
                }
            }
        }

        (updates, now)
    }
}
