//! Shared test utilities for SoundGO integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use soundgo::config::{Config, HistorySettings};
use soundgo::domain::{TranscriptEntry, TranscriptResultStatus};
use soundgo::session::{Session, SessionUpdate};

/// A started session over the default desktop
pub fn started_session() -> Session {
    let mut session = Session::new(&Config::default());
    session.start();
    session
}

/// Feed utterances `step_ms` apart, starting one step after `start`
pub fn speak(
    session: &mut Session,
    start: Instant,
    step_ms: u64,
    lines: &[&str],
) -> Vec<SessionUpdate> {
    let mut updates = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let now = start + Duration::from_millis(step_ms * (i as u64 + 1));
        updates.extend(session.hear(line, now));
    }
    updates
}

/// Transcript entries among session updates
pub fn logged(updates: &[SessionUpdate]) -> Vec<TranscriptEntry> {
    updates
        .iter()
        .filter_map(|u| match u {
            SessionUpdate::Logged(entry) => Some(entry.clone()),
            _ => None,
        })
        .collect()
}

/// Status and message of an entry's result
pub fn outcome(entry: &TranscriptEntry) -> (TranscriptResultStatus, String) {
    let result = entry.result.as_ref().expect("entry has a result");
    (result.status, result.message.clone())
}

/// A canned HTTP response
pub struct FakeResponse {
    pub status: u16,
    pub body: String,
}

impl FakeResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

/// Local stand-in for the history API, answering a fixed list of responses
/// in order and recording requested paths
pub struct FakeHistoryApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl FakeHistoryApi {
    pub fn start(responses: Vec<FakeResponse>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("Failed to bind fake API");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("Fake API has an IP address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        let handle = std::thread::spawn(move || {
            for canned in responses {
                let Ok(request) = server.recv() else {
                    return;
                };
                seen.lock().unwrap().push(request.url().to_string());

                let header = tiny_http::Header::from_bytes(
                    &b"Content-Type"[..],
                    &b"application/json"[..],
                )
                .unwrap();
                let response = tiny_http::Response::from_string(canned.body)
                    .with_status_code(canned.status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
            handle: Some(handle),
        }
    }

    pub fn settings(&self) -> HistorySettings {
        HistorySettings {
            api_base_url: self.base_url.clone(),
            timeout_secs: 5,
        }
    }

    /// Wait for all canned responses to be served, then return request paths
    pub fn finish(mut self) -> Vec<String> {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("Fake API thread panicked");
        }
        self.requests.lock().unwrap().clone()
    }
}
