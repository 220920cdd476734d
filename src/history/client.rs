use std::time::Duration;

use serde::Deserialize;

use super::{HistoryError, HistoryEvent, TodayPath, pick_random};
use crate::config::HistorySettings;

const USER_AGENT: &str = concat!("soundgo/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    data: Option<PayloadData>,
}

#[derive(Debug, Deserialize)]
struct PayloadData {
    #[serde(rename = "Events", default)]
    events: Vec<HistoryEvent>,
}

/// Extract `data.Events` from a response body. Missing `data` or `Events`
/// yields an empty list.
pub fn parse_events(body: &str) -> Result<Vec<HistoryEvent>, HistoryError> {
    let payload: Payload = serde_json::from_str(body).map_err(|e| HistoryError::Malformed {
        detail: format!("Failed to parse JSON: {}", e),
    })?;
    Ok(payload.data.map(|d| d.events).unwrap_or_default())
}

/// Blocking client for the history API
#[derive(Clone)]
pub struct HistoryClient {
    base_url: String,
    agent: ureq::Agent,
}

impl HistoryClient {
    pub fn new(settings: &HistorySettings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build();

        Self {
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all events for a day
    pub fn fetch_events(&self, month: u32, day: u32) -> Result<Vec<HistoryEvent>, HistoryError> {
        let url = format!("{}/date/{}/{}", self.base_url, month, day);
        tracing::debug!("[soundgo:history] GET {}", url);

        let response = match self.agent.get(&url).set("User-Agent", USER_AGENT).call() {
            Ok(r) => r,
            Err(ureq::Error::Status(code, _)) => {
                tracing::warn!("[soundgo:history] {} returned HTTP {}", url, code);
                return Err(HistoryError::Unavailable {
                    detail: format!("HTTP {}", code),
                });
            }
            Err(e) => {
                tracing::warn!("[soundgo:history] Request to {} failed: {}", url, e);
                return Err(HistoryError::Unavailable {
                    detail: e.to_string(),
                });
            }
        };

        let body = response.into_string().map_err(|e| HistoryError::Unavailable {
            detail: format!("Failed to read response: {}", e),
        })?;

        let events = parse_events(&body)?;
        tracing::debug!("[soundgo:history] {} events for {}/{}", events.len(), month, day);
        Ok(events)
    }

    /// Fetch the day's events and pick one at random
    pub fn random_fact(&self, today: &TodayPath) -> Result<HistoryEvent, HistoryError> {
        let events = self.fetch_events(today.month, today.day)?;
        pick_random(events)
    }
}
