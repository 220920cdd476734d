use serde::{Deserialize, Serialize};

use super::{HistoryError, TodayPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLink {
    #[serde(default)]
    pub title: String,
    pub link: String,
}

/// One entry of `data.Events`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEvent {
    pub year: String,
    pub text: String,
    #[serde(default)]
    pub links: Vec<HistoryLink>,
}

impl HistoryEvent {
    /// The link offered as "Learn more"
    pub fn primary_link(&self) -> Option<&HistoryLink> {
        self.links.first()
    }
}

/// Pick one event uniformly at random using OS randomness
pub fn pick_random(mut events: Vec<HistoryEvent>) -> Result<HistoryEvent, HistoryError> {
    if events.is_empty() {
        return Err(HistoryError::NoEvents);
    }
    let index = random_index(events.len()).map_err(|e| HistoryError::Malformed {
        detail: format!("Random source failed: {}", e),
    })?;
    Ok(events.swap_remove(index))
}

/// Uniform index in `0..len` (rejection sampling avoids modulo bias)
fn random_index(len: usize) -> Result<usize, getrandom::Error> {
    let len = len as u64;
    let zone = u64::MAX - (u64::MAX % len);
    loop {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes)?;
        let value = u64::from_le_bytes(bytes);
        if value < zone {
            return Ok((value % len) as usize);
        }
    }
}

/// Card text: date header, then the fact or the error
pub fn render_fact(today: &TodayPath, fact: Result<&HistoryEvent, &HistoryError>) -> String {
    let mut out = format!(
        "Today is\n{}\nHere’s something interesting that also happened on this date:\n\n",
        today.label
    );

    match fact {
        Ok(event) => {
            out.push_str(&format!("{}\n{}\n", event.year, event.text));
            if let Some(link) = event.primary_link() {
                out.push_str(&format!("Learn more ↗ {}\n", link.link));
            }
        }
        Err(err) => out.push_str(&format!("{}\n", err)),
    }

    out
}
