//! "Today in history": a random historical event for a calendar day.
//!
//! Facts come from a muffinlabs-compatible API
//! (`GET <base>/date/<month>/<day>`, events under `data.Events`).

mod client;
mod fact;
mod today;

pub use client::{HistoryClient, parse_events};
pub use fact::{HistoryEvent, HistoryLink, pick_random, render_fact};
pub use today::TodayPath;

/// Why no fact could be shown
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// Request failed or returned a non-success status
    #[error("Unable to fetch a fact right now.")]
    Unavailable { detail: String },

    #[error("No historical events were found for this date.")]
    NoEvents,

    /// Response body or randomness source was unusable
    #[error("Something went wrong while grabbing a fact.")]
    Malformed { detail: String },
}
