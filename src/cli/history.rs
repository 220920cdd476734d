//! History command implementation

use anyhow::{Context, Result};
use chrono::{Datelike, Local};

use soundgo::config::Config;
use soundgo::history::{HistoryClient, TodayPath, render_fact};

/// Print a random event for today (or `--date MM-DD`)
pub async fn history_command(config: &Config, date: Option<&str>, json: bool) -> Result<()> {
    let today = match date {
        Some(value) => TodayPath::parse_month_day(value, Local::now().year())?,
        None => TodayPath::today(),
    };

    let client = HistoryClient::new(&config.history);
    let lookup = today.clone();
    let fact = tokio::task::spawn_blocking(move || client.random_fact(&lookup))
        .await
        .context("History lookup task failed")?;

    if let Err(err) = &fact {
        tracing::debug!("[soundgo:history] Lookup failed: {:?}", err);
    }

    if json {
        let value = match &fact {
            Ok(event) => serde_json::json!({ "date": today.label, "event": event }),
            Err(err) => serde_json::json!({ "date": today.label, "error": err.to_string() }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print!("{}", render_fact(&today, fact.as_ref()));
    println!("\nPowered by the public history API at {}.", config.history.api_base_url);
    Ok(())
}
