//! Deterministic replay of a recorded script

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use soundgo::config::Config;
use soundgo::session::{ReplayScript, Session};
use soundgo::transcript::export_json;

use super::render::{print_summary, print_updates};

pub async fn replay_command(
    config: &Config,
    file: &Path,
    step_ms: u64,
    export: Option<&Path>,
) -> Result<()> {
    let source = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read script: {}", file.display()))?;
    let script = ReplayScript::parse(&source)
        .with_context(|| format!("Invalid script: {}", file.display()))?;

    let mut session = Session::new(config);
    let updates = session.start();
    print_updates(&session, &updates);

    let start = Instant::now();
    let (updates, end) = script.run(&mut session, start, Duration::from_millis(step_ms));
    print_updates(&session, &updates);

    // Let a capture left open at the end of the script expire
    let updates = session.tick(end + Duration::from_millis(config.voice.capture_window_ms));
    print_updates(&session, &updates);

    print_summary(&session);

    if let Some(path) = export {
        export_json(session.state(), path)?;
        println!("Transcript written to {}", path.display());
    }

    Ok(())
}
