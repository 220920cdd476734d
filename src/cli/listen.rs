//! Interactive session over stdin

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use soundgo::config::{COMMAND_EXAMPLES, Config};
use soundgo::session::Session;
use soundgo::transcript::export_json;
use soundgo::voice::RecognitionError;

use super::render::{print_summary, print_updates};

/// Read recognized utterances from stdin until EOF.
///
/// Lines starting with `@error <code>` simulate a recognition error. While a
/// command capture is open, the capture window is enforced in real time.
pub async fn listen_command(config: &Config, export: Option<&Path>) -> Result<()> {
    let mut session = Session::new(config);

    println!(
        "SoundGO listening ({}). Say \"{}\", then a command. Ctrl-D to quit.",
        config.voice.language, config.voice.wake_phrase
    );
    for example in COMMAND_EXAMPLES {
        println!("  e.g. {}", example);
    }
    println!();

    let updates = session.start();
    print_updates(&session, &updates);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let next = match session.capture_deadline() {
            Some(deadline) => {
                let wait = deadline.saturating_duration_since(Instant::now());
                match tokio::time::timeout(wait, lines.next_line()).await {
                    Ok(line) => line.context("Failed to read stdin")?,
                    Err(_) => {
                        let updates = session.tick(Instant::now());
                        print_updates(&session, &updates);
                        continue;
                    }
                }
            }
            None => lines.next_line().await.context("Failed to read stdin")?,
        };

        let Some(line) = next else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let now = Instant::now();
        let updates = match line.strip_prefix("@error") {
            Some(code) if !code.trim().is_empty() => {
                session.recognition_error(&RecognitionError::from_code(code), now)
            }
            _ => session.hear(line, now),
        };
        print_updates(&session, &updates);
    }

    print_summary(&session);

    if let Some(path) = export {
        export_json(session.state(), path)?;
        println!("Transcript written to {}", path.display());
    }

    Ok(())
}
