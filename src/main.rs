use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use soundgo::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "soundgo")]
#[command(about = "SoundGO - say \"Hey Go\", then drive a simulated desktop by voice")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.soundgo/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session: one recognized utterance per stdin line
    Listen {
        /// Write the transcript as JSON when the session ends
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Run a recorded script of utterances on a simulated clock
    Replay {
        /// Script file (one utterance per line, `@wait <ms>`, `@error <code>`)
        file: PathBuf,

        /// Simulated time between utterances in milliseconds
        #[arg(long, default_value_t = 2000)]
        step_ms: u64,

        /// Write the transcript as JSON when the script ends
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Parse a command without executing it
    Parse {
        /// The spoken text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print the parse result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the command grammar
    Grammar,

    /// Show a random event that happened on this day in history
    History {
        /// Day to look up as MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Print the event as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize ~/.soundgo/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config;
    let load_config = || Config::load(config_path.as_deref());

    match cli.command.unwrap_or(Commands::Listen { export: None }) {
        Commands::Listen { export } => {
            cli::listen::listen_command(&load_config()?, export.as_deref()).await?;
        }
        Commands::Replay {
            file,
            step_ms,
            export,
        } => {
            cli::replay::replay_command(&load_config()?, &file, step_ms, export.as_deref())
                .await?;
        }
        Commands::Parse { text, json } => {
            cli::parse::parse_command(&load_config()?, &text.join(" "), json)?;
        }
        Commands::Grammar => {
            cli::grammar::grammar_command(&load_config()?);
        }
        Commands::History { date, json } => {
            cli::history::history_command(&load_config()?, date.as_deref(), json).await?;
        }
        Commands::Init { force } => {
            cli::init::init_command(config_path.clone(), force).await?;
        }
    }

    Ok(())
}
