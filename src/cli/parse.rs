//! Parse command implementation

use anyhow::{Result, bail};

use soundgo::command::CommandParser;
use soundgo::config::Config;

/// Parse `text` and print the command (or the parse error)
pub fn parse_command(config: &Config, text: &str, json: bool) -> Result<()> {
    let parser = CommandParser::new(&config.voice.wake_phrase);
    let result = parser.parse(text);

    if json {
        let value = match &result {
            Ok(command) => serde_json::json!({ "ok": true, "command": command }),
            Err(err) => serde_json::json!({ "ok": false, "error": err }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match result {
        Ok(command) => {
            println!("{}", command.summary);
            println!("  type: {}", command.type_name());
            Ok(())
        }
        Err(err) => bail!("{} ({})", err.display_message(), err.code),
    }
}
