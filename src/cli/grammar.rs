//! Grammar command implementation

use soundgo::command::keys::KEY_NAMES;
use soundgo::config::{COMMAND_EXAMPLES, COMMAND_GRAMMAR_REFERENCE, Config};

/// Print the command grammar, the known key names and examples
pub fn grammar_command(config: &Config) {
    println!("Wake phrase: \"{}\"\n", config.voice.wake_phrase);

    println!("Commands:");
    for line in COMMAND_GRAMMAR_REFERENCE {
        println!("  {}", line);
    }

    println!("\nKeys:");
    let names: Vec<&str> = KEY_NAMES.iter().map(|(name, _)| *name).collect();
    println!("  {}, a-z, 0-9, f1-f12", names.join(", "));
    println!("  Modifiers: ctrl (control), shift, alt");

    println!("\nExamples:");
    for example in COMMAND_EXAMPLES {
        println!("  {}", example);
    }
}
