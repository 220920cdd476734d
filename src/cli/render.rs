//! Terminal output shared by `listen` and `replay`

use soundgo::session::{Session, SessionUpdate};
use soundgo::ui::{TranscriptPanel, render_command_history, render_status};

/// Print session updates as they happen
pub fn print_updates(session: &Session, updates: &[SessionUpdate]) {
    let panel = TranscriptPanel::new();

    for update in updates {
        match update {
            SessionUpdate::Status(status) => println!("{}", render_status(*status)),
            SessionUpdate::Microphone { status, details } => match details {
                Some(details) => println!("Microphone: {} ({})", status, details),
                None => println!("Microphone: {}", status),
            },
            SessionUpdate::Logged(entry) => {
                println!("{}", panel.render(std::slice::from_ref(entry)));
                println!("{}", session.shell().render_taskbar(session.state()));
            }
        }
    }
}

/// Print the recent-commands list
pub fn print_summary(session: &Session) {
    println!("\nRecent commands:");
    println!("{}", render_command_history(&session.state().command_history));
}
