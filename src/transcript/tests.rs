//! Unit tests for the transcript logger.

use super::*;
use crate::config::TranscriptSettings;
use crate::desktop::Store;
use crate::domain::{
    ClickKind, Command, CommandKind, TranscriptResult, TranscriptResultStatus,
};

fn click_command(summary: &str) -> Command {
    Command::new(
        CommandKind::MouseClick {
            click: ClickKind::Single,
        },
        summary,
        "click",
    )
}

fn ok(message: &str) -> TranscriptResult {
    TranscriptResult {
        status: TranscriptResultStatus::Success,
        message: message.to_string(),
    }
}

#[test]
fn test_log_without_command() {
    let logger = TranscriptLogger::default();
    let mut store = Store::default();

    let state = logger.log(
        &mut store,
        LogPayload {
            raw_text: "hey go banana",
            command: None,
            result: TranscriptResult {
                status: TranscriptResultStatus::Error,
                message: "No matching command grammar found.".to_string(),
            },
        },
    );

    assert_eq!(state.transcript.len(), 1);
    let entry = &state.transcript[0];
    assert_eq!(entry.raw_text, "hey go banana");
    assert_eq!(entry.parsed_command, None);
    assert_eq!(
        entry.result.as_ref().map(|r| r.status),
        Some(TranscriptResultStatus::Error)
    );
    assert!(uuid::Uuid::parse_str(&entry.id).is_ok());
    assert!(state.command_history.is_empty());
    assert!(state.last_command.is_none());
}

#[test]
fn test_log_with_command_updates_history() {
    let logger = TranscriptLogger::default();
    let mut store = Store::default();
    let command = click_command("Single click");

    let state = logger.log(
        &mut store,
        LogPayload {
            raw_text: "click",
            command: Some(&command),
            result: ok("Clicked Desktop."),
        },
    );

    assert_eq!(
        state.transcript[0].parsed_command.as_deref(),
        Some("Single click")
    );
    assert_eq!(state.last_command.as_ref(), Some(&command));
    assert_eq!(state.command_history, vec!["Single click".to_string()]);
}

#[test]
fn test_command_history_newest_first_and_capped() {
    let logger = TranscriptLogger::new(&TranscriptSettings { history_limit: 3 });
    let mut store = Store::default();

    for i in 0..5 {
        let command = click_command(&format!("command {i}"));
        logger.log(
            &mut store,
            LogPayload {
                raw_text: "click",
                command: Some(&command),
                result: ok("done"),
            },
        );
    }

    let state = store.snapshot();
    assert_eq!(state.transcript.len(), 5);
    assert_eq!(
        state.command_history,
        vec!["command 4", "command 3", "command 2"]
    );
}

#[test]
fn test_entry_ids_are_unique() {
    let logger = TranscriptLogger::default();
    let mut store = Store::default();
    for _ in 0..2 {
        logger.log(
            &mut store,
            LogPayload {
                raw_text: "x",
                command: None,
                result: ok("x"),
            },
        );
    }
    let state = store.snapshot();
    assert_ne!(state.transcript[0].id, state.transcript[1].id);
}

#[test]
fn test_export_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("transcript.json");

    let logger = TranscriptLogger::default();
    let mut store = Store::default();
    let command = click_command("Single click");
    logger.log(
        &mut store,
        LogPayload {
            raw_text: "Hey Go, click",
            command: Some(&command),
            result: ok("Clicked Desktop."),
        },
    );

    export_json(store.state(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let export: TranscriptExport = serde_json::from_str(&content).unwrap();
    assert_eq!(export.entries, store.state().transcript);
    assert_eq!(export.command_history, vec!["Single click".to_string()]);

    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["entries"][0]["result"]["status"], "SUCCESS");
    assert_eq!(value["entries"][0]["raw_text"], "Hey Go, click");
}
