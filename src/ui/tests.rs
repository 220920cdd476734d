//! Unit tests for the text renderers.

use chrono::{Local, TimeZone, Utc};

use super::*;
use crate::config::DesktopSettings;
use crate::desktop::{AppState, CursorState, Desktop};
use crate::domain::{ListeningStatus, TranscriptEntry, TranscriptResult, TranscriptResultStatus};

fn entry(
    raw: &str,
    parsed: Option<&str>,
    result: Option<(TranscriptResultStatus, &str)>,
) -> TranscriptEntry {
    TranscriptEntry {
        id: "id".to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 10, 18, 12, 30, 5).unwrap(),
        raw_text: raw.to_string(),
        parsed_command: parsed.map(str::to_string),
        result: result.map(|(status, message)| TranscriptResult {
            status,
            message: message.to_string(),
        }),
    }
}

#[test]
fn test_result_variants() {
    assert_eq!(ResultVariant::from_result(None), ResultVariant::Pending);
    for (status, variant) in [
        (TranscriptResultStatus::Success, ResultVariant::Ok),
        (TranscriptResultStatus::Warning, ResultVariant::Warning),
        (TranscriptResultStatus::Error, ResultVariant::Error),
    ] {
        let result = TranscriptResult {
            status,
            message: String::new(),
        };
        assert_eq!(ResultVariant::from_result(Some(&result)), variant);
    }
}

#[test]
fn test_render_entry_rows() {
    let e = entry(
        "Hey Go, click",
        Some("Single click"),
        Some((TranscriptResultStatus::Success, "Clicked Desktop.")),
    );
    let text = TranscriptPanel::new().render(std::slice::from_ref(&e));

    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].ends_with("ok      Clicked Desktop."), "{}", lines[0]);
    assert_eq!(lines[1], "  Heard   Hey Go, click");
    assert_eq!(lines[2], "  Parsed  Single click");

    let local = e.timestamp.with_timezone(&Local).format("%H:%M:%S").to_string();
    assert!(lines[0].starts_with(&format!("[{local}]")));
}

#[test]
fn test_render_entry_pending_and_unparsed() {
    let e = entry("mumble", None, None);
    let text = TranscriptPanel::new().render(&[e]);
    assert!(text.contains("pending Pending"));
    assert!(text.contains("  Parsed  —"));
}

#[test]
fn test_panel_shows_newest_entries() {
    let entries: Vec<TranscriptEntry> = (0..4)
        .map(|i| entry(&format!("utterance {i}"), None, None))
        .collect();

    let text = TranscriptPanel::new().with_max_visible(2).render(&entries);
    assert!(!text.contains("utterance 1"));
    assert!(text.contains("utterance 2"));
    assert!(text.contains("utterance 3"));

    assert_eq!(TranscriptPanel::new().render(&[]), "");
}

#[test]
fn test_cursor_glyph_stays_inside_workspace() {
    let cursor = VirtualCursor::default();

    assert_eq!(cursor.render_position(CursorState { x: 200, y: 200 }), (200, 200));
    assert_eq!(cursor.render_position(CursorState { x: 960, y: 600 }), (896, 536));
    assert_eq!(cursor.render_position(CursorState { x: -5, y: 0 }), (0, 0));
    assert_eq!(
        cursor.render(CursorState { x: 960, y: 10 }),
        "translate(896px, 10px)"
    );

    let tiny = VirtualCursor::new(&DesktopSettings {
        width: 32,
        height: 32,
        ..DesktopSettings::default()
    });
    assert_eq!(tiny.render_position(CursorState { x: 20, y: 20 }), (0, 0));
}

#[test]
fn test_shell_boot_sets_clock_and_cursor() {
    let settings = DesktopSettings::default();
    let mut desktop = Desktop::win95(&settings);
    let mut shell = Win95Shell::new(&settings);
    let mut state = AppState::new(&settings);
    state.cursor = CursorState { x: 950, y: 100 };

    let now = Local.with_ymd_and_hms(2024, 10, 18, 9, 5, 0).unwrap();
    shell.boot(&state, Some(&mut desktop), now);

    assert_eq!(shell.clock(), Some("09:05"));
    assert_eq!(shell.cursor_position(), Some((896, 100)));

    let tray = desktop.find_by_id("taskbar-tray").unwrap();
    assert_eq!(desktop.element(tray).unwrap().text_content, "09:05");

    assert_eq!(shell.render_taskbar(&state), "○ Idle | cursor (950, 100) | 09:05");
}

#[test]
fn test_shell_boot_headless() {
    let mut shell = Win95Shell::default();
    let now = Local.with_ymd_and_hms(2024, 10, 18, 23, 59, 0).unwrap();
    shell.boot(&AppState::default(), None, now);
    assert_eq!(shell.clock(), Some("23:59"));
}

#[test]
fn test_status_and_history() {
    assert_eq!(render_status(ListeningStatus::Listening), "● Listening");
    assert_eq!(render_status(ListeningStatus::Idle), "○ Idle");

    assert_eq!(render_command_history(&[]), EMPTY_HISTORY_HINT);
    assert_eq!(
        render_command_history(&["Single click".to_string(), "Move left 5px".to_string()]),
        "1. Single click\n2. Move left 5px"
    );
}
