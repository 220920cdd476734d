//! Unit tests for command execution.

use super::*;
use crate::command::CommandParser;
use crate::desktop::{Element, ElementKind, EventDetail, EventType, Rect};

fn parse(text: &str) -> Command {
    CommandParser::default().parse(text).unwrap()
}

fn setup() -> (CommandExecutor, Store, Desktop) {
    let settings = DesktopSettings::default();
    (
        CommandExecutor::new(&settings),
        Store::default(),
        Desktop::win95(&settings),
    )
}

fn event_types(desktop: &Desktop) -> Vec<EventType> {
    desktop.events().iter().map(|e| e.event_type).collect()
}

#[test]
fn test_relative_move() {
    let (executor, mut store, _) = setup();

    let result = executor.execute(&parse("mouse left 150 pixels"), &mut store, None);
    assert_eq!(result.status, ExecutionStatus::Success);
    assert_eq!(result.message, "Moved cursor left 150px.");
    assert_eq!(store.state().cursor.x, 50);
    assert_eq!(store.state().cursor.y, 200);
    assert_eq!(
        store.state().last_command.as_ref().map(|c| c.summary.as_str()),
        Some("Move left 150px")
    );
}

#[test]
fn test_relative_move_clamps() {
    let (executor, mut store, _) = setup();

    let result = executor.execute(&parse("mouse up 500 pixels"), &mut store, None);
    assert_eq!(result.status, ExecutionStatus::SuccessWithClamp);
    assert_eq!(
        result.message,
        "Moved cursor up 500px. Clamped to workspace edges."
    );
    assert_eq!(store.state().cursor.y, 0);

    executor.execute(&parse("mouse right 5000 pixels"), &mut store, None);
    assert_eq!(store.state().cursor.x, 960);
}

#[test]
fn test_absolute_move_clamps_and_reports_requested_position() {
    let (executor, mut store, _) = setup();

    let result = executor.execute(&parse("mouse to x 400 y 300"), &mut store, None);
    assert_eq!(result.status, ExecutionStatus::Success);
    assert_eq!(result.message, "Moved cursor to (400, 300).");

    let result = executor.execute(&parse("mouse to x 2000 y 100"), &mut store, None);
    assert_eq!(result.status, ExecutionStatus::SuccessWithClamp);
    assert_eq!(
        result.message,
        "Moved cursor to (2000, 100). Clamped within workspace."
    );
    assert_eq!(store.state().cursor.x, 960);
    assert_eq!(store.state().cursor.y, 100);
}

#[test]
fn test_click_requires_desktop() {
    let (executor, mut store, _) = setup();
    let result = executor.execute(&parse("click"), &mut store, None);
    assert_eq!(result.status, ExecutionStatus::ErrorEnvironment);
}

#[test]
fn test_click_focuses_target_and_dispatches_sequence() {
    let (executor, mut store, mut desktop) = setup();

    let result = executor.execute(&parse("click"), &mut store, Some(&mut desktop));
    assert_eq!(result.status, ExecutionStatus::Success);
    assert_eq!(result.message, "Clicked Untitled - Notepad.");
    assert_eq!(result.target_description.as_deref(), Some("Untitled - Notepad"));

    let notepad = desktop.find_by_id("notepad-text").unwrap();
    assert_eq!(desktop.active_element(), notepad);
    assert_eq!(
        event_types(&desktop),
        vec![
            EventType::PointerDown,
            EventType::MouseDown,
            EventType::PointerUp,
            EventType::MouseUp,
            EventType::Click,
        ]
    );
    assert!(desktop.events().iter().all(|e| e.target == notepad));
    match &desktop.events()[0].detail {
        EventDetail::Mouse(init) => {
            assert_eq!(init.button, 0);
            assert_eq!((init.client_x, init.client_y), (200, 200));
        }
        other => panic!("unexpected detail: {other:?}"),
    }
}

#[test]
fn test_double_click_sequence() {
    let (executor, mut store, mut desktop) = setup();
    executor.execute(&parse("mouse to x 40 y 40"), &mut store, None);

    let result = executor.execute(&parse("double click"), &mut store, Some(&mut desktop));
    assert_eq!(result.message, "Double-clicked #icon-my-computer.");
    assert_eq!(
        event_types(&desktop),
        vec![
            EventType::PointerDown,
            EventType::MouseDown,
            EventType::PointerUp,
            EventType::MouseUp,
            EventType::Click,
            EventType::PointerDown,
            EventType::MouseDown,
            EventType::PointerUp,
            EventType::MouseUp,
            EventType::Click,
            EventType::DblClick,
        ]
    );
}

#[test]
fn test_right_click_sequence_uses_button_two() {
    let (executor, mut store, mut desktop) = setup();

    let result = executor.execute(&parse("right click"), &mut store, Some(&mut desktop));
    assert_eq!(result.message, "Right-clicked Untitled - Notepad.");
    assert_eq!(
        event_types(&desktop),
        vec![
            EventType::PointerDown,
            EventType::MouseDown,
            EventType::PointerUp,
            EventType::MouseUp,
            EventType::ContextMenu,
        ]
    );
    assert!(desktop.events().iter().all(|e| match &e.detail {
        EventDetail::Mouse(init) => init.button == 2,
        _ => false,
    }));
}

#[test]
fn test_click_with_nothing_under_cursor() {
    let settings = DesktopSettings::default();
    let executor = CommandExecutor::new(&settings);
    let mut store = Store::default();
    // Surface smaller than the workspace the executor clamps to
    let mut desktop = Desktop::new(100, 100);

    executor.execute(&parse("mouse to x 500 y 500"), &mut store, None);
    let command = parse("click");
    let result = executor.execute(&command, &mut store, Some(&mut desktop));

    assert_eq!(result.status, ExecutionStatus::ErrorNoTarget);
    assert_eq!(result.message, "No clickable target beneath the virtual cursor.");
    assert_eq!(store.state().last_command.as_ref(), Some(&command));
    assert!(desktop.events().is_empty());
}

#[test]
fn test_click_on_bottom_edge_hits_taskbar() {
    let (executor, mut store, mut desktop) = setup();

    let moved = executor.execute(&parse("mouse down 1000 pixels"), &mut store, None);
    assert_eq!(moved.status, ExecutionStatus::SuccessWithClamp);
    assert_eq!(store.state().cursor.y, 600);

    let result = executor.execute(&parse("click"), &mut store, Some(&mut desktop));
    let taskbar = desktop.find_by_id("taskbar").unwrap();

    assert_eq!(result.status, ExecutionStatus::Success);
    assert_eq!(
        result.target_description,
        Some(describe_element(&desktop, taskbar))
    );
    assert!(desktop.events().iter().all(|e| e.target == taskbar));
}

#[test]
fn test_click_on_right_edge_hits_root() {
    let (executor, mut store, mut desktop) = setup();

    executor.execute(&parse("mouse to x 960 y 10"), &mut store, None);
    let result = executor.execute(&parse("click"), &mut store, Some(&mut desktop));

    assert_eq!(result.status, ExecutionStatus::Success);
    assert_eq!(result.message, "Clicked Desktop.");
    assert!(desktop.events().iter().all(|e| e.target == desktop.root()));
}

#[test]
fn test_type_requires_focused_text_field() {
    let (executor, mut store, mut desktop) = setup();

    let result = executor.execute(&parse("type hello"), &mut store, Some(&mut desktop));
    assert_eq!(result.status, ExecutionStatus::ErrorNoFocus);
    assert_eq!(result.message, "No focused text field available for typing.");

    // A checkbox takes focus but not text
    let checkbox = desktop.find_by_id("run-as-admin").unwrap();
    desktop.focus(checkbox);
    let result = executor.execute(&parse("type hello"), &mut store, Some(&mut desktop));
    assert_eq!(result.status, ExecutionStatus::ErrorNoFocus);
}

#[test]
fn test_type_into_focused_field() {
    let (executor, mut store, mut desktop) = setup();
    executor.execute(&parse("click"), &mut store, Some(&mut desktop));
    desktop.take_events();

    let result = executor.execute(
        &parse("Hey Go, type Hello World."),
        &mut store,
        Some(&mut desktop),
    );
    assert_eq!(result.status, ExecutionStatus::Success);
    assert_eq!(result.message, "Typed \"Hello World.\" into Untitled - Notepad.");

    let notepad = desktop.find_by_id("notepad-text").unwrap();
    assert_eq!(desktop.element(notepad).unwrap().value, "Hello World.");
    assert_eq!(event_types(&desktop), vec![EventType::Input, EventType::Change]);
    match &desktop.events()[0].detail {
        EventDetail::Input { input_type, data } => {
            assert_eq!(input_type, "insertText");
            assert_eq!(data, "Hello World.");
        }
        other => panic!("unexpected detail: {other:?}"),
    }
}

#[test]
fn test_type_message_truncates_long_text() {
    let (executor, mut store, mut desktop) = setup();
    let input = desktop.find_by_id("run-input").unwrap();
    desktop.focus(input);

    let text = "a".repeat(50);
    let result = executor.execute(&parse(&format!("type {text}")), &mut store, Some(&mut desktop));
    let expected = format!("Typed \"{}…\" into Open:.", "a".repeat(39));
    assert_eq!(result.message, expected);
    assert_eq!(desktop.element(input).unwrap().value, text);
}

#[test]
fn test_key_press_sequence() {
    let (executor, mut store, mut desktop) = setup();
    executor.execute(&parse("click"), &mut store, Some(&mut desktop));
    desktop.take_events();

    let result = executor.execute(&parse("press ctrl shift s"), &mut store, Some(&mut desktop));
    assert_eq!(result.status, ExecutionStatus::Success);
    assert_eq!(result.message, "Sent \"Press CTRL+SHIFT+S\" to Untitled - Notepad.");

    let keys: Vec<(EventType, String, bool, bool)> = desktop
        .events()
        .iter()
        .map(|e| match &e.detail {
            EventDetail::Keyboard(k) => (e.event_type, k.code.clone(), k.ctrl_key, k.shift_key),
            other => panic!("unexpected detail: {other:?}"),
        })
        .collect();

    assert_eq!(
        keys,
        vec![
            (EventType::KeyDown, "ControlLeft".to_string(), true, false),
            (EventType::KeyDown, "ShiftLeft".to_string(), false, true),
            (EventType::KeyDown, "KeyS".to_string(), true, true),
            (EventType::KeyUp, "KeyS".to_string(), true, true),
            (EventType::KeyUp, "ShiftLeft".to_string(), false, true),
            (EventType::KeyUp, "ControlLeft".to_string(), true, false),
        ]
    );
}

#[test]
fn test_key_press_without_focus_goes_to_desktop_root() {
    let (executor, mut store, mut desktop) = setup();
    let result = executor.execute(&parse("press enter"), &mut store, Some(&mut desktop));
    assert_eq!(result.status, ExecutionStatus::Success);
    assert_eq!(result.message, "Sent \"Press Enter\" to Desktop.");
}

#[test]
fn test_describe_element_fallbacks() {
    let mut desktop = Desktop::new(100, 100);
    let r = Rect::new(0, 0, 1, 1);
    let placeholder = desktop.add(Element::input("text", r).with_placeholder("Search files"));
    let with_id = desktop.add(Element::new(ElementKind::Div, r).with_id("panel"));
    let texty = desktop.add(
        Element::new(ElementKind::Span, r).with_text("  lots   of\n spaces  "),
    );
    let bare = desktop.add(Element::new(ElementKind::Img, r));

    assert_eq!(describe_element(&desktop, placeholder), "Search files");
    assert_eq!(describe_element(&desktop, with_id), "#panel");
    assert_eq!(describe_element(&desktop, texty), "lots of spaces");
    assert_eq!(describe_element(&desktop, bare), "img");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("abcdef", 4), "abc…");
    assert_eq!(truncate("ééééé", 3), "éé…");
}

#[test]
fn test_transcript_status_mapping() {
    use crate::domain::TranscriptResultStatus;
    assert_eq!(
        ExecutionStatus::Success.transcript_status(),
        TranscriptResultStatus::Success
    );
    assert_eq!(
        ExecutionStatus::SuccessWithClamp.transcript_status(),
        TranscriptResultStatus::Warning
    );
    assert_eq!(
        ExecutionStatus::ErrorNoFocus.transcript_status(),
        TranscriptResultStatus::Error
    );
}
