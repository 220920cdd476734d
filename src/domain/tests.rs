//! Unit tests for domain types.

use super::*;

#[test]
fn test_direction_from_word() {
    assert_eq!(Direction::from_word("Left"), Some(Direction::Left));
    assert_eq!(Direction::from_word("down"), Some(Direction::Down));
    assert_eq!(Direction::from_word("sideways"), None);
    assert_eq!(Direction::Up.unit(), (0, -1));
}

#[test]
fn test_command_serializes_with_type_tag() {
    let command = Command::new(
        CommandKind::MouseMoveAbsolute { x: 400, y: 300 },
        "Move to (400, 300)",
        "mouse to x 400 y 300",
    );

    let json = serde_json::to_value(&command).unwrap();
    assert_eq!(json["type"], "MOUSE_MOVE_ABSOLUTE");
    assert_eq!(json["x"], 400);
    assert_eq!(json["summary"], "Move to (400, 300)");

    let back: Command = serde_json::from_value(json).unwrap();
    assert_eq!(back, command);
}

#[test]
fn test_click_type_names() {
    let dbl = Command::new(
        CommandKind::MouseClick {
            click: ClickKind::Double,
        },
        "Double click",
        "double click",
    );
    assert_eq!(dbl.type_name(), "MOUSE_DBLCLICK");
    assert_eq!(ClickKind::Right.button(), 2);
    assert_eq!(ClickKind::Double.action_label(), "Double-clicked");
}

#[test]
fn test_parse_error_display_message() {
    let err = ParseError::new(
        ParseErrorCode::Unrecognized,
        "dubble click",
        "No matching command grammar found.",
    )
    .with_suggestion(Some("double click".to_string()));

    assert_eq!(err.to_string(), "No matching command grammar found.");
    assert_eq!(
        err.display_message(),
        "No matching command grammar found. Did you mean \"double click\"?"
    );
    assert_eq!(err.code.to_string(), "UNRECOGNIZED");
}

#[test]
fn test_listening_status_display() {
    assert_eq!(ListeningStatus::default(), ListeningStatus::Idle);
    assert_eq!(ListeningStatus::Listening.to_string(), "Listening");
    assert!(ListeningStatus::Listening.is_listening());
}
