//! Command grammar tests through the public API.

use soundgo::command::CommandParser;
use soundgo::domain::{ClickKind, CommandKind, Direction, KeyModifier, ParseErrorCode};

#[test]
fn test_grammar_examples_parse() {
    let parser = CommandParser::default();
    for example in soundgo::config::COMMAND_EXAMPLES {
        assert!(parser.parse(example).is_ok(), "{example}");
    }
}

#[test]
fn test_spoken_variants() {
    let parser = CommandParser::default();

    let cases = [
        (
            "Hey go: mouse UP twenty five pixels!",
            CommandKind::MouseMoveRelative {
                direction: Direction::Up,
                distance_px: 25,
            },
        ),
        (
            "hey   go - mouse to x 0 y one thousand",
            CommandKind::MouseMoveAbsolute { x: 0, y: 1000 },
        ),
        (
            "Right-click.",
            CommandKind::MouseClick {
                click: ClickKind::Right,
            },
        ),
        (
            "press alt f4",
            CommandKind::KeyPress {
                key: "F4".to_string(),
                spoken_key: "f4".to_string(),
                modifiers: vec![KeyModifier::Alt],
            },
        ),
    ];

    for (text, expected) in cases {
        let command = parser.parse(text).unwrap_or_else(|e| panic!("{text}: {e}"));
        assert_eq!(command.kind, expected, "{text}");
        assert_eq!(command.raw_text, text);
    }
}

#[test]
fn test_rejections() {
    let parser = CommandParser::default();
    let cases = [
        ("hey go", ParseErrorCode::Empty),
        ("mouse left lots pixels", ParseErrorCode::InvalidNumber),
        ("mouse left 0 pixels", ParseErrorCode::OutOfRange),
        ("press hyper", ParseErrorCode::UnsupportedKey),
        ("type   ", ParseErrorCode::MissingArgument),
        ("open the pod bay doors", ParseErrorCode::Unrecognized),
    ];

    for (text, code) in cases {
        let err = parser.parse(text).unwrap_err();
        assert_eq!(err.code, code, "{text}");
    }
}

#[test]
fn test_command_json_shape() {
    let command = CommandParser::default().parse("press ctrl s").unwrap();
    let json = serde_json::to_value(&command).unwrap();

    assert_eq!(json["type"], "KEY_PRESS");
    assert_eq!(json["key"], "S");
    assert_eq!(json["modifiers"], serde_json::json!(["CTRL"]));
    assert_eq!(json["summary"], "Press CTRL+S");
}
