//! Command grammar: turns a spoken transcript into a typed [`Command`].

use once_cell::sync::Lazy;
use regex::Regex;

use super::keys::{
    extract_modifiers, format_key_label, join_compound_keys, parse_key_token, suggest_key,
};
use super::normalizer::WakePhrase;
use super::numbers::parse_spoken_number;
use crate::domain::{ClickKind, Command, CommandKind, Direction, ParseError, ParseErrorCode};

static RELATIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^mouse\s+(left|right|up|down)\s+([\w\s-]+?)\s+pixels?$")
        .expect("valid relative move pattern")
});
static ABSOLUTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^mouse\s+to\s+x\s+([\w\s-]+)\s+y\s+([\w\s-]+)$")
        .expect("valid absolute move pattern")
});
static TYPE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^type(?:\s+|$)").expect("valid type prefix pattern"));
static PRESS_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^press(?:\s+|$)").expect("valid press prefix pattern"));

const CLICK_PHRASES: &[(&str, ClickKind)] = &[
    ("click", ClickKind::Single),
    ("double click", ClickKind::Double),
    ("double-click", ClickKind::Double),
    ("right click", ClickKind::Right),
    ("right-click", ClickKind::Right),
];

/// Grammar keywords and the example offered when input is a near miss
const SUGGESTIONS: &[(&str, &str)] = &[
    ("mouse", "mouse left 100 pixels"),
    ("mouse to", "mouse to x 400 y 300"),
    ("click", "click"),
    ("double click", "double click"),
    ("right click", "right click"),
    ("type", "type hello"),
    ("press", "press enter"),
];

/// The three views of an utterance each grammar may look at
struct ParseInput<'a> {
    raw_text: &'a str,
    /// Wake phrase removed, casing and punctuation kept
    display_text: &'a str,
    /// Lowercased, trailing `.!?` removed
    matchable_text: &'a str,
}

type Grammar = fn(&ParseInput<'_>) -> Option<Result<Command, ParseError>>;

/// Tried in order; the first grammar that claims the text decides the result
const GRAMMARS: &[Grammar] = &[
    parse_mouse_relative,
    parse_mouse_absolute,
    parse_click,
    parse_keyboard_type,
    parse_key_press,
];

/// Parser for the spoken command grammar
#[derive(Debug, Clone, Default)]
pub struct CommandParser {
    wake: WakePhrase,
}

impl CommandParser {
    /// Create a parser that strips the given wake phrase from commands
    pub fn new(wake_phrase: &str) -> Self {
        Self {
            wake: WakePhrase::new(wake_phrase),
        }
    }

    pub fn wake_phrase(&self) -> &WakePhrase {
        &self.wake
    }

    /// Parse a transcript into a command
    pub fn parse(&self, raw_text: &str) -> Result<Command, ParseError> {
        let normalized = self.wake.normalize(raw_text);
        let sanitized = sanitize(&normalized.matchable_text);

        if sanitized.is_empty() {
            return Err(ParseError::new(
                ParseErrorCode::Empty,
                raw_text,
                "No command detected.",
            ));
        }

        let input = ParseInput {
            raw_text,
            display_text: &normalized.display_text,
            matchable_text: sanitized,
        };

        for grammar in GRAMMARS {
            if let Some(result) = grammar(&input) {
                return result;
            }
        }

        Err(ParseError::new(
            ParseErrorCode::Unrecognized,
            raw_text,
            "No matching command grammar found.",
        )
        .with_suggestion(suggest_phrase(sanitized)))
    }
}

fn sanitize(text: &str) -> &str {
    text.trim_end_matches(['.', '!', '?']).trim()
}

fn parse_mouse_relative(input: &ParseInput<'_>) -> Option<Result<Command, ParseError>> {
    let caps = RELATIVE_PATTERN.captures(input.matchable_text)?;
    let raw = input.raw_text;

    let (Some(direction_word), Some(distance_token)) = (caps.get(1), caps.get(2)) else {
        return Some(Err(ParseError::new(
            ParseErrorCode::Unrecognized,
            raw,
            "Command is missing direction or distance.",
        )));
    };
    let direction_word = direction_word.as_str();
    let distance_token = distance_token.as_str();

    let Some(direction) = Direction::from_word(direction_word) else {
        return Some(Err(ParseError::new(
            ParseErrorCode::Unrecognized,
            raw,
            "Command is missing direction or distance.",
        )));
    };

    let Some(distance_px) = parse_spoken_number(distance_token) else {
        return Some(Err(ParseError::new(
            ParseErrorCode::InvalidNumber,
            raw,
            format!("Could not interpret distance \"{distance_token}\"."),
        )));
    };

    if distance_px <= 0 {
        return Some(Err(ParseError::new(
            ParseErrorCode::OutOfRange,
            raw,
            "Distance must be greater than zero.",
        )));
    }

    Some(Ok(Command::new(
        CommandKind::MouseMoveRelative {
            direction,
            distance_px,
        },
        format!("Move {direction_word} {distance_px}px"),
        raw,
    )))
}

fn parse_mouse_absolute(input: &ParseInput<'_>) -> Option<Result<Command, ParseError>> {
    let caps = ABSOLUTE_PATTERN.captures(input.matchable_text)?;
    let raw = input.raw_text;

    let (Some(x_token), Some(y_token)) = (caps.get(1), caps.get(2)) else {
        return Some(Err(ParseError::new(
            ParseErrorCode::Unrecognized,
            raw,
            "Command is missing coordinates.",
        )));
    };

    let (Some(x), Some(y)) = (
        parse_spoken_number(x_token.as_str()),
        parse_spoken_number(y_token.as_str()),
    ) else {
        return Some(Err(ParseError::new(
            ParseErrorCode::InvalidNumber,
            raw,
            "Coordinates must be numeric.",
        )));
    };

    if x < 0 || y < 0 {
        return Some(Err(ParseError::new(
            ParseErrorCode::OutOfRange,
            raw,
            "Coordinates cannot be negative.",
        )));
    }

    Some(Ok(Command::new(
        CommandKind::MouseMoveAbsolute { x, y },
        format!("Move to ({x}, {y})"),
        raw,
    )))
}

fn parse_click(input: &ParseInput<'_>) -> Option<Result<Command, ParseError>> {
    let (_, click) = CLICK_PHRASES
        .iter()
        .find(|(phrase, _)| *phrase == input.matchable_text)?;

    Some(Ok(Command::new(
        CommandKind::MouseClick { click: *click },
        click.summary(),
        input.raw_text,
    )))
}

fn parse_keyboard_type(input: &ParseInput<'_>) -> Option<Result<Command, ParseError>> {
    if !TYPE_PREFIX.is_match(input.matchable_text) {
        return None;
    }

    let typed_text = TYPE_PREFIX
        .find(input.display_text)
        .map(|m| input.display_text[m.end()..].trim())
        .unwrap_or("");

    // Trailing sentence punctuation alone is not text to type
    if sanitize(typed_text).is_empty() {
        return Some(Err(ParseError::new(
            ParseErrorCode::MissingArgument,
            input.raw_text,
            "Please provide text to type.",
        )));
    }

    Some(Ok(Command::new(
        CommandKind::KeyType {
            text: typed_text.to_string(),
        },
        format!("Type \"{typed_text}\""),
        input.raw_text,
    )))
}

fn parse_key_press(input: &ParseInput<'_>) -> Option<Result<Command, ParseError>> {
    let prefix = PRESS_PREFIX.find(input.matchable_text)?;
    let raw = input.raw_text;

    let spoken: Vec<&str> = input.matchable_text[prefix.end()..]
        .split_whitespace()
        .collect();
    let tokens = join_compound_keys(&spoken);

    let Some((key_token, modifier_words)) = tokens.split_last() else {
        return Some(Err(ParseError::new(
            ParseErrorCode::MissingArgument,
            raw,
            "Please provide a key to press.",
        )));
    };

    let modifiers = extract_modifiers(modifier_words.iter().map(String::as_str));

    let Some(key) = parse_key_token(key_token) else {
        return Some(Err(ParseError::new(
            ParseErrorCode::UnsupportedKey,
            raw,
            format!("Key \"{key_token}\" is not supported."),
        )
        .with_suggestion(suggest_key(key_token))));
    };

    let modifier_prefix: String = modifiers
        .iter()
        .map(|m| format!("{}+", m.as_label()))
        .collect();
    let summary = format!("Press {}{}", modifier_prefix, format_key_label(&key));

    Some(Ok(Command::new(
        CommandKind::KeyPress {
            key,
            spoken_key: key_token.clone(),
            modifiers,
        },
        summary,
        raw,
    )))
}

/// Find a grammar keyword close to the start of an unrecognized command
fn suggest_phrase(text: &str) -> Option<String> {
    use strsim::jaro_winkler;

    const FUZZY_THRESHOLD: f64 = 0.8;

    let words: Vec<&str> = text.split_whitespace().collect();

    SUGGESTIONS
        .iter()
        .filter_map(|(phrase, example)| {
            let width = phrase.split_whitespace().count();
            if words.len() < width {
                return None;
            }
            let head = words[..width].join(" ");
            let score = jaro_winkler(&head, phrase);
            (score >= FUZZY_THRESHOLD).then_some((score, phrase.len(), *example))
        })
        .max_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
        .map(|(_, _, example)| example.to_string())
}
