use serde::{Deserialize, Serialize};

/// Direction of a relative cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse a spoken direction word (case-insensitive)
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Lowercase word used in summaries and messages
    pub fn as_word(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Unit step on each axis (screen coordinates, y grows downwards)
    pub fn unit(&self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_word())
    }
}

/// Which mouse click variant was spoken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickKind {
    Single,
    Double,
    Right,
}

impl ClickKind {
    /// Summary shown in the transcript ("Single click", ...)
    pub fn summary(&self) -> &'static str {
        match self {
            ClickKind::Single => "Single click",
            ClickKind::Double => "Double click",
            ClickKind::Right => "Right click",
        }
    }

    /// Past-tense verb used in execution messages
    pub fn action_label(&self) -> &'static str {
        match self {
            ClickKind::Single => "Clicked",
            ClickKind::Double => "Double-clicked",
            ClickKind::Right => "Right-clicked",
        }
    }

    /// Mouse button number carried by the synthetic events
    pub fn button(&self) -> u8 {
        match self {
            ClickKind::Right => 2,
            ClickKind::Single | ClickKind::Double => 0,
        }
    }
}

/// Modifier key held during a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyModifier {
    Ctrl,
    Shift,
    Alt,
}

impl KeyModifier {
    /// Label used in summaries (`CTRL+S`)
    pub fn as_label(&self) -> &'static str {
        match self {
            KeyModifier::Ctrl => "CTRL",
            KeyModifier::Shift => "SHIFT",
            KeyModifier::Alt => "ALT",
        }
    }

    /// DOM `KeyboardEvent.key` value for the modifier itself
    pub fn key(&self) -> &'static str {
        match self {
            KeyModifier::Ctrl => "Control",
            KeyModifier::Shift => "Shift",
            KeyModifier::Alt => "Alt",
        }
    }

    /// DOM `KeyboardEvent.code` value for the modifier itself
    pub fn code(&self) -> &'static str {
        match self {
            KeyModifier::Ctrl => "ControlLeft",
            KeyModifier::Shift => "ShiftLeft",
            KeyModifier::Alt => "AltLeft",
        }
    }
}

impl std::fmt::Display for KeyModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// The parsed payload of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandKind {
    /// "mouse left 150 pixels"
    MouseMoveRelative {
        direction: Direction,
        distance_px: i64,
    },
    /// "mouse to x 400 y 300"
    MouseMoveAbsolute { x: i64, y: i64 },
    /// "click", "double click", "right click"
    MouseClick { click: ClickKind },
    /// "type hello world"
    KeyType { text: String },
    /// "press ctrl s"
    KeyPress {
        key: String,
        spoken_key: String,
        modifiers: Vec<KeyModifier>,
    },
}

/// A command recognized from a spoken transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    #[serde(flatten)]
    pub kind: CommandKind,

    /// Human readable summary shown in the transcript and command history
    pub summary: String,

    /// Transcript text that produced this command
    pub raw_text: String,
}

impl Command {
    pub fn new(kind: CommandKind, summary: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            kind,
            summary: summary.into(),
            raw_text: raw_text.into(),
        }
    }

    /// Short machine name of the command type
    pub fn type_name(&self) -> &'static str {
        match &self.kind {
            CommandKind::MouseMoveRelative { .. } => "MOUSE_MOVE_RELATIVE",
            CommandKind::MouseMoveAbsolute { .. } => "MOUSE_MOVE_ABSOLUTE",
            CommandKind::MouseClick { click } => match click {
                ClickKind::Single => "MOUSE_CLICK",
                ClickKind::Double => "MOUSE_DBLCLICK",
                ClickKind::Right => "MOUSE_RIGHT_CLICK",
            },
            CommandKind::KeyType { .. } => "KEY_TYPE",
            CommandKind::KeyPress { .. } => "KEY_PRESS",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary)
    }
}
