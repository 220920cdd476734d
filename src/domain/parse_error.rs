use serde::{Deserialize, Serialize};

/// Why a transcript could not be turned into a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParseErrorCode {
    /// Nothing left after removing the wake phrase and punctuation
    Empty,
    /// No grammar matched
    Unrecognized,
    /// A distance or coordinate could not be read as a number
    InvalidNumber,
    /// A number was read but is not allowed (zero distance, negative coordinate)
    OutOfRange,
    /// `press` with a key name we do not know
    UnsupportedKey,
    /// `type` or `press` without an argument
    MissingArgument,
}

impl ParseErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorCode::Empty => "EMPTY",
            ParseErrorCode::Unrecognized => "UNRECOGNIZED",
            ParseErrorCode::InvalidNumber => "INVALID_NUMBER",
            ParseErrorCode::OutOfRange => "OUT_OF_RANGE",
            ParseErrorCode::UnsupportedKey => "UNSUPPORTED_KEY",
            ParseErrorCode::MissingArgument => "MISSING_ARGUMENT",
        }
    }
}

impl std::fmt::Display for ParseErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Typed rejection returned by the command parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub code: ParseErrorCode,
    pub message: String,
    pub raw_text: String,

    /// Closest known phrase, when the input looked like a near miss
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ParseError {
    pub fn new(code: ParseErrorCode, raw_text: &str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            raw_text: raw_text.to_string(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: Option<String>) -> Self {
        self.suggestion = suggestion;
        self
    }

    /// Message plus the "did you mean" hint, for display
    pub fn display_message(&self) -> String {
        match &self.suggestion {
            Some(s) => format!("{} Did you mean \"{}\"?", self.message, s),
            None => self.message.clone(),
        }
    }
}
