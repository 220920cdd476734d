//! Wake phrase stripping for spoken command transcripts.

use regex::Regex;

/// A command transcript with the wake phrase removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCommandText {
    /// Text after the wake phrase, original casing kept for the transcript
    pub display_text: String,
    /// Lowercased `display_text`, used for grammar matching
    pub matchable_text: String,
    /// Whether a leading wake phrase was stripped
    pub wake_prefix_removed: bool,
}

/// Matcher for a configured wake phrase ("hey go")
///
/// Words of the phrase may be separated by any whitespace, and the phrase may
/// be followed by any run of whitespace or `,;:-` separators.
#[derive(Debug, Clone)]
pub struct WakePhrase {
    phrase: String,
    prefix: Option<Regex>,
    anywhere: Option<Regex>,
}

impl Default for WakePhrase {
    fn default() -> Self {
        Self::new("hey go")
    }
}

impl WakePhrase {
    pub fn new(phrase: &str) -> Self {
        let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
        if words.is_empty() {
            return Self {
                phrase: String::new(),
                prefix: None,
                anywhere: None,
            };
        }

        let body = words.join(r"\s+");
        let prefix = Regex::new(&format!(r"(?i)^{body}[\s,;:-]*"))
            .expect("escaped wake phrase is a valid pattern");
        let anywhere = Regex::new(&format!(r"(?i)\b{body}\b[\s,;:-]*"))
            .expect("escaped wake phrase is a valid pattern");

        Self {
            phrase: phrase.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase(),
            prefix: Some(prefix),
            anywhere: Some(anywhere),
        }
    }

    /// Normalized (lowercase, single-spaced) phrase
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Strip a leading wake phrase and produce display/matchable forms
    pub fn normalize(&self, raw_text: &str) -> NormalizedCommandText {
        let trimmed = raw_text.trim();
        let without_wake = match &self.prefix {
            Some(re) => re.replace(trimmed, ""),
            None => trimmed.into(),
        };
        let wake_prefix_removed = without_wake.len() != trimmed.len();
        let display_text = without_wake.trim_start().to_string();

        NormalizedCommandText {
            matchable_text: display_text.to_lowercase(),
            display_text,
            wake_prefix_removed,
        }
    }

    /// Whether the phrase occurs anywhere in `text`
    pub fn occurs_in(&self, text: &str) -> bool {
        self.anywhere.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Text following the first occurrence of the phrase, starting at the phrase.
    ///
    /// Returns `None` if the phrase is absent or nothing follows it. The returned
    /// slice still begins with the wake phrase so the parser sees the full utterance.
    pub fn command_after<'a>(&self, text: &'a str) -> Option<&'a str> {
        let m = self.anywhere.as_ref()?.find(text)?;
        let rest = text[m.end()..].trim();
        if rest.is_empty() {
            return None;
        }
        Some(text[m.start()..].trim_end())
    }
}
