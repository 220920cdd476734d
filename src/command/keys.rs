//! Spoken key names and modifier words.

use crate::domain::KeyModifier;

const MODIFIER_WORDS: &[(&str, KeyModifier)] = &[
    ("ctrl", KeyModifier::Ctrl),
    ("control", KeyModifier::Ctrl),
    ("shift", KeyModifier::Shift),
    ("alt", KeyModifier::Alt),
];

/// Spoken key name -> DOM `KeyboardEvent.key`
pub const KEY_NAMES: &[(&str, &str)] = &[
    ("enter", "Enter"),
    ("return", "Enter"),
    ("escape", "Escape"),
    ("esc", "Escape"),
    ("tab", "Tab"),
    ("space", " "),
    ("spacebar", " "),
    ("spacebarkey", " "),
    ("backspace", "Backspace"),
    ("delete", "Delete"),
    ("del", "Delete"),
    ("home", "Home"),
    ("end", "End"),
    ("pageup", "PageUp"),
    ("pagedown", "PageDown"),
    ("up", "ArrowUp"),
    ("down", "ArrowDown"),
    ("left", "ArrowLeft"),
    ("right", "ArrowRight"),
];

/// Two-word key names that speech recognition splits apart
const COMPOUND_KEYS: &[(&str, &str, &str)] = &[
    ("page", "up", "pageup"),
    ("page", "down", "pagedown"),
    ("space", "bar", "spacebar"),
    ("back", "space", "backspace"),
];

/// Map a spoken modifier word to a modifier
pub fn modifier_from_word(word: &str) -> Option<KeyModifier> {
    let word = word.to_lowercase();
    MODIFIER_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, m)| *m)
}

/// Collect modifiers from spoken words, keeping first-seen order without duplicates.
/// Words that are not modifiers are ignored.
pub fn extract_modifiers<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<KeyModifier> {
    let mut modifiers = Vec::new();
    for word in words {
        if let Some(modifier) = modifier_from_word(word) {
            if !modifiers.contains(&modifier) {
                modifiers.push(modifier);
            }
        }
    }
    modifiers
}

/// Merge split key names ("page up" -> "pageup")
pub fn join_compound_keys(tokens: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if let Some(next) = tokens.get(i + 1) {
            let joined = COMPOUND_KEYS
                .iter()
                .find(|(a, b, _)| tokens[i].eq_ignore_ascii_case(a) && next.eq_ignore_ascii_case(b));
            if let Some((_, _, name)) = joined {
                out.push((*name).to_string());
                i += 2;
                continue;
            }
        }
        out.push(tokens[i].to_string());
        i += 1;
    }
    out
}

/// Resolve a spoken key token to a DOM key value.
///
/// Named keys map through the key table; `f1`..`f99` and single letters or
/// digits are uppercased. Anything else is unsupported.
pub fn parse_key_token(token: &str) -> Option<String> {
    let normalized = token.to_lowercase();

    if let Some((_, key)) = KEY_NAMES.iter().find(|(name, _)| *name == normalized) {
        return Some((*key).to_string());
    }

    if let Some(number) = normalized.strip_prefix('f').and_then(function_key_number) {
        return Some(format!("F{number}"));
    }

    let mut chars = normalized.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            return Some(normalized.to_uppercase());
        }
    }

    None
}

/// `1`..=`12` for the digits after an `f`
fn function_key_number(digits: &str) -> Option<u8> {
    let well_formed = digits.len() <= 2
        && !digits.starts_with('0')
        && digits.chars().all(|c| c.is_ascii_digit());
    if !well_formed {
        return None;
    }
    digits.parse().ok().filter(|n| (1..=12).contains(n))
}

/// Label used in the command summary (`Space`, `ArrowUp`, `S`, `Enter`)
pub fn format_key_label(key: &str) -> String {
    if key == " " {
        return "Space".to_string();
    }
    if key.starts_with("Arrow") {
        return key.to_string();
    }

    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// DOM `KeyboardEvent.code` for a key value (`Space`, `KeyA`, `Digit5`)
pub fn format_key_code(key: &str) -> String {
    if key == " " {
        return "Space".to_string();
    }

    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_alphabetic() {
            return format!("Key{}", c.to_ascii_uppercase());
        }
        if c.is_ascii_digit() {
            return format!("Digit{c}");
        }
    }

    key.to_string()
}

/// Closest known key name to an unsupported token, if any is close enough
pub fn suggest_key(token: &str) -> Option<String> {
    use strsim::jaro_winkler;

    const FUZZY_THRESHOLD: f64 = 0.8;

    let token = token.to_lowercase();
    KEY_NAMES
        .iter()
        .map(|(name, _)| (*name, jaro_winkler(&token, name)))
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name.to_string())
}
