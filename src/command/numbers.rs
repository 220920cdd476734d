//! Spoken number parsing ("one hundred and fifty" -> 150).

const UNITS: &[(&str, i64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

fn unit_value(word: &str) -> Option<i64> {
    UNITS.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

/// Parse digits or English number words.
///
/// Accepts `"150"`, `"one hundred fifty"`, `"one-hundred and fifty"`,
/// `"two thousand five hundred"`. Anything else (unknown words, mixed digits
/// and words, overflow) yields `None`.
pub fn parse_spoken_number(token: &str) -> Option<i64> {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .map(|c| if c == '-' { ' ' } else { c.to_ascii_lowercase() })
        .collect();

    let words: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|w| *w != "and")
        .collect();

    if words.is_empty() {
        return None;
    }

    if words.len() == 1 && words[0].chars().all(|c| c.is_ascii_digit()) {
        return words[0].parse::<i64>().ok();
    }

    let mut total: i64 = 0;
    let mut current: i64 = 0;

    for word in words {
        if let Some(value) = unit_value(word) {
            current = current.checked_add(value)?;
            continue;
        }

        match word {
            "hundred" => {
                if current == 0 {
                    current = 1;
                }
                current = current.checked_mul(100)?;
            }
            "thousand" => {
                total = total.checked_add(current.checked_mul(1000)?)?;
                current = 0;
            }
            _ => return None,
        }
    }

    total.checked_add(current)
}
