use std::sync::LazyLock;

use regex::Regex;

static ROMAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[IVX]+$").unwrap());

const LEGAL_SUFFIXES: &[&str] = &["LLC", "INC", "CO", "LTD", "LP", "LLP"];
const STOP_WORDS: &[&str] = &["and", "of", "the", "for", "with", "in", "on", "at"];

/// Title-case a name or business title.
///
/// Legal suffixes stay uppercase, stop words stay lowercase except in first
/// position, apostrophe names capitalize each segment ("O'Connor").
pub fn proper_case(text: &str) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| case_word(i, word, capitalize_apostrophes))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extraction-time variant. Mixed-case input is trusted and only has its
/// whitespace collapsed; ALL-CAPS input is title-cased, keeping Roman
/// numerals and single-letter initials uppercase and casing each hyphenated
/// segment on its own.
pub fn display_case(text: &str) -> String {
    if !is_all_caps(text) {
        return text.split_whitespace().collect::<Vec<_>>().join(" ");
    }
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if ROMAN_RE.is_match(word) || is_initial(word) {
                word.to_string()
            } else {
                case_word(i, word, |w| {
                    w.split('-')
                        .map(capitalize_apostrophes)
                        .collect::<Vec<_>>()
                        .join("-")
                })
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn case_word(position: usize, word: &str, fallback: impl Fn(&str) -> String) -> String {
    if LEGAL_SUFFIXES.contains(&word.to_uppercase().as_str()) {
        return word.to_uppercase();
    }
    let lower = word.to_lowercase();
    if STOP_WORDS.contains(&lower.as_str()) {
        return if position == 0 { capitalize(word) } else { lower };
    }
    fallback(word)
}

fn capitalize_apostrophes(word: &str) -> String {
    if !word.contains('\'') {
        return capitalize(word);
    }
    word.split('\'').map(capitalize).collect::<Vec<_>>().join("'")
}

/// First character uppercase, remainder lowercase. When uppercasing expands
/// the first character ("ß" to "SS") only the first of the expansion stays
/// uppercase.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    upper
        .next()
        .into_iter()
        .chain(upper.flat_map(char::to_lowercase))
        .chain(chars.flat_map(char::to_lowercase))
        .collect()
}

fn is_all_caps(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// "J" or "J." style initials.
fn is_initial(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() == 1 && word.trim_end_matches('.').chars().count() == 1
}
