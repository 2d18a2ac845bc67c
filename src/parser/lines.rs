use crate::vocabulary::Vocabulary;

use super::patterns::{looks_like_phone, looks_like_street, looks_like_url, ZIP_RE};

/// Lines shorter than this are map glyphs, stray initials, bullets.
const MIN_LINE_CHARS: usize = 3;

/// The candidate pool: trimmed, non-noise popup lines in source order, plus
/// the same lines flattened for whole-text pattern search.
#[derive(Debug, Clone, Default)]
pub struct LinePool {
    lines: Vec<String>,
    flat: String,
}

impl LinePool {
    pub fn from_raw(raw: &str, vocab: &Vocabulary) -> Self {
        let lines: Vec<String> = raw
            .replace("\r\n", "\n")
            .split('\n')
            .map(|l| l.trim().to_string())
            .filter(|l| l.chars().count() >= MIN_LINE_CHARS)
            .filter(|l| !vocab.is_noise(l))
            .collect();
        let flat = lines.join(" ");
        LinePool { lines, flat }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn flat(&self) -> &str {
        &self.flat
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines that can only be names: no ZIP, e-mail, phone, URL or street shape.
    pub fn name_candidates(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|l| !NOT_A_NAME.iter().any(|(_, test)| test(*l)))
            .collect()
    }

    pub fn any_line(&self, f: impl Fn(&str) -> bool) -> bool {
        self.lines.iter().any(|l| f(l.as_str()))
    }
}

/// Shapes that disqualify a line from being a name candidate.
const NOT_A_NAME: &[(&str, fn(&str) -> bool)] = &[
    ("zip", |l| ZIP_RE.is_match(l)),
    ("email", |l| l.contains('@')),
    ("phone", looks_like_phone),
    ("url", looks_like_url),
    ("street", looks_like_street),
];
