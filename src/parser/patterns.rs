use std::sync::LazyLock;

use regex::Regex;

pub(crate) use crate::clean::fields::{EMAIL_RE, ZIP_RE};

/// Phone shapes, in priority order. When two shapes match overlapping text
/// the earlier-starting match wins, ties go to the earlier pattern.
pub static PHONE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        (
            "labeled",
            r"(?i)\b(?:phone|tel|cell|mobile)\s*[:.#]?\s*(?:(?:\+?1[\s.-]?)?(?:\(\d{3}\)|\d{3})[\s.-]?\d{3}[\s.-]?\d{4}|\d{3}[\s.-]?\d{4})\b",
        ),
        ("parenthesized", r"\(\d{3}\)\s*\d{3}[\s.-]?\d{4}\b"),
        ("dashed", r"\b(?:1-)?\d{3}-\d{3}-\d{4}\b"),
        ("dotted", r"\b\d{3}\.\d{3}\.\d{4}\b"),
        ("bare", r"\b\d{10,11}\b"),
    ]
    .into_iter()
    .map(|(name, p)| (name, Regex::new(p).unwrap()))
    .collect()
});

/// Website shapes, in priority order: full URL, `www.` host, bare domain.
pub static URL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("full", r#"(?i)\bhttps?://[^\s<>"']+"#),
        ("www", r#"(?i)\bwww\.[^\s<>"']+"#),
        (
            "bare_domain",
            r"(?i)\b[a-z0-9][a-z0-9-]*(?:\.[a-z0-9-]+)*\.(?:com|net|org|us|biz|info|farm|ranch|co)\b(?:/[^\s<>]*)?",
        ),
    ]
    .into_iter()
    .map(|(name, p)| (name, Regex::new(p).unwrap()))
    .collect()
});

/// "123 Main St", "4410 County Road 12".
pub static STREET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\s+\w+").unwrap());

/// "TX 75001" anywhere in the line.
pub static STATE_ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2}\s+\d{5}(?:-\d{4})?\b").unwrap());

/// "Anytown, TX 75001": city, state, zip.
pub static CITY_STATE_ZIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][A-Za-z.' -]*?)\s*,\s*([A-Z]{2})\s+(\d{5}(?:-\d{4})?)\b").unwrap()
});

pub static BUSINESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)farm|ranch|acres|livestock|suffolks|sheep").unwrap());

pub static SHEEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:sheep|lambs?|ewes?|rams?)\b").unwrap());

pub fn looks_like_phone(text: &str) -> bool {
    PHONE_PATTERNS.iter().any(|(_, re)| re.is_match(text))
}

pub fn looks_like_url(text: &str) -> bool {
    URL_PATTERNS.iter().any(|(_, re)| re.is_match(text))
}

pub fn looks_like_street(text: &str) -> bool {
    STREET_RE.is_match(text)
}

pub fn is_business(text: &str) -> bool {
    BUSINESS_RE.is_match(text)
}
