use regex::Regex;

use crate::clean::clean_phone;
use crate::record::{Field, Record, EMAIL_SLOTS, PHONE_SLOTS, SOCIAL_SLOTS};
use crate::vocabulary::{is_social_url, Vocabulary};

use super::super::lines::LinePool;
use super::super::patterns::{EMAIL_RE, PHONE_PATTERNS, URL_PATTERNS};

/// Phone-shaped substrings of `text` in textual order.
pub fn find_phones(text: &str) -> Vec<String> {
    ordered_matches(&PHONE_PATTERNS, text)
        .into_iter()
        .map(|(start, end)| strip_label(&text[start..end]).to_string())
        .collect()
}

/// "Cell: 555-444-3434" keeps only the number.
fn strip_label(phone: &str) -> &str {
    phone
        .find(|c: char| c.is_ascii_digit() || c == '(' || c == '+')
        .map_or(phone, |i| &phone[i..])
}

/// Fill the four phone slots with the first distinct phones, in order.
/// Slots already filled (from markup) are kept and count as seen.
pub fn assign_phones(record: Record, pool: &LinePool) -> Record {
    let mut seen: Vec<String> = PHONE_SLOTS
        .iter()
        .map(|f| phone_key(record.get(*f)))
        .filter(|k| !k.is_empty())
        .collect();
    find_phones(pool.flat())
        .into_iter()
        .fold(record, |record, phone| {
            let key = phone_key(&phone);
            if seen.contains(&key) {
                return record;
            }
            seen.push(key);
            record.fill_first_empty(&PHONE_SLOTS, &phone).0
        })
}

pub fn assign_emails(record: Record, pool: &LinePool) -> Record {
    let mut seen: Vec<String> = EMAIL_SLOTS
        .iter()
        .map(|f| record.get(*f).to_lowercase())
        .filter(|e| !e.is_empty())
        .collect();
    EMAIL_RE
        .find_iter(pool.flat())
        .fold(record, |record, m| {
            let email = m.as_str();
            let key = email.to_lowercase();
            if seen.contains(&key) {
                return record;
            }
            seen.push(key);
            record.fill_first_empty(&EMAIL_SLOTS, email).0
        })
}

/// Website by pattern priority (full URL, `www.`, bare domain), stopping at
/// the first pattern with an accepted match. Social-network links found
/// anywhere go to the social slots in textual order instead.
pub fn assign_web(record: Record, pool: &LinePool, vocab: &Vocabulary) -> Record {
    let text = pool.flat();
    let record = assign_socials(record, text, vocab);
    if record.is_set(Field::Website) {
        return record;
    }
    let website = URL_PATTERNS.iter().find_map(|(_, re)| {
        re.find_iter(text)
            .filter(|m| !touches_email(text, m.start(), m.end()))
            .map(|m| trim_url(m.as_str()))
            .find(|url| !vocab.is_excluded_url(url) && !is_social_url(url))
    });
    match website {
        Some(url) => record.fill(Field::Website, url),
        None => record,
    }
}

fn assign_socials(record: Record, text: &str, vocab: &Vocabulary) -> Record {
    ordered_matches(&URL_PATTERNS, text)
        .into_iter()
        .filter(|(start, end)| !touches_email(text, *start, *end))
        .map(|(start, end)| trim_url(&text[start..end]))
        .filter(|url| is_social_url(url) && !vocab.is_excluded_url(url))
        .fold(record, |record, url| {
            if SOCIAL_SLOTS.iter().any(|f| same_link(record.get(*f), url)) {
                return record;
            }
            record.fill_first_empty(&SOCIAL_SLOTS, url).0
        })
}

/// Non-overlapping spans from a pattern table, earliest first; on equal
/// starts the earlier pattern in the table wins.
fn ordered_matches(patterns: &[(&'static str, Regex)], text: &str) -> Vec<(usize, usize)> {
    let mut hits: Vec<(usize, usize, usize)> = patterns
        .iter()
        .enumerate()
        .flat_map(|(priority, (_, re))| {
            re.find_iter(text).map(move |m| (m.start(), priority, m.end()))
        })
        .collect();
    hits.sort_unstable();

    let mut spans = Vec::new();
    let mut last_end = 0;
    for (start, _, end) in hits {
        if start < last_end {
            continue;
        }
        spans.push((start, end));
        last_end = end;
    }
    spans
}

/// Comparison key: the digits a cleaned phone would keep.
fn phone_key(phone: &str) -> String {
    let cleaned = clean_phone(phone);
    if cleaned.is_empty() {
        phone.chars().filter(char::is_ascii_digit).collect()
    } else {
        cleaned
    }
}

/// Domain of an e-mail address ("x@example.com") is not a website.
fn touches_email(text: &str, start: usize, end: usize) -> bool {
    text[..start].ends_with('@') || text[end..].starts_with('@')
}

fn trim_url(url: &str) -> &str {
    url.trim_end_matches(['.', ',', ';', ':', ')', '!', '?', '"', '\''])
}

fn same_link(a: &str, b: &str) -> bool {
    fn bare(u: &str) -> String {
        let u = u.to_lowercase();
        let u = u
            .strip_prefix("https://")
            .or_else(|| u.strip_prefix("http://"))
            .unwrap_or(&u);
        u.strip_prefix("www.").unwrap_or(u).trim_end_matches('/').to_string()
    }
    !a.is_empty() && bare(a) == bare(b)
}
