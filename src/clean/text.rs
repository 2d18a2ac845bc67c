/// UTF-8 punctuation that was decoded as Windows-1252 somewhere upstream.
/// Longer sequences first: `â€` is a prefix of the others.
const MOJIBAKE: &[(&str, &str)] = &[
    ("\u{e2}\u{20ac}\u{2122}", "'"),
    ("\u{e2}\u{20ac}\u{2dc}", "'"),
    ("\u{e2}\u{20ac}\u{153}", "\""),
    ("\u{e2}\u{20ac}", "\""),
];

const ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
];

/// Baseline string hygiene shared by every cleaner: repair mojibake quotes,
/// decode the common HTML entities, collapse whitespace runs, trim.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out = text.to_string();
    for (bad, good) in MOJIBAKE.iter().chain(ENTITIES) {
        if out.contains(bad) {
            out = out.replace(bad, good);
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `normalize` for values that may be absent altogether.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
        assert_eq!(normalize_opt(None), "");
    }

    #[test]
    fn repairs_mojibake_quotes() {
        assert_eq!(normalize("O\u{e2}\u{20ac}\u{2122}Connor"), "O'Connor");
        assert_eq!(
            normalize("\u{e2}\u{20ac}\u{153}Blue Ribbon\u{e2}\u{20ac}"),
            "\"Blue Ribbon\""
        );
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(normalize("Earl &amp; Cathy"), "Earl & Cathy");
        assert_eq!(normalize("&lt;b&gt; &quot;x&quot;"), "<b> \"x\"");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  Marsh \n\n Family\tFarm  "), "Marsh Family Farm");
    }

    #[test]
    fn idempotent() {
        let once = normalize("  a &amp;  b ");
        assert_eq!(normalize(&once), once);
    }
}
