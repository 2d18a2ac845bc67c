use std::sync::LazyLock;

use regex::Regex;

use super::case::proper_case;
use super::text::normalize;

/// Checked in this order; the first separator present wins.
pub const JOINT_SEPARATORS: &[&str] = &[" & ", " and ", " + ", "/", " / "];

/// "Lowder, Michael and Kate": surname first, then two given names.
static SURNAME_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([^,]+),\s*(.+?)\s+(?:and|&)\s+(.+)$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JointNames {
    pub owner1: String,
    pub owner2: String,
    /// The whole joined string, kept as a business-name fallback.
    pub business_name: String,
}

/// Whether `name` holds one of the joint-owner separators.
pub fn has_joint_separator(name: &str) -> bool {
    find_separator(name).is_some()
}

/// Split a compound owner string into two individual names sharing an
/// inferred surname. `None` when there is nothing to split.
pub fn split_joint_names(name: &str) -> Option<JointNames> {
    let name = normalize(name);

    if let Some(caps) = SURNAME_FIRST_RE.captures(&name) {
        let surname = caps[1].trim();
        return Some(JointNames {
            owner1: proper_case(&format!("{} {}", caps[2].trim(), surname)),
            owner2: proper_case(&format!("{} {}", caps[3].trim(), surname)),
            business_name: proper_case(&name),
        });
    }

    let (at, sep) = find_separator(&name)?;
    let left = name[..at].trim();
    let right = name[at + sep.len()..].trim();
    if left.is_empty() || right.is_empty() {
        return None;
    }

    let left_tokens: Vec<&str> = left.split_whitespace().collect();
    let right_tokens: Vec<&str> = right.split_whitespace().collect();
    let (owner1, owner2) = match (left_tokens.len(), right_tokens.len()) {
        // "Earl & Cathy Marsh"
        (1, n) if n >= 2 => (
            format!("{} {}", left, right_tokens[n - 1]),
            right.to_string(),
        ),
        // "John Smith & Jane"
        (n, 1) if n >= 2 => (
            left.to_string(),
            format!("{} {}", right, left_tokens[n - 1]),
        ),
        _ => (left.to_string(), right.to_string()),
    };

    Some(JointNames {
        owner1: proper_case(&owner1),
        owner2: proper_case(&owner2),
        business_name: proper_case(&name),
    })
}

/// Byte offset and separator of the highest-priority separator present.
/// ASCII lowercasing keeps byte offsets aligned with the original.
fn find_separator(name: &str) -> Option<(usize, &'static str)> {
    let lower = name.to_ascii_lowercase();
    JOINT_SEPARATORS
        .iter()
        .find_map(|sep| lower.find(sep).map(|at| (at, *sep)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owners(s: &str) -> (String, String) {
        let j = split_joint_names(s).unwrap();
        (j.owner1, j.owner2)
    }

    #[test]
    fn shared_surname_on_right() {
        assert_eq!(
            owners("Earl & Cathy Marsh"),
            ("Earl Marsh".to_string(), "Cathy Marsh".to_string())
        );
        assert_eq!(
            owners("Scott & Lee Ann Armstrong"),
            ("Scott Armstrong".to_string(), "Lee Ann Armstrong".to_string())
        );
    }

    #[test]
    fn shared_surname_on_left() {
        assert_eq!(
            owners("John Smith and Jane"),
            ("John Smith".to_string(), "Jane Smith".to_string())
        );
    }

    #[test]
    fn two_full_names() {
        assert_eq!(
            owners("john smith + mary jones"),
            ("John Smith".to_string(), "Mary Jones".to_string())
        );
    }

    #[test]
    fn single_tokens_verbatim() {
        assert_eq!(owners("Earl/Cathy"), ("Earl".to_string(), "Cathy".to_string()));
    }

    #[test]
    fn surname_first_form() {
        assert_eq!(
            owners("Lowder, Michael and Kate"),
            ("Michael Lowder".to_string(), "Kate Lowder".to_string())
        );
    }

    #[test]
    fn uppercase_and_separator() {
        assert_eq!(
            owners("EARL AND CATHY MARSH"),
            ("Earl Marsh".to_string(), "Cathy Marsh".to_string())
        );
    }

    #[test]
    fn business_fallback_is_whole_string() {
        let j = split_joint_names("earl & cathy marsh").unwrap();
        assert_eq!(j.business_name, "Earl & Cathy Marsh");
    }

    #[test]
    fn no_separator() {
        assert!(split_joint_names("Marsh Family Farm").is_none());
        assert!(split_joint_names("").is_none());
        assert!(split_joint_names("Smith &").is_none());
    }

    #[test]
    fn ampersand_beats_and() {
        let j = split_joint_names("Bob and Sue & Al Smith").unwrap();
        assert_eq!(j.owner1, "Bob and Sue");
        assert_eq!(j.owner2, "Al Smith");
    }
}
