use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::case::proper_case;
use super::text::normalize;

pub(crate) static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());
pub(crate) static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{5}(?:-\d{4})?\b").unwrap());

static LLC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bl\.l\.c\.|\bllc\b").unwrap());
static INC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:incorporated|inc)\b").unwrap());

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").unwrap());

/// Order of components in a date pattern's three capture groups.
#[derive(Debug, Clone, Copy)]
enum DateOrder {
    MonthDayYear,
    YearMonthDay,
}

/// Tried in order, first valid calendar date wins.
static DATE_PATTERNS: LazyLock<Vec<(Regex, DateOrder)>> = LazyLock::new(|| {
    [
        (r"(\d{1,2})/(\d{1,2})/(\d{4})", DateOrder::MonthDayYear),
        (r"(\d{1,2})-(\d{1,2})-(\d{4})", DateOrder::MonthDayYear),
        (r"(\d{4})/(\d{1,2})/(\d{1,2})", DateOrder::YearMonthDay),
        (r"(\d{1,2})/(\d{1,2})/(\d{2})", DateOrder::MonthDayYear),
    ]
    .into_iter()
    .map(|(p, order)| (Regex::new(p).unwrap(), order))
    .collect()
});

/// Generic text fields.
pub fn clean_text(text: &str) -> String {
    normalize(text)
}

pub fn clean_business_name(name: &str) -> String {
    let name = normalize(name);
    if name.is_empty() {
        return name;
    }
    let name = LLC_RE.replace_all(&name, "LLC");
    let name = INC_RE.replace_all(&name, "Inc");
    proper_case(&name)
}

/// Digits only, 7 to 10 of them; a leading US country code is dropped.
pub fn clean_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let digits = match digits.strip_prefix('1') {
        Some(rest) if digits.len() == 11 => rest.to_string(),
        _ => digits,
    };
    if (7..=10).contains(&digits.len()) {
        digits
    } else {
        String::new()
    }
}

pub fn clean_email(email: &str) -> String {
    let email = normalize(email);
    EMAIL_RE
        .find(&email)
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default()
}

pub fn clean_website(website: &str) -> String {
    let website = normalize(website);
    if website.is_empty() || website.starts_with("http://") || website.starts_with("https://") {
        return website;
    }
    if website.starts_with("www.") {
        format!("http://{website}")
    } else if website.contains('.') {
        format!("http://www.{website}")
    } else {
        website
    }
}

pub fn clean_zip(zip: &str) -> String {
    ZIP_RE
        .find(zip)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

pub fn clean_city(city: &str) -> String {
    proper_case(&normalize(city))
}

/// Normalize to `YYYY-MM-DD`, or `""` when no pattern yields a real date.
pub fn clean_date(date: &str) -> String {
    let date = date.trim();
    if date.is_empty() {
        return String::new();
    }
    if let Some(caps) = ISO_DATE_RE.captures(date) {
        return ymd(&caps[1], &caps[2], &caps[3]).unwrap_or_default();
    }
    DATE_PATTERNS
        .iter()
        .find_map(|(re, order)| {
            let caps = re.captures(date)?;
            match order {
                DateOrder::MonthDayYear => ymd(&expand_year(&caps[3]), &caps[1], &caps[2]),
                DateOrder::YearMonthDay => ymd(&caps[1], &caps[2], &caps[3]),
            }
        })
        .unwrap_or_default()
}

/// Two-digit years pivot at 50: `24` is 2024, `87` is 1987.
fn expand_year(year: &str) -> String {
    if year.len() != 2 {
        return year.to_string();
    }
    match year.parse::<u32>() {
        Ok(y) if y < 50 => format!("20{year}"),
        _ => format!("19{year}"),
    }
}

fn ymd(year: &str, month: &str, day: &str) -> Option<String> {
    let date = NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)?;
    Some(date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_name_suffixes() {
        assert_eq!(clean_business_name("green acres l.l.c."), "Green Acres LLC");
        assert_eq!(clean_business_name("woolly  llc"), "Woolly LLC");
        assert_eq!(clean_business_name("ewe and me incorporated"), "Ewe and Me INC");
        assert_eq!(clean_business_name(""), "");
    }

    #[test]
    fn phone_rules() {
        assert_eq!(clean_phone("(555) 123-4567"), "5551234567");
        assert_eq!(clean_phone("1-555-123-4567"), "5551234567");
        assert_eq!(clean_phone("123-4567"), "1234567");
        assert_eq!(clean_phone("123456"), "");
        assert_eq!(clean_phone("2-555-123-4567"), "");
        assert_eq!(clean_phone("call me"), "");
    }

    #[test]
    fn email_searches_and_lowercases() {
        assert_eq!(clean_email("Email: EMarsh@Example.COM "), "emarsh@example.com");
        assert_eq!(clean_email("not an email"), "");
    }

    #[test]
    fn website_prefixing() {
        assert_eq!(clean_website("www.marshfarm.com"), "http://www.marshfarm.com");
        assert_eq!(clean_website("marshfarm.com"), "http://www.marshfarm.com");
        assert_eq!(clean_website("https://marshfarm.com"), "https://marshfarm.com");
        assert_eq!(clean_website("marshfarm"), "marshfarm");
    }

    #[test]
    fn zip_search() {
        assert_eq!(clean_zip("Anytown, TX 75001-1234"), "75001-1234");
        assert_eq!(clean_zip("TX"), "");
    }

    #[test]
    fn city_case() {
        assert_eq!(clean_city("  SAN  antonio "), "San Antonio");
    }

    #[test]
    fn dates() {
        assert_eq!(clean_date("3/4/2024"), "2024-03-04");
        assert_eq!(clean_date("3/4/24"), "2024-03-04");
        assert_eq!(clean_date("12/31/87"), "1987-12-31");
        assert_eq!(clean_date("03-04-2024"), "2024-03-04");
        assert_eq!(clean_date("2024/3/4"), "2024-03-04");
        assert_eq!(clean_date("2024-03-04"), "2024-03-04");
        assert_eq!(clean_date("2024-03-04T10:00:00"), "2024-03-04");
        assert_eq!(clean_date("13/99/9999"), "");
        assert_eq!(clean_date("yesterday"), "");
    }

    #[test]
    fn cleaners_are_idempotent() {
        let cases: &[(fn(&str) -> String, &str)] = &[
            (clean_business_name, "marsh family farm inc"),
            (clean_phone, "+1 (555) 123-4567"),
            (clean_email, "x <EMarsh@Example.com>"),
            (clean_website, "marshfarm.com"),
            (clean_zip, "TX 75001"),
            (clean_city, "anytown"),
            (clean_date, "3/4/24"),
            (clean_text, " a  b "),
            (clean_city, "\u{df}tadt"),
            (clean_business_name, "\u{df}heep farm"),
        ];
        for (clean, input) in cases {
            let once = clean(input);
            assert_eq!(clean(&once), once, "not idempotent for {input:?}");
        }
    }
}
