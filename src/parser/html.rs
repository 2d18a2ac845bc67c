use scraper::{Html, Selector};

use crate::vocabulary::{is_social_url, Vocabulary};

use super::extract::contacts::find_phones;
use super::patterns::looks_like_url;

/// Structured hints lifted from popup markup, when markup is available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlHints {
    pub email: Option<String>,
    pub website: Option<String>,
    pub socials: Vec<String>,
    pub phone: Option<String>,
}

pub fn read_hints(html: &str, vocab: &Vocabulary) -> HtmlHints {
    let mut hints = HtmlHints::default();
    if html.trim().is_empty() {
        return hints;
    }
    let fragment = Html::parse_fragment(html);

    if let Ok(links) = Selector::parse("a[href]") {
        for a in fragment.select(&links) {
            let Some(href) = a.value().attr("href").map(str::trim) else {
                continue;
            };
            if let Some(addr) = strip_mailto(href) {
                if hints.email.is_none() && !addr.is_empty() {
                    hints.email = Some(addr.to_string());
                }
                continue;
            }
            if !looks_like_url(href) || vocab.is_excluded_url(href) {
                continue;
            }
            if is_social_url(href) {
                if !hints.socials.iter().any(|s| s == href) {
                    hints.socials.push(href.to_string());
                }
            } else if hints.website.is_none() {
                hints.website = Some(href.to_string());
            }
        }
    }

    hints.phone = fragment
        .root_element()
        .text()
        .find_map(|node| find_phones(node).into_iter().next());

    hints
}

/// Address part of a `mailto:` href, without any `?subject=` query.
fn strip_mailto(href: &str) -> Option<&str> {
    let prefix = href.get(..7)?;
    if !prefix.eq_ignore_ascii_case("mailto:") {
        return None;
    }
    let addr = &href[7..];
    Some(addr.split('?').next().unwrap_or(addr).trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_links_and_phone() {
        let html = r#"<div class="info">
            <b>Marsh Family Farm</b><br>
            <span>(555) 123-4567</span>
            <a href="MAILTO:emarsh@example.com?subject=Hi">Email us</a>
            <a href="https://maps.google.com/?q=marsh">Directions</a>
            <a href="https://www.facebook.com/marshfarm">Facebook</a>
            <a href="/members/12">Profile</a>
            <a href="http://www.marshfarm.com">Website</a>
        </div>"#;
        let hints = read_hints(html, &Vocabulary::default());
        assert_eq!(hints.email.as_deref(), Some("emarsh@example.com"));
        assert_eq!(hints.website.as_deref(), Some("http://www.marshfarm.com"));
        assert_eq!(hints.socials, ["https://www.facebook.com/marshfarm"]);
        assert_eq!(hints.phone.as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn empty_and_garbage_markup() {
        assert_eq!(read_hints("", &Vocabulary::default()), HtmlHints::default());
        let hints = read_hints("<a href=<<<>>>&&& <div", &Vocabulary::default());
        assert!(hints.email.is_none());
        assert!(hints.phone.is_none());
    }
}
