use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Map-widget chrome that shows up in popup text but never describes a member.
pub const DEFAULT_NOISE: &[&str] = &[
    "map data",
    "google",
    "satellite",
    "terrain",
    "terms of use",
    "terms of service",
    "privacy policy",
    "report a map error",
    "keyboard shortcuts",
    "view larger map",
    "get directions",
    "zoom in",
    "zoom out",
    "toggle fullscreen",
    "leaflet",
    "openstreetmap",
    "mapbox",
    "\u{a9}",
];

/// Mapping and hosting infrastructure; links here are never a member website.
pub const DEFAULT_EXCLUDED_DOMAINS: &[&str] = &[
    "google.com",
    "goo.gl",
    "googleapis.com",
    "gstatic.com",
    "openstreetmap.org",
    "mapbox.com",
    "leafletjs.com",
    "bing.com",
    "arcgis.com",
    "digitalovine.com",
    "w3.org",
    "schema.org",
];

/// Hosts routed to the social-network slots instead of the website slot.
pub const SOCIAL_HOSTS: &[&str] = &[
    "facebook.com",
    "instagram.com",
    "twitter.com",
    "x.com",
    "youtube.com",
    "linkedin.com",
    "tiktok.com",
];

/// Scale-bar labels ("500 m", "2 km", "1,000 ft").
static SCALE_BAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+(?:[.,]\d+)*\s*(?:m|km|mi|ft|yd)$").unwrap()
});

/// Read-only exclusion lists consulted by the popup extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    noise: Vec<String>,
    excluded_domains: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            noise: DEFAULT_NOISE.iter().map(|s| s.to_string()).collect(),
            excluded_domains: DEFAULT_EXCLUDED_DOMAINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    /// Built-in lists plus caller-configured extras, all lowercased.
    pub fn with_extras(extra_noise: &[String], extra_domains: &[String]) -> Self {
        let mut vocab = Vocabulary::default();
        vocab.noise.extend(lowercase_non_empty(extra_noise));
        vocab.excluded_domains.extend(lowercase_non_empty(extra_domains));
        vocab
    }

    /// Copy that also excludes the host the popup was scraped from.
    pub fn for_source(&self, source_url: &str) -> Self {
        let mut vocab = self.clone();
        if let Some(host) = site_domain(source_url) {
            if !vocab.excluded_domains.contains(&host) {
                vocab.excluded_domains.push(host);
            }
        }
        vocab
    }

    pub fn is_noise(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.noise.iter().any(|n| lower.contains(n.as_str())) || SCALE_BAR_RE.is_match(line.trim())
    }

    /// Whether the URL's host is an excluded domain or one of its subdomains.
    pub fn is_excluded_url(&self, url: &str) -> bool {
        match host_of(url) {
            Some(host) => self.excluded_domains.iter().any(|d| on_domain(&host, d)),
            None => false,
        }
    }
}

/// Whether `url` points at a social-network profile.
pub fn is_social_url(url: &str) -> bool {
    match host_of(url) {
        Some(host) => SOCIAL_HOSTS.iter().any(|s| on_domain(&host, s)),
        None => false,
    }
}

fn on_domain(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|sub| sub.ends_with('.'))
}

/// Host without a leading `www.`.
fn site_domain(source_url: &str) -> Option<String> {
    let host = host_of(source_url)?;
    Some(host.strip_prefix("www.").unwrap_or(&host).to_string())
}

fn host_of(url: &str) -> Option<String> {
    let url = url.trim();
    let parsed = if url.contains("://") {
        Url::parse(url)
    } else {
        Url::parse(&format!("http://{url}"))
    };
    parsed
        .ok()?
        .host_str()
        .map(|h| h.to_ascii_lowercase())
}

fn lowercase_non_empty(items: &[String]) -> impl Iterator<Item = String> + '_ {
    items
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_is_case_insensitive_substring() {
        let v = Vocabulary::default();
        assert!(v.is_noise("Map Data ©2025"));
        assert!(v.is_noise("\u{a9}2025 Google"));
        assert!(v.is_noise("Terms of Use"));
        assert!(!v.is_noise("Marsh Family Farm"));
    }

    #[test]
    fn scale_bar_is_noise() {
        let v = Vocabulary::default();
        assert!(v.is_noise("500 m"));
        assert!(v.is_noise("2 km"));
        assert!(v.is_noise("1,000 ft"));
        assert!(!v.is_noise("500 Main St"));
    }

    #[test]
    fn extras_are_appended() {
        let v = Vocabulary::with_extras(&["Member Map".into()], &["Example.ORG".into()]);
        assert!(v.is_noise("member map legend"));
        assert!(v.is_excluded_url("https://www.example.org/x"));
        assert!(v.is_excluded_url("https://maps.google.com/?q=1"));
    }

    #[test]
    fn source_host_is_excluded() {
        let v = Vocabulary::default().for_source("https://www.suffolkbreeders.net/map#pins");
        assert!(v.is_excluded_url("http://suffolkbreeders.net/members"));
        assert!(!v.is_excluded_url("http://marshfarm.com"));
    }

    #[test]
    fn exclusion_matches_hosts_not_substrings() {
        let v = Vocabulary::default();
        assert!(!v.is_excluded_url("www.springlambing.com"));
        assert!(!v.is_excluded_url("http://smithplumbing.com"));
        assert!(!v.is_excluded_url("https://notgoogle.com.example/x"));
        assert!(v.is_excluded_url("https://www.bing.com/maps"));
        assert!(v.is_excluded_url("arcgis.com/home"));
        assert!(!v.is_excluded_url("/members/12"));
    }

    #[test]
    fn social_hosts() {
        assert!(is_social_url("https://www.facebook.com/marshfarm"));
        assert!(is_social_url("instagram.com/marshfarm"));
        assert!(!is_social_url("https://marshfarm.com"));
        assert!(!is_social_url("https://box.com"));
    }
}
