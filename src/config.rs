use std::path::Path;

use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::PopupResult;
use crate::record::Metadata;
use crate::vocabulary::Vocabulary;

pub const DEFAULT_DATA_SOURCE: &str = "Suffolk DigitalOvine";
pub const DEFAULT_SOURCE_URL: &str =
    "https://suffolk.digitalovine.com/modules.php?op=modload&name=_custom_maps&file=members#the-map";

/// Defaults, then an optional TOML file, then `POPUP_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub data_source: String,
    pub source_url: String,
    #[serde(default)]
    pub extra_noise: Vec<String>,
    #[serde(default)]
    pub extra_excluded_domains: Vec<String>,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Settings {
    pub fn load(file: Option<&Path>) -> PopupResult<Self> {
        let mut builder = Config::builder()
            .set_default("data_source", DEFAULT_DATA_SOURCE)?
            .set_default("source_url", DEFAULT_SOURCE_URL)?;
        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix("POPUP")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("extra_noise")
                    .with_list_parse_key("extra_excluded_domains"),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::with_extras(&self.extra_noise, &self.extra_excluded_domains)
    }

    /// Metadata for one popup. Missing per-popup values fall back to the
    /// configured source URL and today's local date.
    pub fn metadata(&self, source_url: Option<&str>, date_scraped: Option<&str>) -> Metadata {
        Metadata {
            data_source: self.data_source.clone(),
            source_url: source_url.unwrap_or(&self.source_url).to_string(),
            date_scraped: date_scraped
                .map(str::to_string)
                .unwrap_or_else(today),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            extra_noise: Vec::new(),
            extra_excluded_domains: Vec::new(),
            workers: None,
        }
    }
}

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
