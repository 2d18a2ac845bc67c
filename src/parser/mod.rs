pub mod extract;
pub mod html;
pub mod lines;
pub mod patterns;

use std::panic::{self, AssertUnwindSafe};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::record::{Field, Metadata, ProvisionalRecord, Record, SOCIAL_SLOTS};
use crate::vocabulary::Vocabulary;
use extract::Popup;
use html::HtmlHints;
use lines::LinePool;

/// One popup as handed over by the scraping side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PopupInput {
    pub text: String,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub date_scraped: Option<String>,
}

/// Markup pass first, then the text passes; first match wins throughout.
///
/// Never panics: a failure while reading markup falls back to text-only
/// extraction, any other failure yields the metadata-only record.
pub fn extract_popup_data(
    raw_text: &str,
    raw_html: Option<&str>,
    meta: &Metadata,
    vocab: &Vocabulary,
) -> ProvisionalRecord {
    let vocab = vocab.for_source(&meta.source_url);
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
        let record = match raw_html {
            Some(html) => apply_html(Record::default(), html, &vocab),
            None => Record::default(),
        };
        let popup = Popup {
            pool: LinePool::from_raw(raw_text, &vocab),
            vocab: &vocab,
        };
        extract::run_text_steps(record, &popup)
    }));

    match attempt {
        Ok(record) => {
            debug!(
                business = record.get(Field::BusinessName),
                owner1 = record.get(Field::Owner1),
                phone = record.get(Field::PhonePrimary),
                "extracted popup"
            );
            ProvisionalRecord(meta.apply(record))
        }
        Err(_) => {
            warn!(source_url = %meta.source_url, "popup extraction failed, keeping metadata only");
            ProvisionalRecord::metadata_only(meta)
        }
    }
}

fn apply_html(record: Record, html: &str, vocab: &Vocabulary) -> Record {
    let hints = match panic::catch_unwind(AssertUnwindSafe(|| html::read_hints(html, vocab))) {
        Ok(hints) => hints,
        Err(_) => {
            warn!("popup markup unreadable, falling back to text only");
            return record;
        }
    };
    let HtmlHints {
        email,
        website,
        socials,
        phone,
    } = hints;
    let record = record
        .fill(Field::Email1, email.as_deref().unwrap_or_default())
        .fill(Field::Website, website.as_deref().unwrap_or_default())
        .fill(Field::PhonePrimary, phone.as_deref().unwrap_or_default());
    socials
        .iter()
        .fold(record, |record, url| record.fill_first_empty(&SOCIAL_SLOTS, url).0)
}
