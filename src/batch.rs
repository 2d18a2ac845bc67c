use std::path::Path;

use rayon::prelude::*;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::assemble::clean;
use crate::config::Settings;
use crate::error::{PopupError, PopupResult};
use crate::parser::{extract_popup_data, PopupInput};
use crate::record::{CanonicalRecord, Field};
use crate::vocabulary::Vocabulary;

/// Progress of a batch run, emitted in order per popup but interleaved
/// across workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Started { total: usize },
    Processed { index: usize, business_name: String },
    Finished { records: usize },
}

/// Read-only state shared by every worker.
pub struct Batch {
    settings: Settings,
    vocab: Vocabulary,
}

impl Batch {
    pub fn new(settings: Settings) -> Self {
        let vocab = settings.vocabulary();
        Batch { settings, vocab }
    }

    /// Extract and clean one popup.
    pub fn process_one(&self, input: &PopupInput) -> CanonicalRecord {
        let meta = self
            .settings
            .metadata(input.source_url.as_deref(), input.date_scraped.as_deref());
        let provisional = extract_popup_data(&input.text, input.html.as_deref(), &meta, &self.vocab);
        clean(&provisional)
    }

    /// Every popup independently and in parallel; output keeps input order.
    pub fn run(
        &self,
        inputs: &[PopupInput],
        progress: Option<&UnboundedSender<ProgressEvent>>,
    ) -> PopupResult<Vec<CanonicalRecord>> {
        let emit = |event: ProgressEvent| {
            if let Some(tx) = progress {
                // Receiver gone just means nobody is watching.
                let _ = tx.send(event);
            }
        };

        emit(ProgressEvent::Started {
            total: inputs.len(),
        });
        let work = || {
            inputs
                .par_iter()
                .enumerate()
                .map(|(index, input)| {
                    let record = self.process_one(input);
                    emit(ProgressEvent::Processed {
                        index,
                        business_name: record.get(Field::BusinessName).to_string(),
                    });
                    record
                })
                .collect::<Vec<_>>()
        };
        let records = match self.settings.workers {
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()?
                .install(work),
            None => work(),
        };
        emit(ProgressEvent::Finished {
            records: records.len(),
        });
        info!(records = records.len(), "batch complete");
        Ok(records)
    }
}

/// One `PopupInput` per non-blank line. Malformed lines are logged and
/// skipped so one bad popup never sinks the batch.
pub fn read_inputs(path: &Path) -> PopupResult<Vec<PopupInput>> {
    let raw = std::fs::read_to_string(path).map_err(|source| PopupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_inputs(path, &raw))
}

fn parse_inputs(path: &Path, raw: &str) -> Vec<PopupInput> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(i, line)| match serde_json::from_str::<PopupInput>(line) {
            Ok(input) => Some(input),
            Err(source) => {
                let err = PopupError::Json {
                    path: path.to_path_buf(),
                    line: i + 1,
                    source,
                };
                warn!(error = %err, "skipping malformed popup");
                None
            }
        })
        .collect()
}
