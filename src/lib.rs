//! Contact extraction for livestock-registry map popups: pull a loose
//! provisional record out of popup text (and markup, when present), then
//! clean it into the canonical column set.

pub mod assemble;
pub mod batch;
pub mod clean;
pub mod config;
pub mod error;
pub mod parser;
pub mod record;
pub mod vocabulary;

pub use assemble::clean;
pub use batch::{Batch, ProgressEvent};
pub use error::{PopupError, PopupResult};
pub use parser::{extract_popup_data, PopupInput};
pub use record::{CanonicalRecord, Field, Metadata, ProvisionalRecord, Record};
pub use vocabulary::Vocabulary;
