pub mod address;
pub mod contacts;
pub mod livestock;
pub mod names;

use crate::record::Record;
use crate::vocabulary::Vocabulary;

use super::lines::LinePool;

/// What every text step gets to look at.
pub struct Popup<'a> {
    pub pool: LinePool,
    pub vocab: &'a Vocabulary,
}

type Step = fn(Record, &Popup<'_>) -> Record;

/// Text-pattern passes, in order. Each only fills slots still empty, so an
/// earlier pass (or the markup pass before all of them) always wins.
pub const TEXT_STEPS: &[(&str, Step)] = &[
    ("phones", |r, p| contacts::assign_phones(r, &p.pool)),
    ("emails", |r, p| contacts::assign_emails(r, &p.pool)),
    ("web", |r, p| contacts::assign_web(r, &p.pool, p.vocab)),
    ("names", |r, p| names::assign_names(r, &p.pool)),
    ("address_lines", |r, p| address::assign_address_lines(r, &p.pool)),
    ("city_state_zip", |r, p| address::assign_city_state_zip(r, &p.pool)),
    ("species", |r, p| livestock::assign_species(r, &p.pool)),
];

pub fn run_text_steps(record: Record, popup: &Popup<'_>) -> Record {
    TEXT_STEPS
        .iter()
        .fold(record, |record, (_, step)| step(record, popup))
}
