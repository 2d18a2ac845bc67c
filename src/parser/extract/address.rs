use crate::record::{Field, Record};

use super::super::lines::LinePool;
use super::super::patterns::{looks_like_street, CITY_STATE_ZIP_RE, STATE_ZIP_RE, ZIP_RE};

/// First two street-shaped or "ST 12345"-shaped lines become the address.
pub fn assign_address_lines(record: Record, pool: &LinePool) -> Record {
    let mut lines = pool
        .lines()
        .iter()
        .filter(|l| looks_like_street(l) || STATE_ZIP_RE.is_match(l));
    let record = match lines.next() {
        Some(line) => record.fill(Field::AddressLine1, line),
        None => return record,
    };
    match lines.next() {
        Some(line) => record.fill(Field::AddressLine2, line),
        None => record,
    }
}

/// ZIP from the first "ST 12345" line, else from the first line carrying
/// one at all; city and state too when that line reads "City, ST 12345".
pub fn assign_city_state_zip(record: Record, pool: &LinePool) -> Record {
    let Some((line, zip)) = zip_line(pool) else {
        return record;
    };
    let record = record.fill(Field::Zip, zip);
    match CITY_STATE_ZIP_RE.captures(line) {
        Some(caps) => record
            .fill(Field::City, caps[1].trim())
            .fill(Field::State, &caps[2]),
        None => record,
    }
}

/// A 5-digit rural street number ("12345 County Road 9") looks like a ZIP,
/// so a line with a state abbreviation in front of the ZIP goes first.
fn zip_line(pool: &LinePool) -> Option<(&str, &str)> {
    let lines = pool.lines();
    lines
        .iter()
        .find_map(|l| {
            let state_zip = STATE_ZIP_RE.find(l)?;
            let zip = ZIP_RE.find(state_zip.as_str())?;
            Some((l.as_str(), zip.as_str()))
        })
        .or_else(|| {
            lines
                .iter()
                .find_map(|l| ZIP_RE.find(l).map(|m| (l.as_str(), m.as_str())))
        })
}
