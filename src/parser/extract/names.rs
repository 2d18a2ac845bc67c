use crate::clean::{display_case, has_joint_separator, split_joint_names};
use crate::record::{Field, Record};

use super::super::lines::LinePool;
use super::super::patterns::is_business;

type Applies = fn(&str) -> bool;
type Assign = fn(Record, &str, Option<&str>) -> Record;

/// How the first name candidate is read, tried in order. The joint-name
/// check runs before the business-keyword check, so "Earl & Cathy Marsh Farm"
/// splits rather than becoming the business name.
const FIRST_CANDIDATE_RULES: &[(&str, Applies, Assign)] = &[
    ("joint", has_joint_separator, joint_first),
    ("business", is_business, business_first),
    ("owner", |_| true, owner_first),
];

/// Business name and owners from the first two name candidates.
pub fn assign_names(record: Record, pool: &LinePool) -> Record {
    let candidates = pool.name_candidates();
    let Some(first) = candidates.first().copied() else {
        return record;
    };
    let second = candidates.get(1).copied();

    let record = match FIRST_CANDIDATE_RULES
        .iter()
        .find(|(_, applies, _)| applies(first))
    {
        Some((_, _, assign)) => assign(record, first, second),
        None => record,
    };

    let owner1 = record.get(Field::Owner1).to_string();
    record.fill(Field::BusinessName, &owner1)
}

fn joint_first(record: Record, first: &str, second: Option<&str>) -> Record {
    let Some(joint) = split_joint_names(first) else {
        return owner_first(record, first, second);
    };
    record
        .fill(Field::Owner1, &joint.owner1)
        .fill(Field::Owner2, &joint.owner2)
        .fill(Field::BusinessName, &joint.business_name)
}

fn business_first(record: Record, first: &str, second: Option<&str>) -> Record {
    let record = record.fill(Field::BusinessName, &display_case(first));
    let Some(second) = second else {
        return record;
    };
    let joint = has_joint_separator(second)
        .then(|| split_joint_names(second))
        .flatten();
    match joint {
        Some(joint) => record
            .fill(Field::Owner1, &joint.owner1)
            .fill(Field::Owner2, &joint.owner2),
        None => record.fill(Field::Owner1, &display_case(second)),
    }
}

fn owner_first(record: Record, first: &str, second: Option<&str>) -> Record {
    let record = record.fill(Field::Owner1, &display_case(first));
    match second {
        Some(s) if is_business(s) => record.fill(Field::BusinessName, &display_case(s)),
        Some(s) => record.fill(Field::Owner2, &display_case(s)),
        None => record,
    }
}
