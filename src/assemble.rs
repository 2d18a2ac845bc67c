use crate::clean::{
    clean_business_name, clean_city, clean_date, clean_email, clean_phone, clean_text,
    clean_website, clean_zip, normalize, proper_case, split_joint_names,
};
use crate::record::{CanonicalRecord, Field, ProvisionalRecord, Record};

type Cleaner = fn(&str) -> String;

/// Exactly one cleaner per field. Owners have none of their own: they are
/// cleaned as a pair by `clean_owner_names`.
fn cleaner_for(field: Field) -> Option<Cleaner> {
    let cleaner: Cleaner = match field {
        Field::Owner1 | Field::Owner2 => return None,
        Field::BusinessName => clean_business_name,
        Field::PhonePrimary | Field::PhoneCell | Field::PhoneOffice | Field::PhoneOther => {
            clean_phone
        }
        Field::City => clean_city,
        Field::Zip => clean_zip,
        Field::Email1 | Field::Email2 => clean_email,
        Field::Website => clean_website,
        Field::LastUpdated | Field::DateScraped => clean_date,
        Field::AddressLine1
        | Field::AddressLine2
        | Field::State
        | Field::Country
        | Field::BusinessType
        | Field::Species
        | Field::Breeds
        | Field::SocialNetwork1
        | Field::SocialNetwork2
        | Field::SocialNetwork3
        | Field::About
        | Field::Notes
        | Field::DataSource
        | Field::DataSourceUrl => clean_text,
    };
    Some(cleaner)
}

/// Map a provisional record through the field cleaners.
pub fn clean(provisional: &ProvisionalRecord) -> CanonicalRecord {
    let raw = &provisional.0;
    let record = Field::ALL
        .iter()
        .fold(Record::default(), |record, field| match cleaner_for(*field) {
            Some(cleaner) => record.with(*field, cleaner(raw.get(*field))),
            None => record,
        });
    let (owner1, owner2) = clean_owner_names(raw.get(Field::Owner1), raw.get(Field::Owner2));
    CanonicalRecord(
        record
            .with(Field::Owner1, owner1)
            .with(Field::Owner2, owner2),
    )
}

/// Proper-cased owners. A lone compound owner1 ("Scott & Lee Ann
/// Armstrong", "Lowder, Michael and Kate") is split when extraction missed it.
pub fn clean_owner_names(owner1: &str, owner2: &str) -> (String, String) {
    let owner1 = normalize(owner1);
    let owner2 = normalize(owner2);
    let compound =
        owner1.contains(" & ") || (owner1.contains(", ") && owner1.contains(" and "));
    if compound && owner2.is_empty() {
        if let Some(joint) = split_joint_names(&owner1) {
            return (proper_case(&joint.owner1), proper_case(&joint.owner2));
        }
    }
    (proper_case(&owner1), proper_case(&owner2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_popup_data;
    use crate::record::{Metadata, EMAIL_SLOTS, PHONE_SLOTS};
    use crate::vocabulary::Vocabulary;

    fn meta() -> Metadata {
        Metadata {
            data_source: "Suffolk DigitalOvine".into(),
            source_url: "https://suffolk.digitalovine.com/members".into(),
            date_scraped: "2025-06-01".into(),
        }
    }

    fn provisional(pairs: &[(Field, &str)]) -> ProvisionalRecord {
        ProvisionalRecord(
            pairs
                .iter()
                .fold(Record::default(), |r, (f, v)| r.with(*f, *v)),
        )
    }

    #[test]
    fn end_to_end_marsh() {
        let text = "Marsh Family Farm\nEarl & Cathy Marsh\n123 Main St\nAnytown, TX 75001\n(555) 123-4567\nemarsh@example.com";
        let rec = clean(&extract_popup_data(text, None, &meta(), &Vocabulary::default()));
        assert_eq!(rec.get(Field::BusinessName), "Marsh Family Farm");
        assert_eq!(rec.get(Field::Owner1), "Earl Marsh");
        assert_eq!(rec.get(Field::Owner2), "Cathy Marsh");
        assert_eq!(rec.get(Field::AddressLine1), "123 Main St");
        assert_eq!(rec.get(Field::City), "Anytown");
        assert_eq!(rec.get(Field::State), "TX");
        assert_eq!(rec.get(Field::Zip), "75001");
        assert_eq!(rec.get(Field::PhonePrimary), "5551234567");
        assert_eq!(rec.get(Field::Email1), "emarsh@example.com");
        assert_eq!(rec.get(Field::DateScraped), "2025-06-01");
    }

    #[test]
    fn splits_missed_compound_owner() {
        let rec = clean(&provisional(&[(Field::Owner1, "scott & lee ann armstrong")]));
        assert_eq!(rec.get(Field::Owner1), "Scott Armstrong");
        assert_eq!(rec.get(Field::Owner2), "Lee Ann Armstrong");

        let rec = clean(&provisional(&[(Field::Owner1, "Lowder, Michael and Kate")]));
        assert_eq!(rec.get(Field::Owner1), "Michael Lowder");
        assert_eq!(rec.get(Field::Owner2), "Kate Lowder");
    }

    #[test]
    fn existing_owner2_blocks_split() {
        let rec = clean(&provisional(&[
            (Field::Owner1, "earl & cathy marsh"),
            (Field::Owner2, "bob marsh"),
        ]));
        assert_eq!(rec.get(Field::Owner1), "Earl & Cathy Marsh");
        assert_eq!(rec.get(Field::Owner2), "Bob Marsh");
    }

    #[test]
    fn owners_have_no_standalone_cleaner() {
        let owners = Field::ALL
            .iter()
            .filter(|f| cleaner_for(**f).is_none())
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(owners, [Field::Owner1, Field::Owner2]);
    }

    #[test]
    fn invalid_values_become_empty() {
        let rec = clean(&provisional(&[
            (Field::PhonePrimary, "12345"),
            (Field::PhoneCell, "call 1 (555) 123-4567 x"),
            (Field::Email1, "nobody at nowhere"),
            (Field::Zip, "TX"),
            (Field::LastUpdated, "13/99/9999"),
        ]));
        assert_eq!(rec.get(Field::PhonePrimary), "");
        assert_eq!(rec.get(Field::PhoneCell), "5551234567");
        assert_eq!(rec.get(Field::Email1), "");
        assert_eq!(rec.get(Field::Zip), "");
        assert_eq!(rec.get(Field::LastUpdated), "");
    }

    #[test]
    fn clean_is_idempotent() {
        let text = std::fs::read_to_string("tests/fixtures/hilltop.txt").unwrap();
        let html = std::fs::read_to_string("tests/fixtures/hilltop.html").unwrap();
        for (t, h) in [(text.as_str(), Some(html.as_str())), ("Marsh Family Farm\nEarl & Cathy Marsh", None)] {
            let once = clean(&extract_popup_data(t, h, &meta(), &Vocabulary::default()));
            let twice = clean(&once.to_provisional());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn output_invariants_hold_on_noisy_input() {
        let text = "WOOL & CO LLC\nphone 1-800-555-0199 ext 4\nBAD@@mail\n99999999999999\nhttp://\nwww.\n\u{e2}\u{20ac}\u{2122}";
        let rec = clean(&extract_popup_data(text, None, &meta(), &Vocabulary::default()));
        for f in PHONE_SLOTS {
            let v = rec.get(f);
            assert!(v.is_empty() || ((7..=10).contains(&v.len()) && v.chars().all(|c| c.is_ascii_digit())));
        }
        for f in EMAIL_SLOTS {
            let v = rec.get(f);
            assert!(v.is_empty() || (v.contains('@') && v == v.to_lowercase()));
        }
    }
}
