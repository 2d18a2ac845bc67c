use std::collections::HashMap;
use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The fixed key set shared by provisional and canonical records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BusinessName,
    Owner1,
    Owner2,
    PhonePrimary,
    PhoneCell,
    PhoneOffice,
    PhoneOther,
    AddressLine1,
    AddressLine2,
    City,
    State,
    Zip,
    Country,
    Email1,
    Email2,
    Website,
    BusinessType,
    Species,
    Breeds,
    SocialNetwork1,
    SocialNetwork2,
    SocialNetwork3,
    LastUpdated,
    About,
    Notes,
    DataSource,
    DataSourceUrl,
    DateScraped,
}

pub const PHONE_SLOTS: [Field; 4] = [
    Field::PhonePrimary,
    Field::PhoneCell,
    Field::PhoneOffice,
    Field::PhoneOther,
];
pub const EMAIL_SLOTS: [Field; 2] = [Field::Email1, Field::Email2];
pub const SOCIAL_SLOTS: [Field; 3] = [
    Field::SocialNetwork1,
    Field::SocialNetwork2,
    Field::SocialNetwork3,
];

impl Field {
    pub const COUNT: usize = 28;

    pub const ALL: [Field; Field::COUNT] = [
        Field::BusinessName,
        Field::Owner1,
        Field::Owner2,
        Field::PhonePrimary,
        Field::PhoneCell,
        Field::PhoneOffice,
        Field::PhoneOther,
        Field::AddressLine1,
        Field::AddressLine2,
        Field::City,
        Field::State,
        Field::Zip,
        Field::Country,
        Field::Email1,
        Field::Email2,
        Field::Website,
        Field::BusinessType,
        Field::Species,
        Field::Breeds,
        Field::SocialNetwork1,
        Field::SocialNetwork2,
        Field::SocialNetwork3,
        Field::LastUpdated,
        Field::About,
        Field::Notes,
        Field::DataSource,
        Field::DataSourceUrl,
        Field::DateScraped,
    ];

    /// Snake-case key used by provisional records.
    pub fn key(self) -> &'static str {
        match self {
            Field::BusinessName => "business_name",
            Field::Owner1 => "owner1",
            Field::Owner2 => "owner2",
            Field::PhonePrimary => "phone_primary",
            Field::PhoneCell => "phone_cell",
            Field::PhoneOffice => "phone_office",
            Field::PhoneOther => "phone_other",
            Field::AddressLine1 => "address_line1",
            Field::AddressLine2 => "address_line2",
            Field::City => "city",
            Field::State => "state",
            Field::Zip => "zip_code",
            Field::Country => "country",
            Field::Email1 => "email1",
            Field::Email2 => "email2",
            Field::Website => "website",
            Field::BusinessType => "business_type",
            Field::Species => "species",
            Field::Breeds => "breeds",
            Field::SocialNetwork1 => "social_network1",
            Field::SocialNetwork2 => "social_network2",
            Field::SocialNetwork3 => "social_network3",
            Field::LastUpdated => "last_updated",
            Field::About => "about",
            Field::Notes => "notes",
            Field::DataSource => "data_source",
            Field::DataSourceUrl => "data_source_url",
            Field::DateScraped => "date_scraped",
        }
    }

    /// Export column name used by canonical records.
    pub fn column(self) -> &'static str {
        match self {
            Field::BusinessName => "Business Name",
            Field::Owner1 => "Owner1",
            Field::Owner2 => "Owner2",
            Field::PhonePrimary => "Phone_primary",
            Field::PhoneCell => "Phone_cell",
            Field::PhoneOffice => "Phone_office",
            Field::PhoneOther => "Phone_other",
            Field::AddressLine1 => "Address_Line1",
            Field::AddressLine2 => "Address_Line2",
            Field::City => "City",
            Field::State => "State / Province / Region",
            Field::Zip => "Zip / Postal Code",
            Field::Country => "Country",
            Field::Email1 => "Email1",
            Field::Email2 => "Email2",
            Field::Website => "Website",
            Field::BusinessType => "Business Type",
            Field::Species => "Species",
            Field::Breeds => "Breed(s)",
            Field::SocialNetwork1 => "Social Network1",
            Field::SocialNetwork2 => "Social Network 2",
            Field::SocialNetwork3 => "Social Network 3",
            Field::LastUpdated => "Last Updated",
            Field::About => "About",
            Field::Notes => "Notes",
            Field::DataSource => "Data Source",
            Field::DataSourceUrl => "Data Source URL",
            Field::DateScraped => "Date Scraped",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.key() == key)
    }

    pub fn from_column(column: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.column() == column)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fixed-schema value store: every field always present, `""` when unknown.
///
/// Updates consume the record and hand back a new one, so each extraction
/// step reads as a pure function of the record it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: [String; Field::COUNT],
}

impl Record {
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn is_set(&self, field: Field) -> bool {
        !self.values[field.index()].is_empty()
    }

    /// Unconditional write.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values[field.index()] = value.into();
        self
    }

    /// Write only if the slot is still empty (first-match-wins).
    pub fn fill(self, field: Field, value: &str) -> Self {
        if value.is_empty() || self.is_set(field) {
            return self;
        }
        self.with(field, value)
    }

    /// Write into the first empty slot of `slots`, in order. Returns the slot
    /// taken, or `None` when every slot is already full.
    pub fn fill_first_empty(self, slots: &[Field], value: &str) -> (Self, Option<Field>) {
        if value.is_empty() {
            return (self, None);
        }
        match slots.iter().copied().find(|f| !self.is_set(*f)) {
            Some(slot) => (self.with(slot, value), Some(slot)),
            None => (self, None),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.iter().map(move |f| (*f, self.get(*f)))
    }
}

/// Caller-supplied constants stamped onto every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub data_source: String,
    pub source_url: String,
    pub date_scraped: String,
}

impl Metadata {
    pub fn apply(&self, record: Record) -> Record {
        record
            .with(Field::DataSource, self.data_source.as_str())
            .with(Field::DataSourceUrl, self.source_url.as_str())
            .with(Field::DateScraped, self.date_scraped.as_str())
    }
}

/// First-pass best guesses straight out of the popup extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionalRecord(pub Record);

impl ProvisionalRecord {
    pub fn metadata_only(meta: &Metadata) -> Self {
        ProvisionalRecord(meta.apply(Record::default()))
    }

    pub fn get(&self, field: Field) -> &str {
        self.0.get(field)
    }

    pub fn into_inner(self) -> Record {
        self.0
    }
}

/// Cleaned record: every value is `""` or valid for its field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalRecord(pub Record);

impl CanonicalRecord {
    pub fn get(&self, field: Field) -> &str {
        self.0.get(field)
    }

    /// Re-reads a canonical record as provisional input, keyed identically.
    pub fn to_provisional(&self) -> ProvisionalRecord {
        ProvisionalRecord(self.0.clone())
    }
}

impl Serialize for ProvisionalRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT))?;
        for (field, value) in self.0.iter() {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

impl Serialize for CanonicalRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT))?;
        for (field, value) in self.0.iter() {
            map.serialize_entry(field.column(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProvisionalRecord {
    /// Accepts snake-case keys or export column names, snake-case winning
    /// when both name the same field. Missing keys stay `""`, unknown keys
    /// and non-string values are ignored.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: HashMap<String, serde_json::Value> = HashMap::deserialize(deserializer)?;
        let lookups: [fn(&str) -> Option<Field>; 2] = [Field::from_column, Field::from_key];
        let record = lookups.iter().fold(Record::default(), |record, lookup| {
            raw.iter().fold(record, |record, (key, value)| {
                match (lookup(key.as_str()), value.as_str()) {
                    (Some(field), Some(text)) => record.with(field, text),
                    _ => record,
                }
            })
        });
        Ok(ProvisionalRecord(record))
    }
}
