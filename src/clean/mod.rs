//! Field-level cleaning: text hygiene, casing, per-field validators and the
//! joint-owner splitter. Every function here is total and returns `""` when
//! it cannot produce a valid value.

pub mod case;
pub mod fields;
pub mod joint;
pub mod text;

pub use case::{display_case, proper_case};
pub use fields::{
    clean_business_name, clean_city, clean_date, clean_email, clean_phone, clean_text,
    clean_website, clean_zip,
};
pub use joint::{has_joint_separator, split_joint_names, JointNames};
pub use text::normalize;
