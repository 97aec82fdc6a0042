//! Field mappers from host records to document fragments.
//!
//! One small pure function per fragment family, all sharing the same
//! contract: the input is a source record (plus pre-resolved related
//! records), the output is an `Option` or a `Vec`, never an error. A record
//! of the wrong kind or a missing mandatory field yields an absent fragment
//! and a warn log; a missing optional field yields an omitted attribute.
//! Shared state is limited to the [`MapperContext`] passed explicitly.

pub mod care_plan;
pub mod consent;
pub mod diagnosis;
pub mod ecog;
pub mod episode;
pub mod family_member;
pub mod follow_up;
pub mod medication;
pub mod ngs_report;
pub mod patient;
pub mod recommendation;
pub mod requests;
pub mod specimen;
pub mod study_inclusion;

use crate::anonymize::Anonymizer;
use crate::store::{Record, RecordKind, RecordStore};
use chrono::NaiveDate;

/// Formatting and anonymization context threaded through every mapper.
pub struct MapperContext<'a, S: RecordStore> {
    pub store: &'a S,
    pub anonymizer: &'a Anonymizer,
}

impl<'a, S: RecordStore> MapperContext<'a, S> {
    pub fn new(store: &'a S, anonymizer: &'a Anonymizer) -> Self {
        Self { store, anonymizer }
    }
}

/// Full-precision wire date.
pub(crate) fn full_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Month-precision wire date, used for patient demographics only.
pub(crate) fn month_date(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Kind guard shared by all mappers: wrong-kind input logs and bails.
pub(crate) fn expect_kind(record: &Record, expected: &RecordKind) -> bool {
    if &record.kind == expected {
        return true;
    }
    tracing::warn!(
        record = %record.id,
        form = record.kind.form_type(),
        expected = expected.form_type(),
        "not mapping - unexpected record kind",
    );
    false
}
