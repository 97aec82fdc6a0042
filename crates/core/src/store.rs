//! The host record-store boundary.
//!
//! Source records are owned by the external record store and are read-only
//! to this crate. A record has a form-type tag (resolved once into a
//! [`RecordKind`]), an internal integer identifier, an optional structural
//! parent, named typed field values and associated disease references.
//!
//! Records form a directed graph: a clinical anamnesis record owns care
//! plans through an embedded back-reference field, a care plan owns
//! recommendations structurally, follow-ups link to recommendations through
//! an embedded field, and recommendations and follow-ups reference
//! genetic-testing records by id.

use chrono::NaiveDate;
use std::collections::HashMap;

/// Internal identifier of a record in the host store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub i64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Internal identifier of a documented disease in the host store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiseaseId(pub i64);

impl std::fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed enumeration of the record kinds the pipeline understands.
///
/// Resolved once from the host form-type tag at the store boundary and
/// matched exhaustively thereafter; unrecognized tags are preserved for
/// diagnostics but never mapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordKind {
    ClinicalAnamnesis,
    CarePlan,
    Recommendation,
    FollowUp,
    Ecog,
    FamilyMember,
    GeneticTesting,
    GeneticTestingVariant,
    Conference,
    Unknown(String),
}

impl RecordKind {
    pub fn from_form_type(tag: &str) -> Self {
        match tag {
            "mtb.anamnesis" => RecordKind::ClinicalAnamnesis,
            "mtb.care-plan" => RecordKind::CarePlan,
            "mtb.recommendation" => RecordKind::Recommendation,
            "mtb.follow-up" => RecordKind::FollowUp,
            "mtb.ecog" => RecordKind::Ecog,
            "mtb.family-member" => RecordKind::FamilyMember,
            "os.genetic-testing" => RecordKind::GeneticTesting,
            "os.genetic-testing.variant" => RecordKind::GeneticTestingVariant,
            "os.conference" => RecordKind::Conference,
            other => RecordKind::Unknown(other.to_string()),
        }
    }

    pub fn form_type(&self) -> &str {
        match self {
            RecordKind::ClinicalAnamnesis => "mtb.anamnesis",
            RecordKind::CarePlan => "mtb.care-plan",
            RecordKind::Recommendation => "mtb.recommendation",
            RecordKind::FollowUp => "mtb.follow-up",
            RecordKind::Ecog => "mtb.ecog",
            RecordKind::FamilyMember => "mtb.family-member",
            RecordKind::GeneticTesting => "os.genetic-testing",
            RecordKind::GeneticTestingVariant => "os.genetic-testing.variant",
            RecordKind::Conference => "os.conference",
            RecordKind::Unknown(tag) => tag,
        }
    }
}

/// Edit state of a record. Document assembly only consumes completed
/// ("locked") records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditState {
    InProgress,
    Completed,
}

/// A single typed field value, optionally carrying the version of the
/// controlled-vocabulary catalogue the value was picked from.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldValue {
    pub data: FieldData,
    pub catalogue_version: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldData {
    Text(String),
    Date(NaiveDate),
    Number(f64),
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            data: FieldData::Text(value.into()),
            catalogue_version: None,
        }
    }

    pub fn text_versioned(value: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            data: FieldData::Text(value.into()),
            catalogue_version: Some(version.into()),
        }
    }

    pub fn date(value: NaiveDate) -> Self {
        Self {
            data: FieldData::Date(value),
            catalogue_version: None,
        }
    }

    pub fn number(value: f64) -> Self {
        Self {
            data: FieldData::Number(value),
            catalogue_version: None,
        }
    }

    pub fn flag(value: bool) -> Self {
        Self {
            data: FieldData::Flag(value),
            catalogue_version: None,
        }
    }

    /// Non-blank text content; blank or non-text reads as absent.
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            FieldData::Text(value) if !value.trim().is_empty() => Some(value),
            _ => None,
        }
    }

    /// Date content, accepting ISO-formatted text as a lenient fallback.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match &self.data {
            FieldData::Date(value) => Some(*value),
            FieldData::Text(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok(),
            _ => None,
        }
    }

    /// Integer content, accepting whole numbers and digit-only text.
    pub fn as_i64(&self) -> Option<i64> {
        match &self.data {
            FieldData::Number(value) if value.fract() == 0.0 => Some(*value as i64),
            FieldData::Text(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match &self.data {
            FieldData::Number(value) => Some(*value),
            FieldData::Text(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match &self.data {
            FieldData::Flag(value) => Some(*value),
            _ => None,
        }
    }
}

/// Administrative sex as documented by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
    Unknown,
    Other,
}

/// Demographics of the patient owning a record.
///
/// The external id is the host-assigned patient identifier; it is passed
/// through to the document unchanged and keys withdrawals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientSummary {
    pub external_id: String,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub sex: Sex,
}

/// Reference data of a documented disease.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disease {
    pub id: DiseaseId,
    pub icd10_code: Option<String>,
    pub icd10_version: Option<String>,
    pub localization_code: Option<String>,
    pub localization_version: Option<String>,
}

/// One documentation record as handed over by the host store.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub kind: RecordKind,
    pub parent_id: Option<RecordId>,
    pub disease_ids: Vec<DiseaseId>,
    pub edit_state: EditState,
    pub started_on: Option<NaiveDate>,
    pub patient: PatientSummary,
    pub fields: HashMap<String, FieldValue>,
}

impl Record {
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(FieldValue::as_text)
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.field(name).and_then(FieldValue::as_date)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.field(name).and_then(FieldValue::as_i64)
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(FieldValue::as_f64)
    }

    /// Boolean flag; an absent field reads as unset.
    pub fn flag(&self, name: &str) -> bool {
        self.field(name)
            .and_then(FieldValue::as_flag)
            .unwrap_or(false)
    }

    /// A positive record-id reference carried in a field.
    pub fn ref_id(&self, name: &str) -> Option<RecordId> {
        self.int(name).filter(|id| *id > 0).map(RecordId)
    }

    pub fn catalogue_version(&self, name: &str) -> Option<&str> {
        self.field(name)
            .and_then(|value| value.catalogue_version.as_deref())
            .filter(|version| !version.trim().is_empty())
    }

    /// The record's disease association, provided it is unambiguous.
    /// Multi-diagnosis records are unsupported.
    pub fn single_disease(&self) -> Option<DiseaseId> {
        match self.disease_ids.as_slice() {
            [disease] => Some(*disease),
            _ => None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.edit_state == EditState::Completed
    }
}

/// Abstract contract of the host record store.
///
/// All queries are read-only; the pipeline never mutates host state.
pub trait RecordStore {
    fn record(&self, id: RecordId) -> Option<Record>;

    /// All records of the given kind associated with a disease.
    fn records_by_disease_and_kind(&self, disease: DiseaseId, kind: &RecordKind) -> Vec<Record>;

    fn disease(&self, id: DiseaseId) -> Option<Disease>;

    /// Plain-string global setting; absent means "not configured".
    fn global_setting(&self, key: &str) -> Option<String>;
}
