//! Care plan, recommendation and request wire types.
//!
//! A care plan carries id-references to its sub-entities rather than the
//! entities themselves; the referenced fragments live in their own top-level
//! document collections. All references are pseudonymous ids, so the
//! assembled graph resolves without the original internal ids.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlan {
    pub id: String,
    pub patient: String,
    pub diagnosis: String,
    pub issued_on: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genetic_counselling_request: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_target_finding: Option<NoTargetFinding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rebiopsy_requests: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub study_inclusion_requests: Vec<String>,
}

/// Documented absence of a molecular target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoTargetFinding {
    pub patient: String,
    pub diagnosis: String,
    pub issued_on: String,
}

/// A single therapy recommendation issued by the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub patient: String,
    pub diagnosis: String,
    pub issued_on: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_of_evidence: Option<LevelOfEvidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngs_report: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medication: Vec<Medication>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelOfEvidence {
    pub grading: Grading,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addendums: Vec<Addendum>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grading {
    pub code: GradingCode,
}

/// Evidence grading per the molecular evidence-level scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradingCode {
    #[serde(rename = "m1A")]
    M1A,
    #[serde(rename = "m1B")]
    M1B,
    #[serde(rename = "m1C")]
    M1C,
    #[serde(rename = "m2A")]
    M2A,
    #[serde(rename = "m2B")]
    M2B,
    #[serde(rename = "m2C")]
    M2C,
    #[serde(rename = "m3")]
    M3,
    #[serde(rename = "m4")]
    M4,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addendum {
    pub code: String,
}

impl Addendum {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// A medication entry, coded against ATC where a catalogue version exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    pub system: MedicationSystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedicationSystem {
    #[serde(rename = "ATC")]
    Atc,
    #[serde(rename = "Unregistered")]
    Unregistered,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticCounsellingRequest {
    pub id: String,
    pub patient: String,
    pub issued_on: String,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebiopsyRequest {
    pub id: String,
    pub patient: String,
    pub issued_on: String,
    pub specimen: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistologyReevaluationRequest {
    pub id: String,
    pub patient: String,
    pub issued_on: String,
    pub specimen: String,
}

/// Request to include the patient in a registered trial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyInclusionRequest {
    pub id: String,
    pub patient: String,
    pub reason: String,
    pub issued_on: String,
    pub nct_number: String,
}
