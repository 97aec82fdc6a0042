//! Wire model for the MTB file interoperability document.
//!
//! This crate defines the exact JSON shape expected by the remote MTB
//! registry. The registry is schema-strict: field names and enumerated value
//! spellings must match byte for byte, so every type here is a serde wire
//! struct with explicit renames and no domain logic.
//!
//! The document is a value object: it is assembled fresh per export, sent,
//! and discarded. Nothing in this crate is persisted or mutated after
//! assembly.

mod care_plan;
mod diagnosis;
mod ngs_report;
mod patient;
mod specimen;
mod therapy;

pub use care_plan::{
    Addendum, CarePlan, GeneticCounsellingRequest, Grading, GradingCode,
    HistologyReevaluationRequest, LevelOfEvidence, Medication, MedicationSystem, NoTargetFinding,
    Priority, RebiopsyRequest, Recommendation, StudyInclusionRequest,
};
pub use diagnosis::{
    Diagnosis, FamilyMemberDiagnosis, Icd10, IcdO3T, Relationship, RelationshipCode, WhoGrade,
    WhoGradeCode,
};
pub use ngs_report::{AminoAcidChange, DnaChange, Interpretation, NgsReport, SimpleVariant, StartEnd};
pub use patient::{
    Consent, ConsentStatus, EcogCode, EcogObservation, EcogValue, Episode, Gender, Patient,
    PeriodStart,
};
pub use specimen::{Collection, CollectionMethod, Localization, Specimen, SpecimenType};
pub use therapy::{
    Claim, ClaimResponse, ClaimResponseReason, ClaimStatus, Dosage, MolecularTherapy, Recist,
    Response, ResponseValue, StopReason, StopReasonCoding, TherapyHistory, TherapyPeriod,
    TherapyStatus,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum MtbFileError {
    #[error("failed to serialize MTB file: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The aggregate interoperability document for one clinical anamnesis record.
///
/// Exactly one patient, consent, episode and primary diagnosis; all other
/// collections are order-irrelevant and may be empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MtbFile {
    pub patient: Patient,
    pub consent: Consent,
    pub episode: Episode,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnoses: Vec<Diagnosis>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub family_member_diagnoses: Vec<FamilyMemberDiagnosis>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ecog_status: Vec<EcogObservation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub care_plans: Vec<CarePlan>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<Recommendation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genetic_counselling_requests: Vec<GeneticCounsellingRequest>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rebiopsy_requests: Vec<RebiopsyRequest>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub histology_reevaluation_requests: Vec<HistologyReevaluationRequest>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub study_inclusion_requests: Vec<StudyInclusionRequest>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specimens: Vec<Specimen>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ngs_reports: Vec<NgsReport>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub claims: Vec<Claim>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub claim_responses: Vec<ClaimResponse>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub molecular_therapies: Vec<MolecularTherapy>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<Response>,
}

impl MtbFile {
    /// Render the document as the wire JSON accepted by the registry.
    pub fn to_json(&self) -> Result<String, MtbFileError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_file() -> MtbFile {
        MtbFile {
            patient: Patient {
                id: "2000123456".into(),
                gender: Gender::Unknown,
                birth_date: "2000-01".into(),
                date_of_death: None,
            },
            consent: Consent {
                id: "TESTabc".into(),
                patient: "2000123456".into(),
                status: ConsentStatus::Active,
            },
            episode: Episode {
                id: "TESTdef".into(),
                patient: "2000123456".into(),
                period: PeriodStart {
                    start: "2024-01-01".into(),
                },
            },
            diagnoses: vec![],
            family_member_diagnoses: vec![],
            ecog_status: vec![],
            care_plans: vec![],
            recommendations: vec![],
            genetic_counselling_requests: vec![],
            rebiopsy_requests: vec![],
            histology_reevaluation_requests: vec![],
            study_inclusion_requests: vec![],
            specimens: vec![],
            ngs_reports: vec![],
            claims: vec![],
            claim_responses: vec![],
            molecular_therapies: vec![],
            responses: vec![],
        }
    }

    #[test]
    fn renders_camel_case_field_names() {
        let json = minimal_file().to_json().expect("serializable");
        assert!(json.contains("\"birthDate\":\"2000-01\""));
        assert!(json.contains("\"status\":\"active\""));
        assert!(json.contains("\"period\":{\"start\":\"2024-01-01\"}"));
    }

    #[test]
    fn omits_empty_collections() {
        let json = minimal_file().to_json().expect("serializable");
        assert!(!json.contains("carePlans"));
        assert!(!json.contains("ngsReports"));
        assert!(!json.contains("molecularTherapies"));
    }

    #[test]
    fn round_trips_through_json() {
        let file = minimal_file();
        let json = file.to_json().expect("serializable");
        let reparsed: MtbFile = serde_json::from_str(&json).expect("parseable");
        assert_eq!(file, reparsed);
    }
}
