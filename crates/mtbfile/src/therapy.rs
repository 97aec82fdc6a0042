//! Claim, therapy-history and tumor-response wire types.

use crate::Medication;
use serde::{Deserialize, Serialize};

/// A cost-coverage claim for a recommended therapy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: String,
    pub patient: String,
    pub therapy: String,
    pub issued_on: String,
}

/// The payer's answer to a claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: String,
    pub patient: String,
    pub claim: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClaimStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ClaimResponseReason>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    #[serde(rename = "accepted")]
    Accepted,
    #[serde(rename = "rejected")]
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimResponseReason {
    #[serde(rename = "insufficient-evidence")]
    InsufficientEvidence,
    #[serde(rename = "standard-therapy-not-exhausted")]
    StandardTherapyNotExhausted,
    #[serde(rename = "other")]
    Other,
}

/// The documented course of one molecular therapy, as a list of follow-up
/// history entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MolecularTherapy {
    pub history: Vec<TherapyHistory>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapyHistory {
    pub id: String,
    pub patient: String,
    pub status: TherapyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<TherapyPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<Dosage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_stopped: Option<StopReasonCoding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medication: Vec<Medication>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TherapyStatus {
    #[serde(rename = "not-done")]
    NotDone,
    #[serde(rename = "on-going")]
    OnGoing,
    #[serde(rename = "stopped")]
    Stopped,
    #[serde(rename = "completed")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TherapyPeriod {
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Fraction of the recommended dosage actually administered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dosage {
    #[serde(rename = "<50%")]
    Under50Percent,
    #[serde(rename = ">=50%")]
    AtLeast50Percent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopReasonCoding {
    pub code: StopReason,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    #[serde(rename = "patient-wish")]
    PatientWish,
    #[serde(rename = "progression")]
    Progression,
    #[serde(rename = "toxicity")]
    Toxicity,
    #[serde(rename = "deterioration")]
    Deterioration,
    #[serde(rename = "medical-reason")]
    MedicalReason,
    #[serde(rename = "other")]
    Other,
    #[serde(rename = "unknown")]
    Unknown,
}

impl StopReasonCoding {
    pub fn new(code: StopReason) -> Self {
        Self { code }
    }
}

/// A RECIST tumor-response observation for one therapy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: String,
    pub patient: String,
    pub therapy: String,
    pub effective_date: String,
    pub value: ResponseValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseValue {
    pub code: Recist,
}

impl ResponseValue {
    pub fn new(code: Recist) -> Self {
        Self { code }
    }
}

/// RECIST best-response classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recist {
    #[serde(rename = "CR")]
    CompleteResponse,
    #[serde(rename = "PR")]
    PartialResponse,
    #[serde(rename = "MR")]
    MixedResponse,
    #[serde(rename = "SD")]
    StableDisease,
    #[serde(rename = "PD")]
    ProgressiveDisease,
    #[serde(rename = "NA")]
    NotAssessable,
}
