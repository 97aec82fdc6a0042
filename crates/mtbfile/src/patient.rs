//! Patient, consent, episode and performance-status wire types.

use serde::{Deserialize, Serialize};

/// Patient demographics.
///
/// Birth and death dates carry month precision only (`yyyy-MM`); the
/// pipeline never emits full-precision dates for these fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub gender: Gender,
    pub birth_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "other")]
    Other,
    #[serde(rename = "unknown")]
    Unknown,
}

/// Documented permission for data sharing with the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consent {
    pub id: String,
    pub patient: String,
    pub status: ConsentStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsentStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "rejected")]
    Rejected,
}

/// The MTB episode, opened by the board registration date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub patient: String,
    pub period: PeriodStart,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStart {
    pub start: String,
}

/// A single ECOG performance-status observation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcogObservation {
    pub id: String,
    pub patient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    pub value: EcogValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcogValue {
    pub code: EcogCode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcogCode {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
}

impl EcogValue {
    pub fn new(code: EcogCode) -> Self {
        Self { code }
    }
}
