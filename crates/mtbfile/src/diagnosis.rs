//! Diagnosis and family-member-diagnosis wire types.

use serde::{Deserialize, Serialize};

/// One diagnosis of the patient, coded against ICD-10 and ICD-O-3 topology.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub id: String,
    pub patient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icd10: Option<Icd10>,
    #[serde(rename = "icdO3T", skip_serializing_if = "Option::is_none")]
    pub icd_o3_t: Option<IcdO3T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who_grade: Option<WhoGrade>,
}

/// ICD-10 coding, versioned by catalogue year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icd10 {
    pub code: String,
    pub version: String,
}

/// ICD-O-3 topology coding, versioned by catalogue year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcdO3T {
    pub code: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoGrade {
    pub code: WhoGradeCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhoGradeCode {
    #[serde(rename = "I")]
    One,
    #[serde(rename = "II")]
    Two,
    #[serde(rename = "III")]
    Three,
    #[serde(rename = "IV")]
    Four,
}

/// A diagnosis documented for a family member of the patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMemberDiagnosis {
    pub id: String,
    pub patient: String,
    pub relationship: Relationship,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub code: RelationshipCode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipCode {
    /// Family member in the direct line.
    #[serde(rename = "FAMMEMB")]
    FamilyMember,
    /// Extended family member.
    #[serde(rename = "EXT")]
    Extended,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_field_is_spelled_icd_o3_t() {
        let diagnosis = Diagnosis {
            id: "x".into(),
            patient: "p".into(),
            recorded_on: None,
            icd10: None,
            icd_o3_t: Some(IcdO3T {
                code: "C34.1".into(),
                version: "2024".into(),
            }),
            who_grade: None,
        };
        let json = serde_json::to_string(&diagnosis).expect("serializable");
        assert!(json.contains("\"icdO3T\":{\"code\":\"C34.1\",\"version\":\"2024\"}"));
    }

    #[test]
    fn who_grade_uses_roman_numerals() {
        assert_eq!(
            serde_json::to_string(&WhoGradeCode::Four).expect("serializable"),
            "\"IV\""
        );
    }

    #[test]
    fn relationship_codes_match_hl7_spellings() {
        assert_eq!(
            serde_json::to_string(&RelationshipCode::FamilyMember).expect("serializable"),
            "\"FAMMEMB\""
        );
        assert_eq!(
            serde_json::to_string(&RelationshipCode::Extended).expect("serializable"),
            "\"EXT\""
        );
    }
}
