//! Specimen wire types.

use crate::Icd10;
use serde::{Deserialize, Serialize};

/// A tumor specimen genetic testing was performed on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specimen {
    pub id: String,
    pub patient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icd10: Option<Icd10>,
    #[serde(rename = "type")]
    pub specimen_type: SpecimenType,
    pub collection: Collection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecimenType {
    #[serde(rename = "fresh-tissue")]
    FreshTissue,
    #[serde(rename = "cryo-frozen")]
    CryoFrozen,
    #[serde(rename = "FFPE")]
    Ffpe,
    #[serde(rename = "liquid-biopsy")]
    LiquidBiopsy,
    #[serde(rename = "unknown")]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub date: String,
    pub localization: Localization,
    pub method: CollectionMethod,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Localization {
    #[serde(rename = "primary-tumor")]
    PrimaryTumor,
    #[serde(rename = "metastasis")]
    Metastasis,
    #[serde(rename = "unknown")]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionMethod {
    #[serde(rename = "biopsy")]
    Biopsy,
    #[serde(rename = "resection")]
    Resection,
    #[serde(rename = "liquid-biopsy")]
    LiquidBiopsy,
    #[serde(rename = "cytology")]
    Cytology,
    #[serde(rename = "unknown")]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_uses_reserved_word_spelling() {
        let specimen = Specimen {
            id: "x".into(),
            patient: "p".into(),
            icd10: None,
            specimen_type: SpecimenType::Ffpe,
            collection: Collection {
                date: "2024-02-01".into(),
                localization: Localization::PrimaryTumor,
                method: CollectionMethod::Biopsy,
            },
        };
        let json = serde_json::to_string(&specimen).expect("serializable");
        assert!(json.contains("\"type\":\"FFPE\""));
        assert!(json.contains("\"localization\":\"primary-tumor\""));
        assert!(json.contains("\"method\":\"biopsy\""));
    }
}
