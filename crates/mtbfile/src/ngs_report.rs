//! NGS report and variant wire types.

use serde::{Deserialize, Serialize};

/// Findings of one next-generation-sequencing run on a specimen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NgsReport {
    pub id: String,
    pub patient: String,
    pub specimen: String,
    pub issue_date: String,
    pub sequencing_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub simple_variants: Vec<SimpleVariant>,
}

/// A single small variant called by the sequencing run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleVariant {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chromosome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_end: Option<StartEnd>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_allele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_allele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dna_change: Option<DnaChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amino_acid_change: Option<AminoAcidChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_depth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allelic_frequency: Option<f64>,
    #[serde(rename = "cosmicId", skip_serializing_if = "Option::is_none")]
    pub cosmic_id: Option<String>,
    #[serde(rename = "dbSNPId", skip_serializing_if = "Option::is_none")]
    pub dbsnp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<Interpretation>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StartEnd {
    pub start: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
}

/// HGVS cDNA-level change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaChange {
    pub code: String,
}

/// HGVS protein-level change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AminoAcidChange {
    pub code: String,
}

/// Pathogenicity classification of the variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub code: String,
}
