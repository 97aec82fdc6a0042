//! Study-inclusion fan-out from a recommendation's embedded trial list.

use super::{expect_kind, recommendation, MapperContext};
use crate::fields;
use crate::store::{Record, RecordKind, RecordStore};
use mtbfile::StudyInclusionRequest;
use serde::Deserialize;

#[derive(Deserialize)]
struct RawStudy {
    nct: String,
}

/// One request per referenced trial whose identifier starts with `NCT`
/// (case-insensitive). The synthetic id hashes the recommendation id with
/// the trial number, so repeated exports stay stable. A malformed list
/// yields no requests.
pub fn map_all<S: RecordStore>(
    ctx: &MapperContext<'_, S>,
    record: &Record,
) -> Vec<StudyInclusionRequest> {
    if !expect_kind(record, &RecordKind::Recommendation) {
        return Vec::new();
    }
    let Some(raw) = record.text(fields::recommendation::STUDIES_JSON) else {
        return Vec::new();
    };
    let studies: Vec<RawStudy> = match serde_json::from_str(raw) {
        Ok(studies) => studies,
        Err(error) => {
            tracing::warn!(record = %record.id, %error, "malformed embedded study list");
            return Vec::new();
        }
    };
    let Some(disease) = record.single_disease() else {
        tracing::warn!(record = %record.id, "recommendation without unambiguous disease");
        return Vec::new();
    };
    let Some(issued_on) = recommendation::issued_on(ctx, record) else {
        tracing::warn!(record = %record.id, "recommendation without an issue date");
        return Vec::new();
    };

    studies
        .into_iter()
        .filter(|study| study.nct.to_ascii_uppercase().starts_with("NCT"))
        .map(|study| StudyInclusionRequest {
            id: ctx.anonymizer.composite(record.id, &study.nct),
            patient: record.patient.external_id.clone(),
            reason: ctx.anonymizer.disease(disease),
            issued_on: issued_on.clone(),
            nct_number: study.nct,
        })
        .collect()
}
