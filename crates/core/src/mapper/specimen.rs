//! Tumor specimens derived from genetic-testing records.

use super::{expect_kind, full_date, MapperContext};
use crate::fields;
use crate::store::{Record, RecordKind, RecordStore};
use mtbfile::{Collection, CollectionMethod, Icd10, Localization, Specimen, SpecimenType};

/// Only genetic-testing records flagged for extended documentation carry
/// enough detail to export.
pub(crate) fn has_extended_documentation(record: &Record) -> bool {
    record.text(fields::genetic_testing::DOCUMENTATION) == Some("ERW")
}

pub fn map<S: RecordStore>(ctx: &MapperContext<'_, S>, record: &Record) -> Option<Specimen> {
    if !expect_kind(record, &RecordKind::GeneticTesting) {
        return None;
    }
    if !has_extended_documentation(record) {
        tracing::warn!(record = %record.id, "genetic testing without extended documentation");
        return None;
    }
    let Some(taken_on) = record.date(fields::genetic_testing::SAMPLE_TAKEN_ON) else {
        tracing::warn!(record = %record.id, "specimen without a collection date");
        return None;
    };

    let icd10 = record
        .single_disease()
        .and_then(|disease| ctx.store.disease(disease))
        .and_then(|disease| {
            Some(Icd10 {
                code: disease.icd10_code?,
                version: disease.icd10_version?,
            })
        });

    Some(Specimen {
        id: ctx.anonymizer.record(record.id),
        patient: record.patient.external_id.clone(),
        icd10,
        specimen_type: specimen_type(record),
        collection: Collection {
            date: full_date(taken_on),
            localization: localization(record),
            method: method(record),
        },
    })
}

/// A liquid biopsy determines the type outright; otherwise the fixation
/// code decides, with unknown as the sentinel.
fn specimen_type(record: &Record) -> SpecimenType {
    if record.text(fields::genetic_testing::COLLECTION_METHOD) == Some("LB") {
        return SpecimenType::LiquidBiopsy;
    }
    match record.text(fields::genetic_testing::FIXATION) {
        Some("2") => SpecimenType::CryoFrozen,
        Some("3") => SpecimenType::Ffpe,
        _ => SpecimenType::Unknown,
    }
}

fn method(record: &Record) -> CollectionMethod {
    match record.text(fields::genetic_testing::COLLECTION_METHOD) {
        Some("B") => CollectionMethod::Biopsy,
        Some("R") => CollectionMethod::Resection,
        Some("LB") => CollectionMethod::LiquidBiopsy,
        Some("Z") => CollectionMethod::Cytology,
        _ => CollectionMethod::Unknown,
    }
}

fn localization(record: &Record) -> Localization {
    match record.text(fields::genetic_testing::SAMPLE_MATERIAL) {
        Some("T") => Localization::PrimaryTumor,
        Some("LK") | Some("M") | Some("ITM") | Some("SM") | Some("KM") => Localization::Metastasis,
        _ => Localization::Unknown,
    }
}
