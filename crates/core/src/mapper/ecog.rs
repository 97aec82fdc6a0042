//! ECOG performance-status observations.

use super::{expect_kind, full_date, MapperContext};
use crate::fields;
use crate::store::{Record, RecordKind, RecordStore};
use mtbfile::{EcogCode, EcogObservation, EcogValue};

/// Map one performance-status child record. Values outside the 0-4 scale
/// skip the whole entry.
pub fn map<S: RecordStore>(ctx: &MapperContext<'_, S>, record: &Record) -> Option<EcogObservation> {
    if !expect_kind(record, &RecordKind::Ecog) {
        return None;
    }
    let code = match record.int(fields::ecog::VALUE) {
        Some(0) => EcogCode::Zero,
        Some(1) => EcogCode::One,
        Some(2) => EcogCode::Two,
        Some(3) => EcogCode::Three,
        Some(4) => EcogCode::Four,
        other => {
            tracing::warn!(record = %record.id, value = ?other, "unmappable ECOG value");
            return None;
        }
    };

    Some(EcogObservation {
        id: ctx.anonymizer.record(record.id),
        patient: record.patient.external_id.clone(),
        effective_date: record.date(fields::ecog::DATE).map(full_date),
        value: EcogValue::new(code),
    })
}
