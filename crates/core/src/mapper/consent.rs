//! Data-sharing consent.

use super::{expect_kind, MapperContext};
use crate::fields;
use crate::store::{Record, RecordKind, RecordStore};
use mtbfile::{Consent, ConsentStatus};

/// The documented consent status of a clinical anamnesis record.
///
/// An absent field cannot be categorized and reads as no consent
/// documentation at all; any documented value other than `"active"` counts
/// as rejected.
pub fn status(anamnesis: &Record) -> Option<ConsentStatus> {
    match anamnesis.text(fields::anamnesis::CONSENT_STATUS)? {
        "active" => Some(ConsentStatus::Active),
        _ => Some(ConsentStatus::Rejected),
    }
}

pub fn map<S: RecordStore>(ctx: &MapperContext<'_, S>, anamnesis: &Record) -> Option<Consent> {
    if !expect_kind(anamnesis, &RecordKind::ClinicalAnamnesis) {
        return None;
    }
    let Some(status) = status(anamnesis) else {
        tracing::warn!(record = %anamnesis.id, "no consent status documented");
        return None;
    };

    Some(Consent {
        id: ctx.anonymizer.composite(anamnesis.id, "consent"),
        patient: anamnesis.patient.external_id.clone(),
        status,
    })
}
