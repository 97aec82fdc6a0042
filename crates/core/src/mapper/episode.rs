//! MTB episode.

use super::{expect_kind, full_date, MapperContext};
use crate::fields;
use crate::store::{Record, RecordKind, RecordStore};
use mtbfile::{Episode, PeriodStart};

/// The episode opens with the board registration date; without one there is
/// no episode to report.
pub fn map<S: RecordStore>(ctx: &MapperContext<'_, S>, anamnesis: &Record) -> Option<Episode> {
    if !expect_kind(anamnesis, &RecordKind::ClinicalAnamnesis) {
        return None;
    }
    let Some(registered_on) = anamnesis.date(fields::anamnesis::MTB_REGISTRATION_DATE) else {
        tracing::warn!(record = %anamnesis.id, "no board registration date documented");
        return None;
    };

    Some(Episode {
        id: ctx.anonymizer.composite(anamnesis.id, "episode"),
        patient: anamnesis.patient.external_id.clone(),
        period: PeriodStart {
            start: full_date(registered_on),
        },
    })
}
