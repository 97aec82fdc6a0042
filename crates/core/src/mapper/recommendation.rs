//! Therapy recommendations.

use super::{expect_kind, full_date, medication, MapperContext};
use crate::fields;
use crate::store::{Record, RecordKind, RecordStore};
use mtbfile::{Addendum, Grading, GradingCode, LevelOfEvidence, Priority, Recommendation};

/// The date a recommendation was issued: its own date field where present,
/// otherwise the date of the referenced board conference record.
pub fn issued_on<S: RecordStore>(ctx: &MapperContext<'_, S>, record: &Record) -> Option<String> {
    if let Some(date) = record.date(fields::recommendation::ISSUED_ON) {
        return Some(full_date(date));
    }
    let conference_id = record.ref_id(fields::recommendation::CONFERENCE_REF)?;
    let conference = ctx.store.record(conference_id)?;
    if conference.kind != RecordKind::Conference {
        tracing::warn!(
            record = %record.id,
            referenced = %conference_id,
            "conference reference points at a different record kind",
        );
        return None;
    }
    conference.date(fields::conference::DATE).map(full_date)
}

pub fn map<S: RecordStore>(ctx: &MapperContext<'_, S>, record: &Record) -> Option<Recommendation> {
    if !expect_kind(record, &RecordKind::Recommendation) {
        return None;
    }
    let Some(disease) = record.single_disease() else {
        tracing::warn!(record = %record.id, "recommendation without unambiguous disease");
        return None;
    };
    let Some(issued_on) = issued_on(ctx, record) else {
        tracing::warn!(record = %record.id, "recommendation without an issue date");
        return None;
    };

    Some(Recommendation {
        id: ctx.anonymizer.record(record.id),
        patient: record.patient.external_id.clone(),
        diagnosis: ctx.anonymizer.disease(disease),
        issued_on,
        priority: priority(record),
        level_of_evidence: level_of_evidence(record),
        ngs_report: record
            .ref_id(fields::recommendation::GENETIC_TESTING_REF)
            .map(|id| ctx.anonymizer.record(id)),
        medication: medication::parse(record.text(fields::recommendation::MEDICATIONS_JSON)),
    })
}

fn priority(record: &Record) -> Priority {
    match record.text(fields::recommendation::PRIORITY) {
        Some("1") => Priority::One,
        Some("2") => Priority::Two,
        Some("3") => Priority::Three,
        _ => Priority::Four,
    }
}

fn level_of_evidence(record: &Record) -> Option<LevelOfEvidence> {
    let code = match record.int(fields::recommendation::EVIDENCE_LEVEL)? {
        1 => GradingCode::M1A,
        2 => GradingCode::M1B,
        3 => GradingCode::M1C,
        4 => GradingCode::M2A,
        5 => GradingCode::M2B,
        6 => GradingCode::M2C,
        7 => GradingCode::M3,
        8 => GradingCode::M4,
        other => {
            tracing::warn!(record = %record.id, value = other, "unmappable evidence grade");
            return None;
        }
    };
    Some(LevelOfEvidence {
        grading: Grading { code },
        addendums: addendum(record).into_iter().collect(),
    })
}

fn addendum(record: &Record) -> Option<Addendum> {
    let code = match record.text(fields::recommendation::EVIDENCE_ADDENDUM)? {
        "s" => "is",
        "v" => "iv",
        "z" => "Z",
        "r" => "R",
        _ => return None,
    };
    Some(Addendum::new(code))
}
