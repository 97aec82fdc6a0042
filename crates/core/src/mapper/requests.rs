//! Genetic counselling, rebiopsy and histology reevaluation requests
//! fanned out from a care plan.

use super::{expect_kind, full_date, MapperContext};
use crate::fields;
use crate::store::{Record, RecordKind, RecordStore};
use mtbfile::{GeneticCounsellingRequest, HistologyReevaluationRequest, RebiopsyRequest};

fn counselling_requested(care_plan: &Record) -> bool {
    care_plan.text(fields::care_plan::GENETIC_COUNSELLING) == Some("1")
        || care_plan.flag(fields::care_plan::GENETIC_COUNSELLING)
}

fn rebiopsy_requested(care_plan: &Record) -> bool {
    care_plan.text(fields::care_plan::WITH_REBIOPSY) == Some("1")
        || care_plan.flag(fields::care_plan::WITH_REBIOPSY)
}

fn issued_on(care_plan: &Record) -> Option<String> {
    let Some(started_on) = care_plan.started_on else {
        tracing::warn!(record = %care_plan.id, "care plan without a start date");
        return None;
    };
    Some(full_date(started_on))
}

pub fn genetic_counselling<S: RecordStore>(
    ctx: &MapperContext<'_, S>,
    care_plan: &Record,
) -> Option<GeneticCounsellingRequest> {
    if !expect_kind(care_plan, &RecordKind::CarePlan) || !counselling_requested(care_plan) {
        return None;
    }
    Some(GeneticCounsellingRequest {
        id: ctx.anonymizer.composite(care_plan.id, "counselling"),
        patient: care_plan.patient.external_id.clone(),
        issued_on: issued_on(care_plan)?,
        reason: care_plan
            .text(fields::care_plan::GENETIC_COUNSELLING_REASON)
            .unwrap_or_default()
            .to_string(),
    })
}

pub fn rebiopsy<S: RecordStore>(
    ctx: &MapperContext<'_, S>,
    care_plan: &Record,
) -> Option<RebiopsyRequest> {
    if !expect_kind(care_plan, &RecordKind::CarePlan) || !rebiopsy_requested(care_plan) {
        return None;
    }
    let Some(specimen) = care_plan.ref_id(fields::care_plan::REBIOPSY_SPECIMEN_REF) else {
        tracing::warn!(record = %care_plan.id, "rebiopsy requested without a specimen reference");
        return None;
    };
    Some(RebiopsyRequest {
        id: ctx.anonymizer.composite(care_plan.id, "rebiopsy"),
        patient: care_plan.patient.external_id.clone(),
        issued_on: issued_on(care_plan)?,
        specimen: ctx.anonymizer.record(specimen),
    })
}

pub fn histology_reevaluation<S: RecordStore>(
    ctx: &MapperContext<'_, S>,
    care_plan: &Record,
) -> Option<HistologyReevaluationRequest> {
    if !expect_kind(care_plan, &RecordKind::CarePlan) {
        return None;
    }
    let specimen = care_plan.ref_id(fields::care_plan::REEVAL_SPECIMEN_REF)?;
    Some(HistologyReevaluationRequest {
        id: ctx.anonymizer.composite(care_plan.id, "histology"),
        patient: care_plan.patient.external_id.clone(),
        issued_on: issued_on(care_plan)?,
        specimen: ctx.anonymizer.record(specimen),
    })
}
