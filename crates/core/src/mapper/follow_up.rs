//! Claims, therapy histories and RECIST responses from follow-up records.

use super::{expect_kind, full_date, medication, MapperContext};
use crate::fields;
use crate::store::{Record, RecordKind, RecordStore};
use mtbfile::{
    Claim, ClaimResponse, ClaimResponseReason, ClaimStatus, Dosage, Recist, Response,
    ResponseValue, StopReason, StopReasonCoding, TherapyHistory, TherapyPeriod, TherapyStatus,
};

fn therapy_link<S: RecordStore>(
    ctx: &MapperContext<'_, S>,
    follow_up: &Record,
) -> Option<String> {
    let recommendation = follow_up.ref_id(fields::follow_up::RECOMMENDATION_LINK)?;
    Some(ctx.anonymizer.record(recommendation))
}

/// A cost-coverage claim, present when the follow-up documents both a claim
/// issue date and a recommendation link.
pub fn map_claim<S: RecordStore>(ctx: &MapperContext<'_, S>, follow_up: &Record) -> Option<Claim> {
    if !expect_kind(follow_up, &RecordKind::FollowUp) {
        return None;
    }
    let issued_on = follow_up.date(fields::follow_up::CLAIM_ISSUED_ON)?;
    let Some(therapy) = therapy_link(ctx, follow_up) else {
        tracing::warn!(record = %follow_up.id, "claim without a recommendation link");
        return None;
    };

    Some(Claim {
        id: ctx.anonymizer.record(follow_up.id),
        patient: follow_up.patient.external_id.clone(),
        therapy,
        issued_on: full_date(issued_on),
    })
}

/// The payer's answer. References the claim through the same anonymized
/// follow-up id the claim itself carries.
pub fn map_claim_response<S: RecordStore>(
    ctx: &MapperContext<'_, S>,
    follow_up: &Record,
) -> Option<ClaimResponse> {
    if !expect_kind(follow_up, &RecordKind::FollowUp) {
        return None;
    }
    let claim = ctx.anonymizer.record(follow_up.id);

    Some(ClaimResponse {
        id: claim.clone(),
        patient: follow_up.patient.external_id.clone(),
        claim,
        issued_on: follow_up
            .date(fields::follow_up::CLAIM_RESPONSE_DATE)
            .map(full_date),
        status: claim_status(follow_up),
        reason: claim_reason(follow_up),
    })
}

fn claim_status(follow_up: &Record) -> Option<ClaimStatus> {
    match follow_up.text(fields::follow_up::CLAIM_STATUS)? {
        "accepted" => Some(ClaimStatus::Accepted),
        "rejected" => Some(ClaimStatus::Rejected),
        _ => None,
    }
}

fn claim_reason(follow_up: &Record) -> Option<ClaimResponseReason> {
    match follow_up.text(fields::follow_up::CLAIM_REASON)? {
        "e" => Some(ClaimResponseReason::InsufficientEvidence),
        "s" => Some(ClaimResponseReason::StandardTherapyNotExhausted),
        "w" => Some(ClaimResponseReason::Other),
        _ => None,
    }
}

/// One therapy-history entry. The medication list is inherited from the
/// linked recommendation, since follow-ups never re-document it.
pub fn map_history<S: RecordStore>(
    ctx: &MapperContext<'_, S>,
    follow_up: &Record,
    recommendation: &Record,
) -> Option<TherapyHistory> {
    if !expect_kind(follow_up, &RecordKind::FollowUp) {
        return None;
    }
    let Some(status) = therapy_status(follow_up) else {
        tracing::warn!(record = %follow_up.id, "follow-up without a mappable therapy status");
        return None;
    };

    let period = follow_up
        .date(fields::follow_up::PERIOD_START)
        .map(|start| TherapyPeriod {
            start: full_date(start),
            end: follow_up.date(fields::follow_up::PERIOD_END).map(full_date),
        });

    Some(TherapyHistory {
        id: ctx.anonymizer.record(follow_up.id),
        patient: follow_up.patient.external_id.clone(),
        status,
        recorded_on: follow_up.date(fields::follow_up::DATE).map(full_date),
        based_on: therapy_link(ctx, follow_up),
        period,
        dosage: dosage(follow_up),
        reason_stopped: stop_reason(follow_up),
        medication: medication::parse(
            recommendation.text(fields::recommendation::MEDICATIONS_JSON),
        ),
    })
}

fn therapy_status(follow_up: &Record) -> Option<TherapyStatus> {
    match follow_up.text(fields::follow_up::THERAPY_STATUS)? {
        "not-done" => Some(TherapyStatus::NotDone),
        "on-going" => Some(TherapyStatus::OnGoing),
        "stopped" => Some(TherapyStatus::Stopped),
        "completed" => Some(TherapyStatus::Completed),
        _ => None,
    }
}

fn dosage(follow_up: &Record) -> Option<Dosage> {
    match follow_up.text(fields::follow_up::DOSAGE)? {
        "k" => Some(Dosage::Under50Percent),
        "g" => Some(Dosage::AtLeast50Percent),
        _ => None,
    }
}

fn stop_reason(follow_up: &Record) -> Option<StopReasonCoding> {
    let code = match follow_up.text(fields::follow_up::REASON_STOPPED)? {
        "pw" => StopReason::PatientWish,
        "p" => StopReason::Progression,
        "t" => StopReason::Toxicity,
        "d" => StopReason::Deterioration,
        "mr" => StopReason::MedicalReason,
        "bsc" => StopReason::Other,
        _ => StopReason::Unknown,
    };
    Some(StopReasonCoding::new(code))
}

/// The documented best response, classified per RECIST. Unassessable host
/// codes drop the whole fragment rather than emit a placeholder.
pub fn map_response<S: RecordStore>(
    ctx: &MapperContext<'_, S>,
    follow_up: &Record,
) -> Option<Response> {
    if !expect_kind(follow_up, &RecordKind::FollowUp) {
        return None;
    }
    let effective_date = follow_up.date(fields::follow_up::DATE)?;
    let therapy = therapy_link(ctx, follow_up)?;
    let recist = recist(follow_up)?;

    Some(Response {
        id: ctx.anonymizer.record(follow_up.id),
        patient: follow_up.patient.external_id.clone(),
        therapy,
        effective_date: full_date(effective_date),
        value: ResponseValue::new(recist),
    })
}

fn recist(follow_up: &Record) -> Option<Recist> {
    match follow_up.text(fields::follow_up::BEST_RESPONSE)? {
        "c" => Some(Recist::CompleteResponse),
        "t" => Some(Recist::PartialResponse),
        "m" => Some(Recist::MixedResponse),
        "s" => Some(Recist::StableDisease),
        "p" => Some(Recist::ProgressiveDisease),
        "n" => Some(Recist::NotAssessable),
        _ => None,
    }
}
