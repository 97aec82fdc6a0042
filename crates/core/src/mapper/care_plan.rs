//! Care plans.

use super::{expect_kind, full_date, MapperContext};
use crate::fields;
use crate::store::{Record, RecordKind, RecordStore};
use mtbfile::{CarePlan, NoTargetFinding};

/// Pseudonymous ids of the fragments fanned out from the same care plan,
/// already computed by their own mappers. Embedding them here keeps the
/// cross-reference invariant: every id equals the one the referenced
/// fragment carries itself.
#[derive(Default)]
pub struct CarePlanReferences {
    pub recommendations: Vec<String>,
    pub study_inclusions: Vec<String>,
    pub rebiopsy_requests: Vec<String>,
    pub genetic_counselling_request: Option<String>,
}

pub fn map<S: RecordStore>(
    ctx: &MapperContext<'_, S>,
    record: &Record,
    references: CarePlanReferences,
) -> Option<CarePlan> {
    if !expect_kind(record, &RecordKind::CarePlan) {
        return None;
    }
    let Some(disease) = record.single_disease() else {
        tracing::warn!(record = %record.id, "care plan without unambiguous disease");
        return None;
    };
    let Some(started_on) = record.started_on else {
        tracing::warn!(record = %record.id, "care plan without a start date");
        return None;
    };

    let patient = record.patient.external_id.clone();
    let diagnosis = ctx.anonymizer.disease(disease);
    let issued_on = full_date(started_on);

    let no_target_finding = (record.text(fields::care_plan::TARGET_FINDING) == Some("KT"))
        .then(|| NoTargetFinding {
            patient: patient.clone(),
            diagnosis: diagnosis.clone(),
            issued_on: issued_on.clone(),
        });

    Some(CarePlan {
        id: ctx.anonymizer.record(record.id),
        patient,
        diagnosis,
        issued_on,
        description: record
            .text(fields::care_plan::PROTOCOL_EXCERPT)
            .unwrap_or_default()
            .to_string(),
        genetic_counselling_request: references.genetic_counselling_request,
        no_target_finding,
        rebiopsy_requests: references.rebiopsy_requests,
        recommendations: references.recommendations,
        study_inclusion_requests: references.study_inclusions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymize::Anonymizer;
    use crate::store::{FieldValue, RecordId};
    use crate::testsupport::{self, MemoryStore};

    #[test]
    fn embeds_precomputed_fragment_ids() {
        let store = MemoryStore::default();
        let anonymizer = Anonymizer::new(Some("TEST".into()));
        let ctx = MapperContext::new(&store, &anonymizer);

        let mut record = testsupport::care_plan_record(RecordId(2), RecordId(1));
        record.fields.insert(
            fields::care_plan::PROTOCOL_EXCERPT.into(),
            FieldValue::text("board protocol excerpt"),
        );

        let references = CarePlanReferences {
            recommendations: vec!["TESTrec".into()],
            study_inclusions: vec!["TESTstudy".into()],
            rebiopsy_requests: vec!["TESTrebiopsy".into()],
            genetic_counselling_request: Some("TESTcounselling".into()),
        };
        let care_plan = map(&ctx, &record, references).expect("mappable");
        assert_eq!(care_plan.description, "board protocol excerpt");
        assert_eq!(care_plan.recommendations, vec!["TESTrec".to_string()]);
        assert_eq!(
            care_plan.genetic_counselling_request.as_deref(),
            Some("TESTcounselling")
        );
        assert_eq!(care_plan.diagnosis, anonymizer.disease(testsupport::TEST_DISEASE));
        assert_eq!(care_plan.issued_on, "2024-05-02");
        assert!(care_plan.no_target_finding.is_none());
    }

    #[test]
    fn target_finding_marker_produces_sub_fragment() {
        let store = MemoryStore::default();
        let anonymizer = Anonymizer::new(None);
        let ctx = MapperContext::new(&store, &anonymizer);

        let mut record = testsupport::care_plan_record(RecordId(2), RecordId(1));
        record.fields.insert(
            fields::care_plan::TARGET_FINDING.into(),
            FieldValue::text("KT"),
        );

        let care_plan = map(&ctx, &record, CarePlanReferences::default()).expect("mappable");
        let finding = care_plan.no_target_finding.expect("present");
        assert_eq!(finding.diagnosis, care_plan.diagnosis);
        assert_eq!(finding.issued_on, care_plan.issued_on);
    }

    #[test]
    fn missing_start_date_is_unmappable() {
        let store = MemoryStore::default();
        let anonymizer = Anonymizer::new(None);
        let ctx = MapperContext::new(&store, &anonymizer);

        let mut record = testsupport::care_plan_record(RecordId(2), RecordId(1));
        record.started_on = None;
        assert!(map(&ctx, &record, CarePlanReferences::default()).is_none());
    }
}
