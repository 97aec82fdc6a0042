//! Document assembly.
//!
//! Builds one complete interoperability document for a clinical anamnesis
//! record. The four leading sections are mandatory and abort the export
//! when absent; every other collection is appended independently, with
//! individual mapping failures absorbed as absent fragments.

use crate::anonymize::Anonymizer;
use crate::error::{ExportError, Section};
use crate::mapper::{
    self, care_plan::CarePlanReferences, MapperContext,
};
use crate::resolve::GraphResolver;
use crate::store::{Record, RecordId, RecordKind, RecordStore};
use mtbfile::{MolecularTherapy, MtbFile};

pub struct DocumentAssembler<'a, S: RecordStore> {
    store: &'a S,
    anonymizer: &'a Anonymizer,
}

impl<'a, S: RecordStore> DocumentAssembler<'a, S> {
    pub fn new(store: &'a S, anonymizer: &'a Anonymizer) -> Self {
        Self { store, anonymizer }
    }

    /// Assemble the document for one clinical anamnesis record.
    ///
    /// Only completed child records contribute. Cross-references between
    /// fragments are reconstructed by re-running the anonymizer, so every
    /// embedded id equals the id the referenced fragment carries itself.
    pub fn assemble(&self, anamnesis: &Record) -> Result<MtbFile, ExportError> {
        let ctx = MapperContext::new(self.store, self.anonymizer);
        let resolver = GraphResolver::new(self.store);

        let patient = mapper::patient::map(anamnesis)
            .ok_or_else(|| self.missing(anamnesis, Section::Patient))?;
        let consent = mapper::consent::map(&ctx, anamnesis)
            .ok_or_else(|| self.missing(anamnesis, Section::Consent))?;
        let episode = mapper::episode::map(&ctx, anamnesis)
            .ok_or_else(|| self.missing(anamnesis, Section::Episode))?;

        let diagnoses: Vec<_> = anamnesis
            .single_disease()
            .and_then(|id| self.store.disease(id))
            .map(|disease| mapper::diagnosis::map(&ctx, anamnesis, &disease))
            .into_iter()
            .collect();
        if diagnoses.is_empty() {
            return Err(self.missing(anamnesis, Section::Diagnosis));
        }

        let mut file = MtbFile {
            patient,
            consent,
            episode,
            diagnoses,
            family_member_diagnoses: Vec::new(),
            ecog_status: Vec::new(),
            care_plans: Vec::new(),
            recommendations: Vec::new(),
            genetic_counselling_requests: Vec::new(),
            rebiopsy_requests: Vec::new(),
            histology_reevaluation_requests: Vec::new(),
            study_inclusion_requests: Vec::new(),
            specimens: Vec::new(),
            ngs_reports: Vec::new(),
            claims: Vec::new(),
            claim_responses: Vec::new(),
            molecular_therapies: Vec::new(),
            responses: Vec::new(),
        };

        let mut seen_reports: Vec<RecordId> = Vec::new();
        for care_plan in resolver.care_plans_for_anamnesis(anamnesis, true) {
            self.append_care_plan(&ctx, &resolver, &care_plan, &mut file);
            self.append_genetic_testing(&ctx, &resolver, &care_plan, &mut seen_reports, &mut file);
        }

        for ecog in resolver.ecog_entries_for_anamnesis(anamnesis, true) {
            file.ecog_status.extend(mapper::ecog::map(&ctx, &ecog));
        }
        for member in resolver.family_members_for_anamnesis(anamnesis, true) {
            file.family_member_diagnoses
                .extend(mapper::family_member::map(&ctx, &member));
        }

        Ok(file)
    }

    fn missing(&self, anamnesis: &Record, section: Section) -> ExportError {
        tracing::error!(record = %anamnesis.id, %section, "missing required document section");
        ExportError::MissingSection(section)
    }

    fn append_care_plan(
        &self,
        ctx: &MapperContext<'_, S>,
        resolver: &GraphResolver<'_, S>,
        care_plan: &Record,
        file: &mut MtbFile,
    ) {
        let mut references = CarePlanReferences::default();

        for recommendation in resolver.recommendations_for_care_plan(care_plan, true) {
            if let Some(mapped) = mapper::recommendation::map(ctx, &recommendation) {
                references.recommendations.push(mapped.id.clone());
                file.recommendations.push(mapped);
            }
            for request in mapper::study_inclusion::map_all(ctx, &recommendation) {
                references.study_inclusions.push(request.id.clone());
                file.study_inclusion_requests.push(request);
            }
            self.append_follow_ups(ctx, resolver, &recommendation, file);
        }

        if let Some(request) = mapper::requests::genetic_counselling(ctx, care_plan) {
            references.genetic_counselling_request = Some(request.id.clone());
            file.genetic_counselling_requests.push(request);
        }
        if let Some(request) = mapper::requests::rebiopsy(ctx, care_plan) {
            references.rebiopsy_requests.push(request.id.clone());
            file.rebiopsy_requests.push(request);
        }
        if let Some(request) = mapper::requests::histology_reevaluation(ctx, care_plan) {
            file.histology_reevaluation_requests.push(request);
        }

        file.care_plans
            .extend(mapper::care_plan::map(ctx, care_plan, references));
    }

    fn append_follow_ups(
        &self,
        ctx: &MapperContext<'_, S>,
        resolver: &GraphResolver<'_, S>,
        recommendation: &Record,
        file: &mut MtbFile,
    ) {
        let mut history = Vec::new();
        for follow_up in resolver.follow_ups_for_recommendation(recommendation, true) {
            if let Some(claim) = mapper::follow_up::map_claim(ctx, &follow_up) {
                file.claims.push(claim);
                file.claim_responses
                    .extend(mapper::follow_up::map_claim_response(ctx, &follow_up));
            }
            history.extend(mapper::follow_up::map_history(ctx, &follow_up, recommendation));
            file.responses
                .extend(mapper::follow_up::map_response(ctx, &follow_up));
        }
        if !history.is_empty() {
            file.molecular_therapies.push(MolecularTherapy { history });
        }
    }

    fn append_genetic_testing(
        &self,
        ctx: &MapperContext<'_, S>,
        resolver: &GraphResolver<'_, S>,
        care_plan: &Record,
        seen: &mut Vec<RecordId>,
        file: &mut MtbFile,
    ) {
        for report in resolver.genetic_testing_for_care_plan(care_plan, true) {
            if report.kind != RecordKind::GeneticTesting || seen.contains(&report.id) {
                continue;
            }
            seen.push(report.id);
            file.specimens.extend(mapper::specimen::map(ctx, &report));
            let variants = resolver.variants_for_genetic_testing(&report);
            file.ngs_reports
                .extend(mapper::ngs_report::map(ctx, &report, &variants));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;
    use crate::store::FieldValue;
    use crate::testsupport::{self, MemoryStore};

    fn populated_store() -> MemoryStore {
        let mut store = MemoryStore::default();
        store.insert_disease(testsupport::test_disease());

        let mut anamnesis = testsupport::anamnesis_record(RecordId(1));
        anamnesis.fields.insert(
            fields::anamnesis::MTB_REGISTRATION_DATE.into(),
            FieldValue::text("2024-04-17"),
        );
        store.insert(anamnesis);

        store.insert(testsupport::care_plan_record(RecordId(2), RecordId(1)));

        let mut recommendation = testsupport::recommendation_record(RecordId(11), RecordId(2));
        recommendation.fields.insert(
            fields::recommendation::ISSUED_ON.into(),
            FieldValue::text("2024-05-14"),
        );
        recommendation.fields.insert(
            fields::recommendation::GENETIC_TESTING_REF.into(),
            FieldValue::text("41"),
        );
        store.insert(recommendation);

        let mut report = testsupport::genetic_testing_record(RecordId(41));
        report.fields.insert(
            fields::genetic_testing::SAMPLE_TAKEN_ON.into(),
            FieldValue::text("2024-02-01"),
        );
        report.fields.insert(
            fields::genetic_testing::SEQUENCING_TYPE.into(),
            FieldValue::text("PanelKit"),
        );
        store.insert(report);
        store.insert(testsupport::variant_record(RecordId(51), RecordId(41)));

        let mut follow_up = testsupport::follow_up_record(RecordId(21), RecordId(11));
        follow_up.fields.insert(
            fields::follow_up::THERAPY_STATUS.into(),
            FieldValue::text("on-going"),
        );
        follow_up.fields.insert(
            fields::follow_up::DATE.into(),
            FieldValue::text("2024-08-01"),
        );
        follow_up.fields.insert(
            fields::follow_up::BEST_RESPONSE.into(),
            FieldValue::text("s"),
        );
        store.insert(follow_up);

        store
    }

    #[test]
    fn assembles_connected_fragments_with_matching_references() {
        let store = populated_store();
        let anonymizer = crate::Anonymizer::new(Some("TEST".into()));
        let assembler = DocumentAssembler::new(&store, &anonymizer);
        let anamnesis = store.record(RecordId(1)).expect("present");

        let file = assembler.assemble(&anamnesis).expect("assembles");

        assert_eq!(file.care_plans.len(), 1);
        assert_eq!(file.recommendations.len(), 1);
        assert_eq!(
            file.care_plans[0].recommendations,
            vec![file.recommendations[0].id.clone()]
        );
        assert_eq!(file.care_plans[0].diagnosis, file.diagnoses[0].id);
        let report_reference = file.recommendations[0]
            .ngs_report
            .as_deref()
            .expect("referenced");
        assert!(
            file.ngs_reports.iter().any(|report| report.id == report_reference),
            "recommendation references ngs report {report_reference}, \
             but no report carries that id",
        );
        assert_eq!(file.ngs_reports[0].specimen, file.specimens[0].id);
        assert_eq!(file.molecular_therapies.len(), 1);
        assert_eq!(file.responses.len(), 1);
        assert_eq!(
            file.responses[0].therapy,
            file.recommendations[0].id
        );
    }

    #[test]
    fn missing_registration_date_aborts_with_episode_section() {
        let mut store = populated_store();
        let mut anamnesis = store.record(RecordId(1)).expect("present");
        anamnesis
            .fields
            .remove(fields::anamnesis::MTB_REGISTRATION_DATE);
        store.insert(anamnesis.clone());

        let anonymizer = crate::Anonymizer::new(None);
        let assembler = DocumentAssembler::new(&store, &anonymizer);
        let error = assembler.assemble(&anamnesis).expect_err("aborts");
        assert!(matches!(
            error,
            ExportError::MissingSection(Section::Episode)
        ));
    }

    #[test]
    fn unknown_disease_aborts_with_diagnosis_section() {
        let mut store = MemoryStore::default();
        let mut anamnesis = testsupport::anamnesis_record(RecordId(1));
        anamnesis.fields.insert(
            fields::anamnesis::MTB_REGISTRATION_DATE.into(),
            FieldValue::text("2024-04-17"),
        );
        store.insert(anamnesis);

        let anonymizer = crate::Anonymizer::new(None);
        let assembler = DocumentAssembler::new(&store, &anonymizer);
        let anamnesis = store.record(RecordId(1)).expect("present");
        let error = assembler.assemble(&anamnesis).expect_err("aborts");
        assert!(matches!(
            error,
            ExportError::MissingSection(Section::Diagnosis)
        ));
    }

    #[test]
    fn unlocked_children_do_not_contribute() {
        let mut store = populated_store();
        let mut care_plan = store.record(RecordId(2)).expect("present");
        care_plan.edit_state = crate::store::EditState::InProgress;
        store.insert(care_plan);

        let anonymizer = crate::Anonymizer::new(None);
        let assembler = DocumentAssembler::new(&store, &anonymizer);
        let anamnesis = store.record(RecordId(1)).expect("present");

        let file = assembler.assemble(&anamnesis).expect("assembles");
        assert!(file.care_plans.is_empty());
        assert!(file.recommendations.is_empty());
    }
}
