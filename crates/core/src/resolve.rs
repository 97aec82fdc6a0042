//! Read-only traversals over the host record graph.
//!
//! The resolver walks downward (children by kind and parent reference) and
//! upward (single reference fields toward the owning clinical anamnesis).
//! It holds no state beyond the store handle and never mutates anything.
//!
//! Guard rails applied to every traversal:
//! - a root associated with more than one disease yields nothing, since
//!   multi-diagnosis records are unsupported and must not silently produce
//!   partial data;
//! - a root of the wrong record kind yields nothing;
//! - with `locked_only` set, only records in the completed edit state pass.

use crate::fields;
use crate::store::{DiseaseId, Record, RecordId, RecordKind, RecordStore};

/// How a child record points back at its traversal root.
enum ChildLink {
    /// Structural parent/child relation in the host store.
    Structural,
    /// Embedded back-reference field holding the root's record id.
    Field(&'static str),
}

pub struct GraphResolver<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> GraphResolver<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Care plans owned by a clinical anamnesis record through the embedded
    /// back-reference field.
    pub fn care_plans_for_anamnesis(&self, anamnesis: &Record, locked_only: bool) -> Vec<Record> {
        self.children(
            anamnesis,
            &RecordKind::ClinicalAnamnesis,
            &RecordKind::CarePlan,
            ChildLink::Field(fields::care_plan::ANAMNESIS_REF),
            locked_only,
        )
    }

    /// Recommendations structurally owned by a care plan.
    pub fn recommendations_for_care_plan(
        &self,
        care_plan: &Record,
        locked_only: bool,
    ) -> Vec<Record> {
        self.children(
            care_plan,
            &RecordKind::CarePlan,
            &RecordKind::Recommendation,
            ChildLink::Structural,
            locked_only,
        )
    }

    /// Follow-ups linking to a recommendation, ordered by record id.
    pub fn follow_ups_for_recommendation(
        &self,
        recommendation: &Record,
        locked_only: bool,
    ) -> Vec<Record> {
        let mut follow_ups = self.children(
            recommendation,
            &RecordKind::Recommendation,
            &RecordKind::FollowUp,
            ChildLink::Field(fields::follow_up::RECOMMENDATION_LINK),
            locked_only,
        );
        follow_ups.sort_by_key(|record| record.id);
        follow_ups
    }

    /// ECOG observations structurally owned by a clinical anamnesis record.
    pub fn ecog_entries_for_anamnesis(&self, anamnesis: &Record, locked_only: bool) -> Vec<Record> {
        self.children(
            anamnesis,
            &RecordKind::ClinicalAnamnesis,
            &RecordKind::Ecog,
            ChildLink::Structural,
            locked_only,
        )
    }

    /// Family-member entries structurally owned by a clinical anamnesis
    /// record.
    pub fn family_members_for_anamnesis(
        &self,
        anamnesis: &Record,
        locked_only: bool,
    ) -> Vec<Record> {
        self.children(
            anamnesis,
            &RecordKind::ClinicalAnamnesis,
            &RecordKind::FamilyMember,
            ChildLink::Structural,
            locked_only,
        )
    }

    /// Variant records structurally owned by a genetic-testing record.
    pub fn variants_for_genetic_testing(&self, report: &Record) -> Vec<Record> {
        self.children(
            report,
            &RecordKind::GeneticTesting,
            &RecordKind::GeneticTestingVariant,
            ChildLink::Structural,
            false,
        )
    }

    /// Genetic-testing records reachable from a care plan: the ones each
    /// recommendation references plus the care plan's own reevaluation
    /// specimen reference, de-duplicated and kind-checked.
    pub fn genetic_testing_for_care_plan(
        &self,
        care_plan: &Record,
        locked_only: bool,
    ) -> Vec<Record> {
        if care_plan.kind != RecordKind::CarePlan {
            tracing::warn!(
                record = %care_plan.id,
                form = care_plan.kind.form_type(),
                "ignoring - not a care plan record",
            );
            return Vec::new();
        }

        let mut ids: Vec<RecordId> = self
            .recommendations_for_care_plan(care_plan, locked_only)
            .iter()
            .filter_map(|recommendation| {
                recommendation.ref_id(fields::recommendation::GENETIC_TESTING_REF)
            })
            .collect();
        ids.extend(care_plan.ref_id(fields::care_plan::REEVAL_SPECIMEN_REF));
        ids.sort();
        ids.dedup();

        ids.into_iter()
            .filter_map(|id| self.store.record(id))
            .filter(|record| record.kind == RecordKind::GeneticTesting)
            .filter(|record| !locked_only || record.is_locked())
            .collect()
    }

    /// The clinical anamnesis record a care plan references.
    pub fn anamnesis_for_care_plan(&self, care_plan: &Record) -> Option<Record> {
        self.ancestor_by_field(
            care_plan,
            &RecordKind::CarePlan,
            fields::care_plan::ANAMNESIS_REF,
            &RecordKind::ClinicalAnamnesis,
        )
    }

    /// The care plan structurally owning a recommendation.
    pub fn care_plan_for_recommendation(&self, recommendation: &Record) -> Option<Record> {
        if recommendation.kind != RecordKind::Recommendation {
            tracing::warn!(
                record = %recommendation.id,
                form = recommendation.kind.form_type(),
                "ignoring - not a recommendation record",
            );
            return None;
        }
        let parent = recommendation.parent_id?;
        let care_plan = self.store.record(parent)?;
        if care_plan.kind != RecordKind::CarePlan {
            tracing::warn!(
                record = %recommendation.id,
                parent = %parent,
                "parent of recommendation is not a care plan",
            );
            return None;
        }
        Some(care_plan)
    }

    /// The recommendation a follow-up links to.
    pub fn recommendation_for_follow_up(&self, follow_up: &Record) -> Option<Record> {
        self.ancestor_by_field(
            follow_up,
            &RecordKind::FollowUp,
            fields::follow_up::RECOMMENDATION_LINK,
            &RecordKind::Recommendation,
        )
    }

    /// Walk from any trigger record up to the owning clinical anamnesis.
    ///
    /// Triggers may fire on a descendant (care plan, recommendation or
    /// follow-up); the walk follows one reference at a time and gives up as
    /// soon as a link is missing or of an unexpected kind.
    pub fn owning_anamnesis(&self, record: &Record) -> Option<Record> {
        match record.kind {
            RecordKind::ClinicalAnamnesis => Some(record.clone()),
            RecordKind::CarePlan => self.anamnesis_for_care_plan(record),
            RecordKind::Recommendation => self
                .care_plan_for_recommendation(record)
                .and_then(|care_plan| self.anamnesis_for_care_plan(&care_plan)),
            RecordKind::FollowUp => self
                .recommendation_for_follow_up(record)
                .and_then(|recommendation| self.care_plan_for_recommendation(&recommendation))
                .and_then(|care_plan| self.anamnesis_for_care_plan(&care_plan)),
            _ => {
                tracing::warn!(
                    record = %record.id,
                    form = record.kind.form_type(),
                    "no anamnesis walk defined for this record kind",
                );
                None
            }
        }
    }

    fn children(
        &self,
        root: &Record,
        expected_root_kind: &RecordKind,
        child_kind: &RecordKind,
        link: ChildLink,
        locked_only: bool,
    ) -> Vec<Record> {
        if &root.kind != expected_root_kind {
            tracing::warn!(
                record = %root.id,
                form = root.kind.form_type(),
                expected = expected_root_kind.form_type(),
                "ignoring - unexpected record kind",
            );
            return Vec::new();
        }
        let Some(disease) = self.guarded_single_disease(root) else {
            return Vec::new();
        };

        self.store
            .records_by_disease_and_kind(disease, child_kind)
            .into_iter()
            .filter(|child| match link {
                ChildLink::Structural => child.parent_id == Some(root.id),
                ChildLink::Field(name) => child.ref_id(name) == Some(root.id),
            })
            .filter(|child| !locked_only || child.is_locked())
            .collect()
    }

    fn ancestor_by_field(
        &self,
        record: &Record,
        expected_kind: &RecordKind,
        field: &'static str,
        ancestor_kind: &RecordKind,
    ) -> Option<Record> {
        if &record.kind != expected_kind {
            tracing::warn!(
                record = %record.id,
                form = record.kind.form_type(),
                expected = expected_kind.form_type(),
                "ignoring - unexpected record kind",
            );
            return None;
        }
        let Some(referenced) = record.ref_id(field) else {
            tracing::warn!(record = %record.id, field, "no ancestor reference present");
            return None;
        };
        let ancestor = self.store.record(referenced)?;
        if &ancestor.kind != ancestor_kind {
            tracing::warn!(
                record = %record.id,
                referenced = %referenced,
                expected = ancestor_kind.form_type(),
                found = ancestor.kind.form_type(),
                "referenced record is not of the expected kind",
            );
            return None;
        }
        Some(ancestor)
    }

    fn guarded_single_disease(&self, record: &Record) -> Option<DiseaseId> {
        let disease = record.single_disease();
        if disease.is_none() {
            tracing::warn!(
                record = %record.id,
                diseases = record.disease_ids.len(),
                "ignoring - record is not associated with exactly one disease",
            );
        }
        disease
    }
}
