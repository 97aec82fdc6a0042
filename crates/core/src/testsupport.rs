//! In-memory store and record builders shared by the unit tests.

use crate::error::DeliveryError;
use crate::export::Delivery;
use crate::fields;
use crate::store::{
    Disease, DiseaseId, EditState, FieldValue, PatientSummary, Record, RecordId, RecordKind,
    RecordStore, Sex,
};
use chrono::NaiveDate;
use mtbfile::MtbFile;
use std::cell::RefCell;
use std::collections::HashMap;

pub const TEST_PATIENT_ID: &str = "2000123456";
pub const TEST_DISEASE: DiseaseId = DiseaseId(7);

#[derive(Default)]
pub struct MemoryStore {
    records: HashMap<RecordId, Record>,
    diseases: HashMap<DiseaseId, Disease>,
    settings: HashMap<String, String>,
}

impl MemoryStore {
    pub fn insert(&mut self, record: Record) {
        self.records.insert(record.id, record);
    }

    pub fn insert_disease(&mut self, disease: Disease) {
        self.diseases.insert(disease.id, disease);
    }

    pub fn set_setting(&mut self, key: &str, value: &str) {
        self.settings.insert(key.to_string(), value.to_string());
    }
}

impl RecordStore for MemoryStore {
    fn record(&self, id: RecordId) -> Option<Record> {
        self.records.get(&id).cloned()
    }

    fn records_by_disease_and_kind(&self, disease: DiseaseId, kind: &RecordKind) -> Vec<Record> {
        let mut records: Vec<Record> = self
            .records
            .values()
            .filter(|record| &record.kind == kind && record.disease_ids.contains(&disease))
            .cloned()
            .collect();
        records.sort_by_key(|record| record.id);
        records
    }

    fn disease(&self, id: DiseaseId) -> Option<Disease> {
        self.diseases.get(&id).cloned()
    }

    fn global_setting(&self, key: &str) -> Option<String> {
        self.settings.get(key).cloned()
    }
}

pub fn patient_summary() -> PatientSummary {
    PatientSummary {
        external_id: TEST_PATIENT_ID.to_string(),
        birth_date: NaiveDate::from_ymd_opt(1965, 3, 9),
        death_date: None,
        sex: Sex::Female,
    }
}

pub fn record(id: RecordId, kind: RecordKind) -> Record {
    Record {
        id,
        kind,
        parent_id: None,
        disease_ids: vec![TEST_DISEASE],
        edit_state: EditState::Completed,
        started_on: NaiveDate::from_ymd_opt(2024, 5, 2),
        patient: patient_summary(),
        fields: HashMap::new(),
    }
}

pub fn anamnesis_record(id: RecordId) -> Record {
    let mut anamnesis = record(id, RecordKind::ClinicalAnamnesis);
    anamnesis.fields.insert(
        fields::anamnesis::CONSENT_STATUS.into(),
        FieldValue::text("active"),
    );
    anamnesis
}

pub fn care_plan_record(id: RecordId, anamnesis: RecordId) -> Record {
    let mut care_plan = record(id, RecordKind::CarePlan);
    care_plan.fields.insert(
        fields::care_plan::ANAMNESIS_REF.into(),
        FieldValue::text(anamnesis.to_string()),
    );
    care_plan
}

pub fn recommendation_record(id: RecordId, care_plan: RecordId) -> Record {
    let mut recommendation = record(id, RecordKind::Recommendation);
    recommendation.parent_id = Some(care_plan);
    recommendation
}

pub fn follow_up_record(id: RecordId, recommendation: RecordId) -> Record {
    let mut follow_up = record(id, RecordKind::FollowUp);
    follow_up.fields.insert(
        fields::follow_up::RECOMMENDATION_LINK.into(),
        FieldValue::text(recommendation.to_string()),
    );
    follow_up
}

pub fn genetic_testing_record(id: RecordId) -> Record {
    let mut report = record(id, RecordKind::GeneticTesting);
    report.fields.insert(
        fields::genetic_testing::DOCUMENTATION.into(),
        FieldValue::text("ERW"),
    );
    report
}

pub fn variant_record(id: RecordId, report: RecordId) -> Record {
    let mut variant = record(id, RecordKind::GeneticTestingVariant);
    variant.parent_id = Some(report);
    variant
        .fields
        .insert(fields::variant::RESULT.into(), FieldValue::text("P"));
    variant
}

pub fn ecog_record(id: RecordId, anamnesis: RecordId) -> Record {
    let mut ecog = record(id, RecordKind::Ecog);
    ecog.parent_id = Some(anamnesis);
    ecog
}

pub fn family_member_record(id: RecordId, anamnesis: RecordId) -> Record {
    let mut member = record(id, RecordKind::FamilyMember);
    member.parent_id = Some(anamnesis);
    member
}

pub fn conference_record(id: RecordId, date: NaiveDate) -> Record {
    let mut conference = record(id, RecordKind::Conference);
    conference
        .fields
        .insert(fields::conference::DATE.into(), FieldValue::date(date));
    conference
}

pub fn test_disease() -> Disease {
    Disease {
        id: TEST_DISEASE,
        icd10_code: Some("C25.1".into()),
        icd10_version: Some("2024".into()),
        localization_code: Some("C25.1".into()),
        localization_version: Some("33".into()),
    }
}

/// Records every delivery call instead of talking to a registry.
#[derive(Default)]
pub struct RecordingDelivery {
    pub published: RefCell<Vec<MtbFile>>,
    pub deleted: RefCell<Vec<String>>,
    pub fail_with: Option<fn() -> DeliveryError>,
}

impl Delivery for RecordingDelivery {
    fn upsert(&self, document: &MtbFile, _destination: &str) -> Result<(), DeliveryError> {
        if let Some(fail) = self.fail_with {
            return Err(fail());
        }
        self.published.borrow_mut().push(document.clone());
        Ok(())
    }

    fn delete(&self, patient_id: &str, _destination: &str) -> Result<(), DeliveryError> {
        if let Some(fail) = self.fail_with {
            return Err(fail());
        }
        self.deleted.borrow_mut().push(patient_id.to_string());
        Ok(())
    }
}
