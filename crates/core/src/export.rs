//! Consent-gated export orchestration.
//!
//! Each host trigger maps to exactly one of two remote states: the registry
//! either holds the current document for the patient or none at all. Every
//! run re-asserts the correct state, so a consent withdrawal after an
//! earlier publish converges on deletion with no history kept locally.

use crate::anonymize::Anonymizer;
use crate::assemble::DocumentAssembler;
use crate::config::ExportConfig;
use crate::error::{DeliveryError, ExportError, Section};
use crate::mapper::consent;
use crate::resolve::GraphResolver;
use crate::store::{RecordId, RecordStore};
use mtbfile::{ConsentStatus, MtbFile};

/// Transport boundary towards the remote registry.
pub trait Delivery {
    /// Replace the registry's document for the patient the document names.
    fn upsert(&self, document: &MtbFile, destination: &str) -> Result<(), DeliveryError>;

    /// Remove whatever the registry holds for the patient.
    fn delete(&self, patient_id: &str, destination: &str) -> Result<(), DeliveryError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A fresh document was delivered.
    Published { patient: String },
    /// The remote document was withdrawn.
    Withdrawn { patient: String },
    /// The trigger resolved to documentation still in progress.
    Skipped { record: RecordId },
}

pub struct ExportService<'a, S: RecordStore, D: Delivery> {
    store: &'a S,
    delivery: &'a D,
}

impl<'a, S: RecordStore, D: Delivery> ExportService<'a, S, D> {
    pub fn new(store: &'a S, delivery: &'a D) -> Self {
        Self { store, delivery }
    }

    /// Run one export for the record a host trigger fired on.
    ///
    /// The trigger may fire on the anamnesis itself or on any descendant;
    /// the walk up locates the owning anamnesis first. Configuration is
    /// resolved fresh per invocation.
    pub fn export(&self, trigger: RecordId) -> Result<ExportOutcome, ExportError> {
        let config = ExportConfig::from_store(self.store)?;
        let record = self
            .store
            .record(trigger)
            .ok_or(ExportError::RecordNotFound(trigger))?;
        let resolver = GraphResolver::new(self.store);
        let anamnesis = resolver
            .owning_anamnesis(&record)
            .ok_or(ExportError::NoOwningAnamnesis(trigger))?;

        if !anamnesis.is_locked() {
            tracing::info!(record = %anamnesis.id, "documentation still in progress, skipping");
            return Ok(ExportOutcome::Skipped { record: anamnesis.id });
        }

        let Some(status) = consent::status(&anamnesis) else {
            tracing::error!(record = %anamnesis.id, "no consent status documented");
            return Err(ExportError::MissingSection(Section::Consent));
        };
        let patient = anamnesis.patient.external_id.clone();

        if config.export_with_rejected_consent() || status == ConsentStatus::Active {
            let anonymizer = Anonymizer::new(config.tenant_prefix().map(str::to_string));
            let assembler = DocumentAssembler::new(self.store, &anonymizer);
            let document = assembler.assemble(&anamnesis)?;
            self.delivery.upsert(&document, config.destination_url())?;
            tracing::info!(record = %anamnesis.id, "document published");
            Ok(ExportOutcome::Published { patient })
        } else {
            self.delivery.delete(&patient, config.destination_url())?;
            tracing::info!(record = %anamnesis.id, "document withdrawn");
            Ok(ExportOutcome::Withdrawn { patient })
        }
    }
}
