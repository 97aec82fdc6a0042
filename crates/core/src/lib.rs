//! Core export pipeline: record-graph resolution, field mapping, document
//! assembly and the consent-gated delivery decision.
//!
//! The pipeline converts the hierarchical clinical documentation records of
//! one patient into a single MTB interoperability document and decides, per
//! trigger, whether the remote registry should receive a fresh document or a
//! withdrawal. The host record store is consumed through the [`RecordStore`]
//! trait only; this crate owns no persistence, no concurrency and no shared
//! state between export runs.
//!
//! Processing is strictly synchronous: resolve, map, assemble, gate,
//! deliver. Each run re-queries the store from scratch and discards all
//! intermediate fragments afterwards.

pub mod anonymize;
pub mod assemble;
pub mod config;
pub mod error;
pub mod export;
pub mod fields;
pub mod mapper;
pub mod resolve;
pub mod store;

#[cfg(test)]
pub(crate) mod testsupport;

pub use anonymize::Anonymizer;
pub use assemble::DocumentAssembler;
pub use config::ExportConfig;
pub use error::{DeliveryError, ExportError, Section};
pub use export::{Delivery, ExportOutcome, ExportService};
pub use resolve::GraphResolver;
pub use store::{
    Disease, DiseaseId, EditState, FieldData, FieldValue, PatientSummary, Record, RecordId,
    RecordKind, RecordStore, Sex,
};
