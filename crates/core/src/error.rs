use crate::store::RecordId;

/// The four document sections whose absence aborts the whole export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Patient,
    Consent,
    Episode,
    Diagnosis,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Section::Patient => "patient",
            Section::Consent => "consent",
            Section::Episode => "episode",
            Section::Diagnosis => "diagnosis",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("record {0} not found")]
    RecordNotFound(RecordId),
    #[error("no clinical anamnesis record reachable from record {0}")]
    NoOwningAnamnesis(RecordId),
    #[error("destination URL is not configured")]
    MissingDestinationUrl,
    #[error("missing required document section: {0}")]
    MissingSection(Section),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Failures raised by a delivery attempt. Never retried; the export attempt
/// ends with the failure propagated to the triggering caller.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("invalid destination URL: {0}")]
    InvalidUrl(String),
    #[error("failed to serialize document: {0}")]
    Serialization(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("registry answered with status {0}")]
    RemoteStatus(u16),
}
