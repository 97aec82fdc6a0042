//! Embedded medication-list extraction.
//!
//! Some host fields carry a compact JSON array of medication entries as
//! free text. Malformed content yields an empty list, never an error; the
//! surrounding fragment is still exported.

use mtbfile::{Medication, MedicationSystem};
use serde::Deserialize;

#[derive(Deserialize)]
struct RawMedication {
    code: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    system: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

/// Parse a medication-list field into wire medications.
///
/// An ATC code without a catalogue version cannot be considered registered
/// and is downgraded to the unregistered system.
pub fn parse(raw: Option<&str>) -> Vec<Medication> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let entries: Vec<RawMedication> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(%error, "malformed embedded medication list");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .map(|entry| {
            let version = entry
                .version
                .map(|version| version.trim().to_string())
                .filter(|version| !version.is_empty());
            let system = match (entry.system.as_deref(), &version) {
                (Some("ATC"), Some(_)) => MedicationSystem::Atc,
                _ => MedicationSystem::Unregistered,
            };
            Medication {
                code: entry.code,
                display: entry.name.filter(|name| !name.trim().is_empty()),
                system,
                version,
            }
        })
        .collect()
}
