//! Deterministic pseudonymous identifiers.
//!
//! Every entity in the document carries an identifier derived from its
//! internal record id: SHA-256 over the id's canonical decimal string,
//! RFC 4648 base-32 encoded, lowercased, truncated to a fixed length and
//! prefixed with the tenant prefix. Cross-entity references inside one
//! document are reconstructed by re-running this function, never by a
//! shared lookup table, so determinism is a hard requirement.

use crate::store::{DiseaseId, RecordId};
use sha2::{Digest, Sha256};

/// Prefix applied when no tenant prefix is configured.
const FALLBACK_PREFIX: &str = "UNKNOWN";

/// Number of base-32 characters kept from the encoded digest.
const ENCODED_LENGTH: usize = 40;

/// Separator inside composite hash inputs for synthetic sub-entities.
const COMPOSITE_SEPARATOR: char = '_';

#[derive(Clone, Debug)]
pub struct Anonymizer {
    tenant_prefix: Option<String>,
}

impl Anonymizer {
    pub fn new(tenant_prefix: Option<String>) -> Self {
        Self {
            tenant_prefix: tenant_prefix
                .map(|prefix| prefix.trim().to_string())
                .filter(|prefix| !prefix.is_empty()),
        }
    }

    /// Pseudonymize an internal id given in its canonical string form.
    pub fn anonymize(&self, internal_id: &str) -> String {
        let digest = Sha256::digest(internal_id.as_bytes());
        let encoded = base32::encode(base32::Alphabet::Rfc4648Lower { padding: false }, &digest);
        format!(
            "{}{}",
            self.tenant_prefix.as_deref().unwrap_or(FALLBACK_PREFIX),
            &encoded[..ENCODED_LENGTH]
        )
    }

    pub fn record(&self, id: RecordId) -> String {
        self.anonymize(&id.to_string())
    }

    pub fn disease(&self, id: DiseaseId) -> String {
        self.anonymize(&id.to_string())
    }

    /// Pseudonymize a synthetic sub-entity of a record, such as one
    /// per-trial study inclusion request.
    pub fn composite(&self, id: RecordId, suffix: &str) -> String {
        self.anonymize(&format!("{}{}{}", id, COMPOSITE_SEPARATOR, suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic() {
        let anonymizer = Anonymizer::new(Some("TEST".into()));
        assert_eq!(anonymizer.anonymize("1234"), anonymizer.anonymize("1234"));
    }

    #[test]
    fn distinct_ids_produce_distinct_outputs() {
        let anonymizer = Anonymizer::new(Some("TEST".into()));
        assert_ne!(anonymizer.anonymize("1234"), anonymizer.anonymize("1235"));
    }

    #[test]
    fn output_is_prefix_plus_forty_lowercase_base32_chars() {
        let anonymizer = Anonymizer::new(Some("TEST".into()));
        let id = anonymizer.anonymize("1234");
        assert!(id.starts_with("TEST"));
        let tail = &id["TEST".len()..];
        assert_eq!(tail.len(), 40);
        assert!(tail.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn missing_prefix_falls_back_to_sentinel() {
        let anonymizer = Anonymizer::new(None);
        assert!(anonymizer.anonymize("1234").starts_with("UNKNOWN"));

        let blank = Anonymizer::new(Some("  ".into()));
        assert!(blank.anonymize("1234").starts_with("UNKNOWN"));
    }

    #[test]
    fn composite_ids_differ_from_plain_ids() {
        let anonymizer = Anonymizer::new(Some("TEST".into()));
        let plain = anonymizer.record(RecordId(11));
        let composite = anonymizer.composite(RecordId(11), "NCT12345");
        assert_ne!(plain, composite);
        assert_eq!(
            composite,
            anonymizer.anonymize("11_NCT12345"),
        );
    }
}
