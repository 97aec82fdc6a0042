//! Export configuration.
//!
//! The host exposes configuration as plain-string global settings. They are
//! resolved into one [`ExportConfig`] per export invocation and threaded
//! through explicitly; mappers never query settings themselves.

use crate::error::ExportError;
use crate::store::RecordStore;

pub const SETTING_DESTINATION_URL: &str = "mtbexport_url";
pub const SETTING_TENANT_PREFIX: &str = "mtbexport_prefix";
pub const SETTING_EXPORT_CONSENT_REJECTED: &str = "mtbexport_export_consent_rejected";

#[derive(Clone, Debug)]
pub struct ExportConfig {
    destination_url: String,
    tenant_prefix: Option<String>,
    export_with_rejected_consent: bool,
}

impl ExportConfig {
    /// Resolve the configuration from the host's global settings.
    ///
    /// The destination URL is required; the tenant prefix and the
    /// rejected-consent override are optional. Only the literal `"true"`
    /// enables the override.
    pub fn from_store(store: &impl RecordStore) -> Result<Self, ExportError> {
        let destination_url = store
            .global_setting(SETTING_DESTINATION_URL)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ExportError::MissingDestinationUrl)?;

        let tenant_prefix = store
            .global_setting(SETTING_TENANT_PREFIX)
            .map(|prefix| prefix.trim().to_string())
            .filter(|prefix| !prefix.is_empty());

        let export_with_rejected_consent = store
            .global_setting(SETTING_EXPORT_CONSENT_REJECTED)
            .map(|flag| flag.trim() == "true")
            .unwrap_or(false);

        Ok(Self {
            destination_url,
            tenant_prefix,
            export_with_rejected_consent,
        })
    }

    pub fn destination_url(&self) -> &str {
        &self.destination_url
    }

    pub fn tenant_prefix(&self) -> Option<&str> {
        self.tenant_prefix.as_deref()
    }

    pub fn export_with_rejected_consent(&self) -> bool {
        self.export_with_rejected_consent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::MemoryStore;

    #[test]
    fn requires_destination_url() {
        let store = MemoryStore::default();
        let err = ExportConfig::from_store(&store).expect_err("should require URL");
        assert!(matches!(err, ExportError::MissingDestinationUrl));
    }

    #[test]
    fn optional_settings_default_when_absent() {
        let mut store = MemoryStore::default();
        store.set_setting(SETTING_DESTINATION_URL, "http://example.com/mtbfile");

        let config = ExportConfig::from_store(&store).expect("configured");
        assert_eq!(config.destination_url(), "http://example.com/mtbfile");
        assert_eq!(config.tenant_prefix(), None);
        assert!(!config.export_with_rejected_consent());
    }

    #[test]
    fn only_literal_true_enables_rejected_consent_export() {
        let mut store = MemoryStore::default();
        store.set_setting(SETTING_DESTINATION_URL, "http://example.com/mtbfile");
        store.set_setting(SETTING_EXPORT_CONSENT_REJECTED, "yes");
        assert!(!ExportConfig::from_store(&store)
            .expect("configured")
            .export_with_rejected_consent());

        store.set_setting(SETTING_EXPORT_CONSENT_REJECTED, "true");
        assert!(ExportConfig::from_store(&store)
            .expect("configured")
            .export_with_rejected_consent());
    }
}
