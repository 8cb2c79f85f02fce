//! Static privacy configuration, loaded once per page session.

use serde::{Deserialize, Serialize};
use tagbridge_core::{ConsentState, TagConfig};

use crate::error::Result;

/// Where the consent-management UI lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CmpSource {
    /// The CMP ships inside the tag-management container and signals itself.
    TagManager,
    /// The storefront platform's own privacy API supplies consent.
    Platform,
    /// Consent is collected by custom storefront code.
    Custom,
}

/// Static privacy flags selecting the initialization behavior.
///
/// Immutable for the page session once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacySettings {
    /// Strict mode: only fire when explicit consent is available.
    pub strict: bool,
    /// Whether consent-mode signaling is enabled.
    pub consent_mode: bool,
    /// Which consent-management platform is in play.
    pub source: CmpSource,
    /// All consent handling is owned by the store.
    pub store_managed: bool,
    /// The store places the tag container itself.
    pub store_implement: bool,
    /// Default consent signaled before the tag script loads.
    pub default_consent: ConsentState,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            strict: false,
            consent_mode: true,
            source: CmpSource::TagManager,
            store_managed: false,
            store_implement: false,
            default_consent: ConsentState::denied(),
        }
    }
}

/// Top-level bridge configuration: tag container plus privacy flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub tag: TagConfig,
    #[serde(default)]
    pub privacy: PrivacySettings,
}

impl BridgeConfig {
    /// Parse a configuration embedded by the host as JSON.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
