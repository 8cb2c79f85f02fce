//! Consent state across the four data-collection categories.
//!
//! Two shapes exist on purpose: [`ConsentState`] is fully specified and is
//! what configuration and cookie resolution produce; [`ConsentUpdate`] keeps
//! unspecified categories unspecified, because pushed records must preserve
//! absence. Coercion of "absent" to "denied" happens only where a gate reads
//! the state, never when a record is built.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// A single category decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentStatus {
    Granted,
    Denied,
}

impl ConsentStatus {
    pub fn from_flag(granted: bool) -> Self {
        if granted {
            ConsentStatus::Granted
        } else {
            ConsentStatus::Denied
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, ConsentStatus::Granted)
    }
}

/// A fully specified consent decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentState {
    pub ad_storage: ConsentStatus,
    pub analytics_storage: ConsentStatus,
    pub ad_user_data: ConsentStatus,
    pub ad_personalization: ConsentStatus,
}

impl ConsentState {
    /// The all-denied baseline every page session starts from.
    pub fn denied() -> Self {
        Self {
            ad_storage: ConsentStatus::Denied,
            analytics_storage: ConsentStatus::Denied,
            ad_user_data: ConsentStatus::Denied,
            ad_personalization: ConsentStatus::Denied,
        }
    }

    pub fn granted() -> Self {
        Self {
            ad_storage: ConsentStatus::Granted,
            analytics_storage: ConsentStatus::Granted,
            ad_user_data: ConsentStatus::Granted,
            ad_personalization: ConsentStatus::Granted,
        }
    }

    /// Map the platform cookie's purpose flags onto the four categories.
    /// The marketing flag drives everything except analytics storage.
    pub fn from_purposes(marketing: bool, analytics: bool) -> Self {
        Self {
            ad_storage: ConsentStatus::from_flag(marketing),
            analytics_storage: ConsentStatus::from_flag(analytics),
            ad_user_data: ConsentStatus::from_flag(marketing),
            ad_personalization: ConsentStatus::from_flag(marketing),
        }
    }

    /// The loader gate: both storage categories must be granted.
    pub fn has_required_consent(&self) -> bool {
        self.ad_storage.is_granted() && self.analytics_storage.is_granted()
    }
}

impl Default for ConsentState {
    fn default() -> Self {
        Self::denied()
    }
}

/// A consent signal where unspecified categories stay unspecified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_storage: Option<ConsentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_storage: Option<ConsentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_user_data: Option<ConsentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_personalization: Option<ConsentStatus>,
}

impl ConsentUpdate {
    /// An update that specifies nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The loader gate over a possibly-partial signal; an absent category
    /// counts as denied.
    pub fn has_required_consent(&self) -> bool {
        matches!(self.ad_storage, Some(ConsentStatus::Granted))
            && matches!(self.analytics_storage, Some(ConsentStatus::Granted))
    }
}

impl From<ConsentState> for ConsentUpdate {
    fn from(state: ConsentState) -> Self {
        Self {
            ad_storage: Some(state.ad_storage),
            analytics_storage: Some(state.analytics_storage),
            ad_user_data: Some(state.ad_user_data),
            ad_personalization: Some(state.ad_personalization),
        }
    }
}

/// The in-memory consent snapshot read by later gating decisions.
///
/// Replaced wholesale on every consent update, never merged field by field.
#[derive(Debug)]
pub struct ConsentStore {
    snapshot: RwLock<ConsentUpdate>,
}

impl ConsentStore {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(ConsentUpdate::from(ConsentState::denied())),
        }
    }

    pub fn replace(&self, update: ConsentUpdate) {
        *self.snapshot.write() = update;
    }

    pub fn snapshot(&self) -> ConsentUpdate {
        *self.snapshot.read()
    }
}

impl Default for ConsentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purpose_mapping() {
        let state = ConsentState::from_purposes(true, false);
        assert!(state.ad_storage.is_granted());
        assert!(state.ad_user_data.is_granted());
        assert!(state.ad_personalization.is_granted());
        assert!(!state.analytics_storage.is_granted());
    }

    #[test]
    fn test_required_consent_needs_both_storage_categories() {
        assert!(ConsentState::granted().has_required_consent());
        assert!(!ConsentState::from_purposes(true, false).has_required_consent());
        assert!(!ConsentState::from_purposes(false, true).has_required_consent());
        assert!(!ConsentState::denied().has_required_consent());
    }

    #[test]
    fn test_absent_categories_count_as_denied() {
        let partial = ConsentUpdate {
            ad_storage: Some(ConsentStatus::Granted),
            ..ConsentUpdate::empty()
        };
        assert!(!partial.has_required_consent());
        assert!(!ConsentUpdate::empty().has_required_consent());
    }

    #[test]
    fn test_absent_categories_stay_absent_in_json() {
        let partial = ConsentUpdate {
            analytics_storage: Some(ConsentStatus::Granted),
            ..ConsentUpdate::empty()
        };
        let json = serde_json::to_value(partial).unwrap();
        assert_eq!(json["analytics_storage"], "granted");
        assert!(json.get("ad_storage").is_none());
    }

    #[test]
    fn test_store_replaces_wholesale() {
        let store = ConsentStore::new();
        assert!(!store.snapshot().has_required_consent());

        store.replace(ConsentUpdate::from(ConsentState::granted()));
        assert!(store.snapshot().has_required_consent());

        // A sparse update does not inherit previously granted categories.
        store.replace(ConsentUpdate {
            ad_storage: Some(ConsentStatus::Granted),
            ..ConsentUpdate::empty()
        });
        assert!(!store.snapshot().has_required_consent());
    }
}
