//! The initialization decision table.
//!
//! Strictness × consent-mode × CMP source collapse into an explicit
//! [`InitPlan`] instead of the nested branching this logic is usually
//! written as. Store-managed configurations short-circuit the table, and
//! strict mode gates every remaining branch on the consent relevant to the
//! CMP source.

use serde::{Deserialize, Serialize};
use tagbridge_core::ConsentUpdate;

use crate::resolver::ResolvedPrivacy;
use crate::settings::CmpSource;

/// Which consent object feeds a post-load signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalSource {
    /// Consent resolved from the platform cookie; degrades to the empty
    /// update when no cookie was present.
    Platform,
    /// The in-memory fallback snapshot.
    Fallback,
}

/// Which consent object is pushed as the pre-load default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefaultSource {
    /// The configured default consent object.
    Configured,
    /// The in-memory fallback snapshot.
    Fallback,
}

/// One terminal behavior of the decision table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitPlan {
    /// Inject the tag-management script.
    pub load_tag: bool,
    /// Push a default-consent signal before loading, from this source.
    pub default_signal: Option<DefaultSource>,
    /// Push a consent-update record after loading, from this source.
    pub update_signal: Option<SignalSource>,
    /// Emit a `consent_update` tracking event carrying this source's states.
    pub track_event: Option<SignalSource>,
}

impl InitPlan {
    /// Leave the page un-instrumented.
    pub const NOOP: InitPlan = InitPlan {
        load_tag: false,
        default_signal: None,
        update_signal: None,
        track_event: None,
    };

    /// Initialize the loader and nothing else.
    pub const LOAD_ONLY: InitPlan = InitPlan {
        load_tag: true,
        default_signal: None,
        update_signal: None,
        track_event: None,
    };
}

/// Compute the plan for this page session.
///
/// `fallback` is the in-memory consent snapshot at decision time (all denied
/// at page load unless an update already ran).
pub fn plan(resolved: &ResolvedPrivacy, fallback: &ConsentUpdate) -> InitPlan {
    let settings = &resolved.settings;

    // Store-managed configurations bypass the table entirely.
    if settings.store_managed && !settings.store_implement {
        return InitPlan::LOAD_ONLY;
    }
    if settings.store_implement {
        return InitPlan::NOOP;
    }

    // Strict mode: nothing fires without the required consent. The gate
    // reads the consent relevant to the CMP source; partial consent is
    // insufficient, and an absent cookie counts as denied.
    if settings.strict {
        let granted = match settings.source {
            CmpSource::TagManager | CmpSource::Platform => resolved
                .platform_consent
                .map(|consent| consent.has_required_consent())
                .unwrap_or(false),
            CmpSource::Custom => fallback.has_required_consent(),
        };
        if !granted {
            return InitPlan::NOOP;
        }
    }

    match (settings.consent_mode, settings.source) {
        // The container hosts its own CMP and signals itself.
        (_, CmpSource::TagManager) => InitPlan::LOAD_ONLY,

        (true, CmpSource::Platform) => InitPlan {
            load_tag: true,
            default_signal: Some(DefaultSource::Configured),
            update_signal: Some(SignalSource::Platform),
            track_event: Some(SignalSource::Platform),
        },
        (true, CmpSource::Custom) => InitPlan {
            load_tag: true,
            default_signal: Some(DefaultSource::Fallback),
            update_signal: Some(SignalSource::Fallback),
            track_event: Some(SignalSource::Fallback),
        },
        (false, CmpSource::Platform) => InitPlan {
            load_tag: true,
            default_signal: None,
            update_signal: None,
            track_event: Some(SignalSource::Platform),
        },
        (false, CmpSource::Custom) => InitPlan {
            load_tag: true,
            default_signal: None,
            update_signal: None,
            track_event: Some(SignalSource::Fallback),
        },
    }
}
