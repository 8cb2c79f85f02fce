//! Consent cookie reading and decoding.

use async_trait::async_trait;
use serde::Deserialize;
use tagbridge_core::ConsentState;

use crate::error::{ConsentError, Result};

/// Candidate consent cookies, highest priority first.
pub const CONSENT_COOKIE_NAMES: [&str; 3] = ["_tracking_consent", "_cmp_a", "_shp_cmp"];

/// Read access to the host's cookie jar.
#[async_trait]
pub trait CookieSource: Send + Sync {
    /// Raw value of the named cookie, if present.
    async fn get(&self, name: &str) -> Option<String>;
}

/// First present candidate cookie value, in priority order.
pub async fn first_consent_cookie(source: &dyn CookieSource) -> Option<String> {
    for name in CONSENT_COOKIE_NAMES {
        if let Some(value) = source.get(name).await {
            return Some(value);
        }
    }
    None
}

#[derive(Debug, Deserialize)]
struct ConsentCookie {
    purposes: CookiePurposes,
}

/// Purpose flags carried by the platform consent cookie. Flags that are
/// absent count as denied.
#[derive(Debug, Default, Deserialize)]
struct CookiePurposes {
    /// Marketing purposes granted.
    #[serde(default)]
    m: bool,
    /// Analytics purposes granted.
    #[serde(default)]
    a: bool,
}

/// Decode a consent cookie value and map it onto the four categories.
pub fn parse_consent_cookie(raw: &str) -> Result<ConsentState> {
    let decoded = urlencoding::decode(raw).map_err(|e| ConsentError::Cookie(e.to_string()))?;
    let cookie: ConsentCookie = serde_json::from_str(&decoded)?;
    Ok(ConsentState::from_purposes(
        cookie.purposes.m,
        cookie.purposes.a,
    ))
}
