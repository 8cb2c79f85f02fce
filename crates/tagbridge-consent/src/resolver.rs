//! Privacy resolution: platform cookies merged over static configuration.

use tagbridge_core::ConsentState;
use tracing::debug;

use crate::cookie::{first_consent_cookie, parse_consent_cookie, CookieSource};
use crate::settings::PrivacySettings;

/// The applicable privacy policy for this page session.
#[derive(Debug, Clone)]
pub struct ResolvedPrivacy {
    pub settings: PrivacySettings,
    /// Consent read from the platform cookie, when one was present and
    /// well-formed.
    pub platform_consent: Option<ConsentState>,
}

/// Read the candidate cookies and classify the applicable policy branch.
///
/// A malformed cookie never fails the page: the static configuration is
/// returned unchanged, with no platform consent attached.
pub async fn resolve_privacy(
    settings: &PrivacySettings,
    cookies: &dyn CookieSource,
) -> ResolvedPrivacy {
    let Some(raw) = first_consent_cookie(cookies).await else {
        return ResolvedPrivacy {
            settings: settings.clone(),
            platform_consent: None,
        };
    };

    match parse_consent_cookie(&raw) {
        Ok(consent) => ResolvedPrivacy {
            settings: settings.clone(),
            platform_consent: Some(consent),
        },
        Err(err) => {
            debug!(%err, "consent cookie unreadable, using configured defaults");
            ResolvedPrivacy {
                settings: settings.clone(),
                platform_consent: None,
            }
        }
    }
}
