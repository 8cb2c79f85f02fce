//! Page-load bootstrap: resolve privacy, compute the plan, execute it.

use regex::Regex;
use std::sync::Arc;
use tagbridge_core::{ConsentUpdate, Emitter, EventName, TagLoader, TrackEvent};
use tracing::debug;

use crate::cookie::CookieSource;
use crate::error::Result;
use crate::resolver::{resolve_privacy, ResolvedPrivacy};
use crate::settings::PrivacySettings;
use crate::table::{plan, DefaultSource, InitPlan, SignalSource};

/// Pages the bridge instruments: checkout and order-status URLs.
pub fn is_checkout_page(url: &str) -> bool {
    if let Ok(re) = Regex::new(r"/(checkouts|orders)") {
        return re.is_match(url);
    }
    false
}

/// Executes the decision table for one page session.
pub struct Bootstrapper {
    settings: PrivacySettings,
    emitter: Emitter,
    loader: Arc<TagLoader>,
}

impl Bootstrapper {
    pub fn new(settings: PrivacySettings, emitter: Emitter, loader: Arc<TagLoader>) -> Self {
        Self {
            settings,
            emitter,
            loader,
        }
    }

    /// Resolve consent and initialize tagging for a checkout-like page.
    ///
    /// Runs once at page load. Non-checkout URLs are left un-instrumented,
    /// as is any strict-mode session without the required consent.
    pub async fn decide_and_init(
        &self,
        page_url: &str,
        cookies: &dyn CookieSource,
    ) -> Result<InitPlan> {
        if !is_checkout_page(page_url) {
            debug!(url = page_url, "not a checkout page, skipping init");
            return Ok(InitPlan::NOOP);
        }

        let resolved = resolve_privacy(&self.settings, cookies).await;
        let fallback = self.emitter.consent_snapshot();
        let plan = plan(&resolved, &fallback);
        self.execute(&resolved, fallback, plan)?;
        Ok(plan)
    }

    /// Run one plan in signal order: default consent, then the loader, then
    /// the consent update, then the tracking event.
    fn execute(
        &self,
        resolved: &ResolvedPrivacy,
        fallback: ConsentUpdate,
        plan: InitPlan,
    ) -> Result<()> {
        let signal_states = |source: SignalSource| -> ConsentUpdate {
            match source {
                SignalSource::Platform => resolved
                    .platform_consent
                    .map(ConsentUpdate::from)
                    .unwrap_or_else(ConsentUpdate::empty),
                SignalSource::Fallback => fallback,
            }
        };

        if let Some(source) = plan.default_signal {
            let default = match source {
                DefaultSource::Configured => resolved.settings.default_consent.into(),
                DefaultSource::Fallback => fallback,
            };
            self.emitter.set_default_consent(default)?;
        }

        if plan.load_tag {
            self.loader.init();
        }

        if let Some(source) = plan.update_signal {
            self.emitter.consent_update(signal_states(source))?;
        }

        if let Some(source) = plan.track_event {
            self.emitter.track(
                TrackEvent::new(EventName::ConsentUpdate).with_consent_states(signal_states(source)),
            )?;
        }

        Ok(())
    }
}
