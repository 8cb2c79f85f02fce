//! Decorators that observe cart mutations on the injected client seams.

use async_trait::async_trait;
use tagbridge_core::{Emitter, TrackEvent};
use tracing::warn;

use crate::cart::CartResponse;
use crate::classify::{classify, CartAction};
use crate::client::{HttpClient, LegacyTransport, Request, Response};
use crate::error::HttpResult;

/// Shared observation policy for both seams: parse a clone of the body so
/// the caller's copy stays unread, emit on success, log and swallow on a
/// parse failure.
fn observe(emitter: &Emitter, currency: Option<&str>, action: CartAction, response: &Response) {
    if !response.is_ok() {
        return;
    }
    let body = response.body.clone();
    match serde_json::from_slice::<CartResponse>(&body) {
        Ok(cart) => {
            let event = TrackEvent::new(action.event_name())
                .with_ecommerce(cart.to_ecommerce(currency.map(str::to_owned)));
            if let Err(err) = emitter.track(event) {
                warn!(%err, "failed to emit cart event");
            }
        }
        Err(err) => {
            warn!(%err, "unreadable cart response body, event dropped");
        }
    }
}

/// Wraps the generic request-fetch primitive.
///
/// Non-cart requests pass through untouched. Cart mutations additionally
/// emit a normalized commerce event after a successful response; transport
/// errors propagate unchanged.
pub struct CartInterceptor<C> {
    inner: C,
    emitter: Emitter,
    currency: Option<String>,
}

impl<C> CartInterceptor<C> {
    pub fn new(inner: C, emitter: Emitter) -> Self {
        Self {
            inner,
            emitter,
            currency: None,
        }
    }

    /// Currency attached to emitted cart events, usually the page currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for CartInterceptor<C> {
    async fn execute(&self, request: Request) -> HttpResult<Response> {
        let Some(action) = classify(&request.url) else {
            return self.inner.execute(request).await;
        };

        let response = self.inner.execute(request).await?;
        observe(&self.emitter, self.currency.as_deref(), action, &response);
        Ok(response)
    }
}

/// Wraps the legacy blocking request primitive with the same policy.
pub struct LegacyCartInterceptor<T> {
    inner: T,
    emitter: Emitter,
    currency: Option<String>,
}

impl<T> LegacyCartInterceptor<T> {
    pub fn new(inner: T, emitter: Emitter) -> Self {
        Self {
            inner,
            emitter,
            currency: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

impl<T: LegacyTransport> LegacyTransport for LegacyCartInterceptor<T> {
    fn send(&self, request: Request) -> HttpResult<Response> {
        let Some(action) = classify(&request.url) else {
            return self.inner.send(request);
        };

        let response = self.inner.send(request)?;
        observe(&self.emitter, self.currency.as_deref(), action, &response);
        Ok(response)
    }
}
