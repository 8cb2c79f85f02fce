//! The single funnel through which every record reaches the queue.

use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::consent::{ConsentStore, ConsentUpdate};
use crate::error::Result;
use crate::event::TrackEvent;
use crate::loader::LoadFlag;
use crate::queue::EventQueue;

/// Emits normalized records onto the event queue and keeps the consent
/// snapshot current.
#[derive(Clone)]
pub struct Emitter {
    queue: EventQueue,
    loaded: LoadFlag,
    store: Arc<ConsentStore>,
}

impl Emitter {
    pub fn new(queue: EventQueue, loaded: LoadFlag, store: Arc<ConsentStore>) -> Self {
        Self {
            queue,
            loaded,
            store,
        }
    }

    /// Push one tracking event.
    ///
    /// Every event-emitting path funnels through here; the append is
    /// unconditional and synchronous.
    pub fn track(&self, event: TrackEvent) -> Result<()> {
        debug!(event = event.event.as_str(), "tracking event");
        self.queue.push(serde_json::to_value(&event)?);
        Ok(())
    }

    /// Signal the default consent, at most once per page session.
    ///
    /// A no-op once the tag script has loaded: the runtime already received
    /// its defaults by then.
    pub fn set_default_consent(&self, settings: ConsentUpdate) -> Result<()> {
        if self.loaded.is_set() {
            return Ok(());
        }
        debug!("default consent set");
        self.queue.push(json!({
            "event": "defaultConsent",
            "consent": serde_json::to_value(settings)?,
        }));
        Ok(())
    }

    /// Push a consent-update record, then replace the in-memory snapshot.
    ///
    /// Categories absent from the update stay absent in the record; they are
    /// only treated as denied when a gate later reads the snapshot.
    pub fn consent_update(&self, update: ConsentUpdate) -> Result<()> {
        self.queue.push(json!({
            "event": "consentUpdate",
            "consent": serde_json::to_value(update)?,
        }));
        self.store.replace(update);
        debug!(?update, "consent updated");
        Ok(())
    }

    /// Current consent snapshot, as last replaced by [`Self::consent_update`].
    pub fn consent_snapshot(&self) -> ConsentUpdate {
        self.store.snapshot()
    }

    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }
}
