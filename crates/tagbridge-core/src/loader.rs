//! Tag-management script loading, exactly once per page session.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::queue::EventQueue;

/// Queue name the tag runtime reads from unless told otherwise.
pub const DEFAULT_QUEUE_NAME: &str = "dataLayer";

/// Where the tag-management script lives and which container to load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagConfig {
    /// Base URL of the tag-management host, trailing slash included.
    pub base_url: String,
    /// Container identifier appended as the `id` query parameter.
    pub container_id: String,
    /// Queue the runtime consumes; non-default names ride along as `l`.
    pub queue_name: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            base_url: "https://tags.example.com/".to_string(),
            container_id: "CT-0000000".to_string(),
            queue_name: DEFAULT_QUEUE_NAME.to_string(),
        }
    }
}

impl TagConfig {
    /// Full script URL for this container.
    pub fn script_url(&self) -> String {
        let mut url = format!("{}tag.js?id={}", self.base_url, self.container_id);
        if self.queue_name != DEFAULT_QUEUE_NAME {
            url.push_str("&l=");
            url.push_str(&self.queue_name);
        }
        url
    }
}

/// Shared exactly-once flag guarding script injection and default-consent
/// signaling. Compare-exchange keeps the guarantee on multi-threaded hosts.
#[derive(Debug, Clone, Default)]
pub struct LoadFlag {
    loaded: Arc<AtomicBool>,
}

impl LoadFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true on the first call only.
    pub fn set_once(&self) -> bool {
        self.loaded
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub fn is_set(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }
}

/// Host seam that places the script reference into the document.
///
/// Injection failures surface through the host's own error reporting; the
/// bridge neither observes nor retries them.
pub trait ScriptInjector: Send + Sync {
    fn inject(&self, src: &str);
}

/// Idempotent tag-management script loader.
pub struct TagLoader {
    config: TagConfig,
    queue: EventQueue,
    flag: LoadFlag,
    injector: Arc<dyn ScriptInjector>,
}

impl TagLoader {
    pub fn new(
        config: TagConfig,
        queue: EventQueue,
        flag: LoadFlag,
        injector: Arc<dyn ScriptInjector>,
    ) -> Self {
        Self {
            config,
            queue,
            flag,
            injector,
        }
    }

    /// Inject the script exactly once; later calls are no-ops.
    ///
    /// The first call pushes the bootstrap record (script-start timestamp)
    /// before injecting, so the runtime sees it as its first record.
    pub fn init(&self) {
        if !self.flag.set_once() {
            return;
        }
        self.queue.push(json!({
            "tag.start": chrono::Utc::now().timestamp_millis(),
            "event": "tag.js",
        }));
        self.injector.inject(&self.config.script_url());
        debug!(container = %self.config.container_id, "tag manager initialised");
    }

    pub fn is_loaded(&self) -> bool {
        self.flag.is_set()
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Handle to the shared loaded flag.
    pub fn flag(&self) -> LoadFlag {
        self.flag.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct CountingInjector {
        calls: AtomicUsize,
        last_src: parking_lot::Mutex<Option<String>>,
    }

    impl ScriptInjector for CountingInjector {
        fn inject(&self, src: &str) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_src.lock() = Some(src.to_string());
        }
    }

    fn loader_with(config: TagConfig) -> (TagLoader, Arc<CountingInjector>) {
        let injector = Arc::new(CountingInjector::default());
        let loader = TagLoader::new(config, EventQueue::new(), LoadFlag::new(), injector.clone());
        (loader, injector)
    }

    #[test]
    fn test_init_is_idempotent() {
        let (loader, injector) = loader_with(TagConfig::default());

        loader.init();
        loader.init();
        loader.init();

        assert_eq!(injector.calls.load(Ordering::SeqCst), 1);
        assert!(loader.is_loaded());
    }

    #[test]
    fn test_bootstrap_record_pushed_once() {
        let injector = Arc::new(CountingInjector::default());
        let queue = EventQueue::new();
        let loader = TagLoader::new(
            TagConfig::default(),
            queue.clone(),
            LoadFlag::new(),
            injector,
        );

        loader.init();
        loader.init();

        let records = queue.snapshot();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["event"], "tag.js");
        assert!(records[0]["tag.start"].is_i64());
    }

    #[test]
    fn test_script_url_default_queue_has_no_l_param() {
        let config = TagConfig {
            base_url: "https://tags.example.com/".to_string(),
            container_id: "CT-ABC1234".to_string(),
            queue_name: DEFAULT_QUEUE_NAME.to_string(),
        };
        assert_eq!(
            config.script_url(),
            "https://tags.example.com/tag.js?id=CT-ABC1234"
        );
    }

    #[test]
    fn test_script_url_alternate_queue() {
        let config = TagConfig {
            base_url: "https://tags.example.com/".to_string(),
            container_id: "CT-ABC1234".to_string(),
            queue_name: "shopQueue".to_string(),
        };
        let (loader, injector) = loader_with(config);
        loader.init();

        assert_eq!(
            injector.last_src.lock().as_deref(),
            Some("https://tags.example.com/tag.js?id=CT-ABC1234&l=shopQueue")
        );
    }
}
