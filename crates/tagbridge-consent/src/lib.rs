//! Consent resolution and tag initialization
//!
//! Decides, once per page load, whether and how the tag-management script is
//! initialized: reads the platform consent cookies, merges them over the
//! static privacy configuration, classifies the applicable policy branch,
//! and executes the resulting plan against the core loader and emitter.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌─────────────────────┐
//! │ CookieSource │ ──► │   Resolver   │ ──► │   Decision table    │
//! │ (host seam)  │     │ (cookie ∪    │     │ strict × mode × CMP │
//! └──────────────┘     │  config)     │     └──────────┬──────────┘
//!                      └──────────────┘                │ InitPlan
//!                                                      ▼
//!                                           ┌─────────────────────┐
//!                                           │    Bootstrapper     │
//!                                           │ default → load →    │
//!                                           │ update → track      │
//!                                           └─────────────────────┘
//! ```

pub mod bootstrap;
pub mod cookie;
pub mod error;
pub mod resolver;
pub mod settings;
pub mod table;

pub use bootstrap::{is_checkout_page, Bootstrapper};
pub use cookie::{parse_consent_cookie, CookieSource, CONSENT_COOKIE_NAMES};
pub use error::{ConsentError, Result};
pub use resolver::{resolve_privacy, ResolvedPrivacy};
pub use settings::{BridgeConfig, CmpSource, PrivacySettings};
pub use table::{plan, DefaultSource, InitPlan, SignalSource};
