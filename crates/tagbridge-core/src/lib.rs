//! Storefront tag bridge core
//!
//! Shared building blocks for the tag bridge: the canonical commerce event
//! schema, the append-only event queue the tag-management runtime consumes,
//! the four-category consent state, and the exactly-once tag loader.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌───────────────────┐
//! │ Consent      │   │ Network      │   │ Checkout          │
//! │ Resolver     │   │ Interceptors │   │ Normalizer        │
//! └──────┬───────┘   └──────┬───────┘   └─────────┬─────────┘
//!        │                  │                     │
//!        ▼                  ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                       Emitter                           │
//! │        (single track/consent funnel to the queue)       │
//! └───────────────────────────┬─────────────────────────────┘
//!                             ▼
//!                    ┌────────────────┐
//!                    │   EventQueue   │ → tag-management runtime
//!                    └────────────────┘
//! ```
//!
//! Everything here is safe to share across threads: the loaded flag is an
//! atomic cell, the consent snapshot sits behind a lock, and the queue is a
//! shared append-only sequence.

pub mod consent;
pub mod emitter;
pub mod error;
pub mod event;
pub mod loader;
pub mod page;
pub mod queue;

pub use consent::{ConsentState, ConsentStatus, ConsentStore, ConsentUpdate};
pub use emitter::Emitter;
pub use error::{BridgeError, Result};
pub use event::{Ecommerce, EventName, LineItem, TrackEvent};
pub use loader::{LoadFlag, ScriptInjector, TagConfig, TagLoader, DEFAULT_QUEUE_NAME};
pub use page::{CollectionInfo, PageContext};
pub use queue::EventQueue;
