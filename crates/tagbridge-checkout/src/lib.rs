//! Checkout lifecycle normalization
//!
//! Subscribes to the four checkout lifecycle topics published by the host's
//! analytics bus and maps each notification onto a canonical commerce event:
//! `begin_checkout`, `add_shipping_info`, `add_payment_info`, `purchase`.
//! One parameterized handler serves all four topics; only the output event
//! name differs.
//!
//! Personal fields are hashed on-device (SHA-256, lowercase hex) before the
//! event is emitted; the three hashes run concurrently and the event is not
//! pushed until all of them have resolved. Missing or malformed nested
//! payload fields default instead of failing: a dropped field can cost a
//! tracking detail, never the checkout.

pub mod error;
pub mod normalizer;
pub mod payload;
pub mod user_data;

pub use error::{NormalizeError, Result};
pub use normalizer::{checkout_ecommerce, CheckoutNormalizer, LifecycleTopic};
pub use payload::{CheckoutPayload, LifecycleNotification};
pub use user_data::UserData;
