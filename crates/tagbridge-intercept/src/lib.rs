//! Cart-mutation network interception
//!
//! Decorators for the two network seams of the hosting environment: the
//! generic request-fetch primitive and the legacy blocking request
//! primitive. Outbound calls whose URL names a cart mutation are observed;
//! on a successful response the body is parsed from a clone and translated
//! into a normalized `add_to_cart` / `remove_from_cart` event. Everything
//! else passes through with nothing but a substring check in the way.
//!
//! Transport errors always propagate to the original caller unchanged.
//! Body-parse failures are logged and swallowed, on both seams alike, so a
//! malformed cart payload can never break the host's own handling of its
//! response.

pub mod cart;
pub mod classify;
pub mod client;
pub mod error;
pub mod interceptor;

pub use cart::{CartItemPayload, CartResponse};
pub use classify::{classify, CartAction};
pub use client::{HttpClient, LegacyTransport, Request, Response};
pub use error::{HttpError, HttpResult};
pub use interceptor::{CartInterceptor, LegacyCartInterceptor};
