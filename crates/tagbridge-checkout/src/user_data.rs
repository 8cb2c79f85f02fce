//! On-device hashing of personal fields.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::payload::CheckoutPayload;

/// Lowercase hex SHA-256 of a personal field, absent input stays absent.
async fn hashed(value: Option<&str>) -> Option<String> {
    value.map(|value| hex::encode(Sha256::digest(value.as_bytes())))
}

/// User metadata attached to checkout events: hashed identifiers next to
/// their plaintext counterparts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl UserData {
    /// Derive user data from a checkout payload.
    ///
    /// The three hashes are launched concurrently and all joined before the
    /// result is returned, so the emitted event is never missing one of
    /// them. Name fields prefer the top-level payload and fall back to the
    /// shipping address.
    pub async fn derive(checkout: &CheckoutPayload) -> Self {
        let address = checkout.shipping_address.as_ref();
        let first_name = checkout
            .first_name
            .clone()
            .or_else(|| address.and_then(|a| a.first_name.clone()));
        let last_name = checkout
            .last_name
            .clone()
            .or_else(|| address.and_then(|a| a.last_name.clone()));

        let (sha256_email_address, sha256_first_name, sha256_last_name) = tokio::join!(
            hashed(checkout.email.as_deref()),
            hashed(first_name.as_deref()),
            hashed(last_name.as_deref()),
        );

        Self {
            sha256_email_address,
            sha256_first_name,
            sha256_last_name,
            email: checkout.email.clone(),
            first_name,
            last_name,
            phone: checkout.phone.clone(),
            country: address.and_then(|a| a.country.clone()),
        }
    }
}
