//! Lifecycle notification payloads as the checkout bus publishes them.
//!
//! The shape is owned externally, so every field down the tree is optional
//! and deserialization tolerates anything extra. Monetary amounts are
//! already in major currency units here.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// A notification delivered by the checkout analytics bus.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifecycleNotification {
    pub id: Option<String>,
    pub timestamp: Option<String>,
    pub client_id: Option<String>,
    pub context: Option<NotificationContext>,
    pub data: Option<NotificationData>,
}

impl LifecycleNotification {
    /// Parse a raw bus payload.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// The checkout payload, when the notification carries one.
    pub fn checkout(&self) -> Option<&CheckoutPayload> {
        self.data.as_ref().and_then(|data| data.checkout.as_ref())
    }

    /// Page URL the notification was captured on.
    pub fn page_location(&self) -> Option<String> {
        self.context
            .as_ref()
            .and_then(|context| context.document.as_ref())
            .and_then(|document| document.location.as_ref())
            .and_then(|location| location.href.clone())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotificationContext {
    pub document: Option<DocumentContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocumentContext {
    pub location: Option<LocationContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocationContext {
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotificationData {
    pub checkout: Option<CheckoutPayload>,
}

/// The checkout object carried by all four lifecycle topics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutPayload {
    pub token: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub currency_code: Option<String>,
    pub order: Option<OrderRef>,
    pub shipping_line: Option<ShippingLine>,
    pub total_price: Option<Money>,
    pub total_tax: Option<Money>,
    pub discount_applications: Option<Vec<DiscountApplication>>,
    pub line_items: Option<Vec<CheckoutLineItem>>,
    pub shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderRef {
    pub id: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Money {
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShippingLine {
    pub price: Option<Money>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscountApplication {
    pub amount: Option<f64>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutLineItem {
    pub title: Option<String>,
    pub quantity: Option<i64>,
    pub variant: Option<Variant>,
    pub discount_allocations: Option<DiscountAllocation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Variant {
    pub id: Option<Value>,
    pub title: Option<String>,
    pub price: Option<Money>,
    pub product: Option<ProductRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRef {
    pub id: Option<Value>,
    pub vendor: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscountAllocation {
    pub amount: Option<Money>,
    pub discount_application: Option<DiscountApplicationRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DiscountApplicationRef {
    pub title: Option<String>,
}

/// Shipping address, the source of the plaintext name and country fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingAddress {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
}
