//! The canonical commerce event schema pushed to the event queue.
//!
//! Every record is JSON-serializable with no circular references; optional
//! fields are omitted entirely rather than serialized as null. Prices are
//! always in decimal major currency units by the time they land here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consent::ConsentUpdate;

/// Canonical event names understood by the tag-management runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    ViewItem,
    ViewItemList,
    ViewCart,
    AddToCart,
    RemoveFromCart,
    BeginCheckout,
    AddPaymentInfo,
    AddShippingInfo,
    Purchase,
    ConsentUpdate,
}

impl EventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::ViewItem => "view_item",
            EventName::ViewItemList => "view_item_list",
            EventName::ViewCart => "view_cart",
            EventName::AddToCart => "add_to_cart",
            EventName::RemoveFromCart => "remove_from_cart",
            EventName::BeginCheckout => "begin_checkout",
            EventName::AddPaymentInfo => "add_payment_info",
            EventName::AddShippingInfo => "add_shipping_info",
            EventName::Purchase => "purchase",
            EventName::ConsentUpdate => "consent_update",
        }
    }
}

/// One product or variant entry within a cart or order.
///
/// Identifier fields are passed through as the source reports them (numeric
/// or string), so they are kept as raw JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_variant: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

/// The `ecommerce` sub-object attached to commerce events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ecommerce {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_list_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_list_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LineItem>,
}

/// A normalized tracking event, the unit pushed onto the event queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackEvent {
    pub event: EventName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecommerce: Option<Ecommerce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_states: Option<ConsentUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl TrackEvent {
    pub fn new(event: EventName) -> Self {
        Self {
            event,
            ecommerce: None,
            consent_states: None,
            user_data: None,
            page_location: None,
            id: None,
            timestamp: None,
            token: None,
            client_id: None,
        }
    }

    pub fn with_ecommerce(mut self, ecommerce: Ecommerce) -> Self {
        self.ecommerce = Some(ecommerce);
        self
    }

    pub fn with_consent_states(mut self, states: ConsentUpdate) -> Self {
        self.consent_states = Some(states);
        self
    }

    pub fn with_user_data(mut self, user_data: Value) -> Self {
        self.user_data = Some(user_data);
        self
    }

    pub fn with_page_location(mut self, location: impl Into<String>) -> Self {
        self.page_location = Some(location.into());
        self
    }
}
