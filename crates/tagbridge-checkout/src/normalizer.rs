//! Checkout lifecycle normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tagbridge_core::{Ecommerce, Emitter, EventName, LineItem, TrackEvent};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::error::Result;
use crate::payload::{CheckoutLineItem, CheckoutPayload, LifecycleNotification};
use crate::user_data::UserData;

/// The four lifecycle topics published by the checkout bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleTopic {
    CheckoutStarted,
    CheckoutShippingInfoSubmitted,
    PaymentInfoSubmitted,
    CheckoutCompleted,
}

impl LifecycleTopic {
    pub const ALL: [LifecycleTopic; 4] = [
        LifecycleTopic::CheckoutStarted,
        LifecycleTopic::CheckoutShippingInfoSubmitted,
        LifecycleTopic::PaymentInfoSubmitted,
        LifecycleTopic::CheckoutCompleted,
    ];

    /// Topic name on the bus.
    pub fn topic(&self) -> &'static str {
        match self {
            LifecycleTopic::CheckoutStarted => "checkout_started",
            LifecycleTopic::CheckoutShippingInfoSubmitted => "checkout_shipping_info_submitted",
            LifecycleTopic::PaymentInfoSubmitted => "payment_info_submitted",
            LifecycleTopic::CheckoutCompleted => "checkout_completed",
        }
    }

    /// Canonical event this topic maps to.
    pub fn event_name(&self) -> EventName {
        match self {
            LifecycleTopic::CheckoutStarted => EventName::BeginCheckout,
            LifecycleTopic::CheckoutShippingInfoSubmitted => EventName::AddShippingInfo,
            LifecycleTopic::PaymentInfoSubmitted => EventName::AddPaymentInfo,
            LifecycleTopic::CheckoutCompleted => EventName::Purchase,
        }
    }

    pub fn from_topic(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.topic() == name)
    }
}

/// Derive the commerce sub-object from a checkout payload.
///
/// Missing nested fields default rather than fail: no discount application
/// means no discount and no coupon, no line items means an empty list.
pub fn checkout_ecommerce(checkout: Option<&CheckoutPayload>) -> Ecommerce {
    let Some(checkout) = checkout else {
        return Ecommerce {
            value: Some(0.0),
            shipping: Some(0.0),
            tax: Some(0.0),
            ..Ecommerce::default()
        };
    };

    let first_discount = checkout
        .discount_applications
        .as_ref()
        .and_then(|applications| applications.first());

    Ecommerce {
        transaction_id: checkout.order.as_ref().and_then(|order| order.id.clone()),
        currency: checkout.currency_code.clone(),
        shipping: Some(
            checkout
                .shipping_line
                .as_ref()
                .and_then(|line| line.price.as_ref())
                .and_then(|price| price.amount)
                .unwrap_or(0.0),
        ),
        value: Some(
            checkout
                .total_price
                .as_ref()
                .and_then(|price| price.amount)
                .unwrap_or(0.0),
        ),
        discount: first_discount.and_then(|application| application.amount),
        coupon: first_discount.and_then(|application| application.title.clone()),
        tax: Some(
            checkout
                .total_tax
                .as_ref()
                .and_then(|tax| tax.amount)
                .unwrap_or(0.0),
        ),
        items: checkout
            .line_items
            .as_ref()
            .map(|items| items.iter().map(checkout_line_item).collect())
            .unwrap_or_default(),
        ..Ecommerce::default()
    }
}

fn checkout_line_item(item: &CheckoutLineItem) -> LineItem {
    let variant = item.variant.as_ref();
    let product = variant.and_then(|variant| variant.product.as_ref());
    let allocation = item.discount_allocations.as_ref();

    LineItem {
        item_id: product.and_then(|product| product.id.clone()),
        variant_id: variant.and_then(|variant| variant.id.clone()),
        item_name: item.title.clone(),
        coupon: allocation
            .and_then(|allocation| allocation.discount_application.as_ref())
            .and_then(|application| application.title.clone()),
        discount: allocation
            .and_then(|allocation| allocation.amount.as_ref())
            .and_then(|amount| amount.amount),
        item_variant: variant
            .and_then(|variant| variant.title.clone())
            .map(Value::from),
        price: variant
            .and_then(|variant| variant.price.as_ref())
            .and_then(|price| price.amount),
        quantity: item.quantity,
        item_brand: product.and_then(|product| product.vendor.clone()),
        item_category: product.and_then(|product| product.product_type.clone()),
    }
}

/// Normalizes lifecycle notifications into canonical commerce events.
///
/// All four topics share this handler; only the output event name varies.
#[derive(Clone)]
pub struct CheckoutNormalizer {
    emitter: Emitter,
}

impl CheckoutNormalizer {
    pub fn new(emitter: Emitter) -> Self {
        Self { emitter }
    }

    /// Normalize and emit one notification.
    ///
    /// User-data hashing happens before emission; the event is pushed as one
    /// complete record once all hashes have resolved.
    pub async fn handle(
        &self,
        topic: LifecycleTopic,
        notification: &LifecycleNotification,
    ) -> Result<()> {
        debug!(topic = topic.topic(), "checkout notification received");

        let checkout = notification.checkout();
        let user_data = match checkout {
            Some(checkout) => UserData::derive(checkout).await,
            None => UserData::default(),
        };

        let mut event = TrackEvent::new(topic.event_name())
            .with_ecommerce(checkout_ecommerce(checkout))
            .with_user_data(serde_json::to_value(&user_data)?);
        event.page_location = notification.page_location();
        event.id = notification.id.clone();
        event.timestamp = notification.timestamp.clone();
        event.token = checkout.and_then(|checkout| checkout.token.clone());
        event.client_id = notification.client_id.clone();

        self.emitter.track(event)?;
        Ok(())
    }

    /// Drain the bus subscription until the sender side closes.
    pub async fn run(self, mut rx: mpsc::Receiver<(LifecycleTopic, LifecycleNotification)>) {
        while let Some((topic, notification)) = rx.recv().await {
            if let Err(err) = self.handle(topic, &notification).await {
                error!(%err, topic = topic.topic(), "failed to normalize checkout event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_event_mapping() {
        assert_eq!(
            LifecycleTopic::CheckoutStarted.event_name(),
            EventName::BeginCheckout
        );
        assert_eq!(
            LifecycleTopic::CheckoutShippingInfoSubmitted.event_name(),
            EventName::AddShippingInfo
        );
        assert_eq!(
            LifecycleTopic::PaymentInfoSubmitted.event_name(),
            EventName::AddPaymentInfo
        );
        assert_eq!(
            LifecycleTopic::CheckoutCompleted.event_name(),
            EventName::Purchase
        );
    }

    #[test]
    fn test_topic_round_trip() {
        for topic in LifecycleTopic::ALL {
            assert_eq!(LifecycleTopic::from_topic(topic.topic()), Some(topic));
        }
        assert_eq!(LifecycleTopic::from_topic("page_viewed"), None);
    }

    #[test]
    fn test_missing_checkout_defaults() {
        let ecommerce = checkout_ecommerce(None);
        assert_eq!(ecommerce.value, Some(0.0));
        assert_eq!(ecommerce.shipping, Some(0.0));
        assert_eq!(ecommerce.tax, Some(0.0));
        assert!(ecommerce.transaction_id.is_none());
        assert!(ecommerce.discount.is_none());
        assert!(ecommerce.coupon.is_none());
        assert!(ecommerce.items.is_empty());
    }
}
