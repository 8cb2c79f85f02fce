//! Page-view event derivation from the host page's commerce metadata.

use serde::{Deserialize, Serialize};

use crate::event::{Ecommerce, EventName, LineItem, TrackEvent};

/// Collection metadata for listing pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_title: Option<String>,
}

/// Externally populated per-page commerce metadata, consumed read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContext {
    pub template_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub cart_items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<CollectionInfo>,
}

impl PageContext {
    /// Derive the page-view event for this template, if the template is one
    /// of the commerce surfaces (product, collection, cart).
    pub fn page_view_event(&self) -> Option<TrackEvent> {
        let template = self.template_name.to_lowercase();

        if template.contains("product") {
            Some(
                TrackEvent::new(EventName::ViewItem).with_ecommerce(Ecommerce {
                    currency: self.currency.clone(),
                    value: self
                        .items
                        .first()
                        .and_then(|item| item.price)
                        .or(Some(0.0)),
                    items: self.items.clone(),
                    ..Ecommerce::default()
                }),
            )
        } else if template.contains("collection") {
            let collection = self.collection.as_ref();
            Some(
                TrackEvent::new(EventName::ViewItemList).with_ecommerce(Ecommerce {
                    item_list_id: Some(
                        collection
                            .and_then(|c| c.collection_id.clone())
                            .unwrap_or_default(),
                    ),
                    item_list_name: Some(
                        collection
                            .and_then(|c| c.collection_title.clone())
                            .unwrap_or_default(),
                    ),
                    items: self.items.clone(),
                    ..Ecommerce::default()
                }),
            )
        } else if template.contains("cart") {
            Some(
                TrackEvent::new(EventName::ViewCart).with_ecommerce(Ecommerce {
                    currency: self.currency.clone(),
                    value: self.total.or(Some(0.0)),
                    items: self.cart_items.clone(),
                    ..Ecommerce::default()
                }),
            )
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64) -> LineItem {
        LineItem {
            item_name: Some("Shirt".to_string()),
            price: Some(price),
            quantity: Some(1),
            ..LineItem::default()
        }
    }

    #[test]
    fn test_product_template_views_first_item() {
        let context = PageContext {
            template_name: "product.alternate".to_string(),
            currency: Some("EUR".to_string()),
            items: vec![item(19.5), item(3.0)],
            ..PageContext::default()
        };

        let event = context.page_view_event().unwrap();
        assert_eq!(event.event, EventName::ViewItem);
        let ecommerce = event.ecommerce.unwrap();
        assert_eq!(ecommerce.value, Some(19.5));
        assert_eq!(ecommerce.items.len(), 2);
    }

    #[test]
    fn test_collection_template_lists_items() {
        let context = PageContext {
            template_name: "collection".to_string(),
            items: vec![item(5.0)],
            collection: Some(CollectionInfo {
                collection_id: Some("col-9".to_string()),
                collection_title: Some("Summer".to_string()),
            }),
            ..PageContext::default()
        };

        let event = context.page_view_event().unwrap();
        assert_eq!(event.event, EventName::ViewItemList);
        let ecommerce = event.ecommerce.unwrap();
        assert_eq!(ecommerce.item_list_id.as_deref(), Some("col-9"));
        assert_eq!(ecommerce.item_list_name.as_deref(), Some("Summer"));
    }

    #[test]
    fn test_missing_collection_info_defaults_to_empty_strings() {
        let context = PageContext {
            template_name: "collection".to_string(),
            ..PageContext::default()
        };

        let ecommerce = context.page_view_event().unwrap().ecommerce.unwrap();
        assert_eq!(ecommerce.item_list_id.as_deref(), Some(""));
        assert_eq!(ecommerce.item_list_name.as_deref(), Some(""));
    }

    #[test]
    fn test_cart_template_uses_cart_total() {
        let context = PageContext {
            template_name: "cart".to_string(),
            currency: Some("USD".to_string()),
            cart_items: vec![item(10.0)],
            total: Some(10.0),
            ..PageContext::default()
        };

        let event = context.page_view_event().unwrap();
        assert_eq!(event.event, EventName::ViewCart);
        assert_eq!(event.ecommerce.unwrap().value, Some(10.0));
    }

    #[test]
    fn test_other_templates_emit_nothing() {
        let context = PageContext {
            template_name: "index".to_string(),
            ..PageContext::default()
        };
        assert!(context.page_view_event().is_none());
    }
}
