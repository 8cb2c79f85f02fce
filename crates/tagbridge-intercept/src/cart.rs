//! Mapping cart-mutation response payloads into line items.
//!
//! Cart endpoints answer in two shapes: the whole cart (an object with an
//! `items` array) or the single item that was just added. Prices arrive in
//! minor units and are scaled to major currency units exactly once, here.

use serde::Deserialize;
use serde_json::Value;
use tagbridge_core::{Ecommerce, LineItem};

/// One item as the cart endpoint reports it, price in minor units.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CartItemPayload {
    pub product_id: Option<Value>,
    pub product_title: Option<String>,
    pub title: Option<String>,
    pub vendor: Option<String>,
    pub product_type: Option<String>,
    pub variant_id: Option<Value>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl CartItemPayload {
    /// Normalize into a line item, scaling the price to major units.
    fn to_line_item(&self) -> LineItem {
        LineItem {
            item_id: self.product_id.clone(),
            item_name: self
                .product_title
                .clone()
                .or_else(|| self.title.clone()),
            item_brand: self.vendor.clone(),
            item_category: Some(self.product_type.clone().unwrap_or_default()),
            item_variant: self.variant_id.clone(),
            price: self.price.map(|price| price / 100.0),
            quantity: self.quantity,
            ..LineItem::default()
        }
    }
}

/// The two response shapes cart mutations come back in.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CartResponse {
    /// Whole-cart payload with an `items` array.
    Cart {
        items: Vec<CartItemPayload>,
        #[serde(default)]
        total_price: Option<f64>,
    },
    /// The single added or changed item at the top level.
    Item(CartItemPayload),
}

impl CartResponse {
    /// Derive the ecommerce sub-object, prices in major currency units.
    ///
    /// The whole-cart shape carries its own total; the single-item shape
    /// derives one from unit price × quantity.
    pub fn to_ecommerce(&self, currency: Option<String>) -> Ecommerce {
        match self {
            CartResponse::Cart { items, total_price } => Ecommerce {
                currency,
                value: Some(total_price.unwrap_or(0.0) / 100.0),
                items: items.iter().map(CartItemPayload::to_line_item).collect(),
                ..Ecommerce::default()
            },
            CartResponse::Item(item) => {
                let value =
                    item.price.unwrap_or(0.0) * item.quantity.unwrap_or(0) as f64 / 100.0;
                Ecommerce {
                    currency,
                    value: Some(value),
                    items: vec![item.to_line_item()],
                    ..Ecommerce::default()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_item_shape() {
        let payload = json!({
            "product_id": 1,
            "title": "Shirt",
            "price": 2500,
            "quantity": 2
        });
        let response: CartResponse = serde_json::from_value(payload).unwrap();
        let ecommerce = response.to_ecommerce(Some("EUR".to_string()));

        assert_eq!(ecommerce.items.len(), 1);
        assert_eq!(ecommerce.items[0].price, Some(25.0));
        assert_eq!(ecommerce.items[0].quantity, Some(2));
        assert_eq!(ecommerce.items[0].item_name.as_deref(), Some("Shirt"));
        assert_eq!(ecommerce.value, Some(50.0));
    }

    #[test]
    fn test_cart_shape_uses_total_price() {
        let payload = json!({
            "items": [{"product_id": 1, "price": 1000, "quantity": 1}],
            "total_price": 1000
        });
        let response: CartResponse = serde_json::from_value(payload).unwrap();
        let ecommerce = response.to_ecommerce(None);

        assert_eq!(ecommerce.value, Some(10.0));
        assert_eq!(ecommerce.items[0].price, Some(10.0));
    }

    #[test]
    fn test_product_title_wins_over_title() {
        let payload = json!({
            "product_id": 7,
            "product_title": "Shirt - Blue",
            "title": "Blue",
            "price": 100,
            "quantity": 1
        });
        let response: CartResponse = serde_json::from_value(payload).unwrap();
        let ecommerce = response.to_ecommerce(None);
        assert_eq!(
            ecommerce.items[0].item_name.as_deref(),
            Some("Shirt - Blue")
        );
    }

    #[test]
    fn test_missing_category_becomes_empty_string() {
        let payload = json!({"product_id": 7, "price": 100, "quantity": 1});
        let response: CartResponse = serde_json::from_value(payload).unwrap();
        let ecommerce = response.to_ecommerce(None);
        assert_eq!(ecommerce.items[0].item_category.as_deref(), Some(""));
    }
}
