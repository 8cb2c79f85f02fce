//! Cart-mutation URL classification.

use tagbridge_core::EventName;

/// A cart mutation observed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartAction {
    Add,
    Change,
}

impl CartAction {
    /// Canonical event name for this mutation.
    pub fn event_name(&self) -> EventName {
        match self {
            CartAction::Add => EventName::AddToCart,
            CartAction::Change => EventName::RemoveFromCart,
        }
    }
}

/// Classify an outbound URL. Add takes priority if both fragments match.
pub fn classify(url: &str) -> Option<CartAction> {
    if url.contains("cart/add") {
        Some(CartAction::Add)
    } else if url.contains("cart/change") {
        Some(CartAction::Change)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(
            classify("https://shop.example/cart/add.js"),
            Some(CartAction::Add)
        );
        assert_eq!(
            classify("https://shop.example/cart/change.js"),
            Some(CartAction::Change)
        );
        assert_eq!(classify("https://shop.example/cart.js"), None);
        assert_eq!(classify("https://shop.example/products/shirt"), None);
    }

    #[test]
    fn test_add_takes_priority() {
        assert_eq!(
            classify("https://shop.example/cart/add?next=cart/change"),
            Some(CartAction::Add)
        );
    }

    #[test]
    fn test_event_name_mapping() {
        assert_eq!(CartAction::Add.event_name(), EventName::AddToCart);
        assert_eq!(CartAction::Change.event_name(), EventName::RemoveFromCart);
    }
}
