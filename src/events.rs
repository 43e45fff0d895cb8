/// Requests the UI sends inward to the cart store
use web_sys::Element;

/// Class carried by every "Add to Cart" button in the product list
pub const ADD_BUTTON_CLASS: &str = "add-to-cart-btn";

/// Attribute holding the product id on an add button
pub const PRODUCT_ID_ATTR: &str = "data-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    AddRequested(u32),
    ClearRequested,
}

/// Parse a product id from a data attribute. Anything but a plain non-negative integer is None.
pub fn parse_product_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Resolve the target of a click inside the product list into an add request.
/// Clicks that did not land on an add button, or whose id is missing or malformed, yield None.
pub fn add_request_for(target: &Element) -> Option<CartEvent> {
    if !target.class_list().contains(ADD_BUTTON_CLASS) {
        return None;
    }

    let raw = target.get_attribute(PRODUCT_ID_ATTR);
    match raw.as_deref().and_then(parse_product_id) {
        Some(id) => Some(CartEvent::AddRequested(id)),
        None => {
            log::debug!("Ignoring add button with bad {}: {:?}", PRODUCT_ID_ATTR, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("1"), Some(1));
        assert_eq!(parse_product_id(" 5 "), Some(5));
        assert_eq!(parse_product_id("42"), Some(42));
    }

    #[test]
    fn test_parse_product_id_malformed() {
        assert_eq!(parse_product_id(""), None);
        assert_eq!(parse_product_id("abc"), None);
        assert_eq!(parse_product_id("-1"), None);
        assert_eq!(parse_product_id("2.5"), None);
        assert_eq!(parse_product_id("undefined"), None);
    }
}
