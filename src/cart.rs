/// Cart contents and their persisted JSON form
use crate::catalog::{format_price, is_valid_price, Product};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A copy of a product's fields taken when it was added
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

impl CartItem {
    /// Text shown for the item in the cart list, e.g. "Product 3 ($30.00)"
    pub fn label(&self, currency: &str) -> String {
        format!("{} ({})", self.name, format_price(self.price, currency))
    }
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        CartItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error("malformed cart data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid cart item at index {index}: {reason}")]
    InvalidItem { index: usize, reason: String },
}

/// Ordered, append-only list of cart items. Duplicates are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    pub fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Decode a persisted cart. Any entry with the wrong shape invalidates the whole cart.
    pub fn from_json(data: &str) -> Result<Cart, CartError> {
        let cart: Cart = serde_json::from_str(data)?;

        if let Some((index, item)) = cart
            .items
            .iter()
            .enumerate()
            .find(|(_, item)| !is_valid_price(item.price))
        {
            return Err(CartError::InvalidItem {
                index,
                reason: format!("price {} is negative", item.price),
            });
        }

        Ok(cart)
    }

    pub fn to_json(&self) -> Result<String, CartError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Cart { items }
    }
}
