/// Cart persistence on top of a session-scoped key-value slot

use crate::cart::{Cart, CartError, CartItem};
use crate::catalog::Catalog;
use crate::events::CartEvent;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },
    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// A string key-value store. Reads and writes whole values only.
pub trait SlotBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl SlotBackend for Box<dyn SlotBackend> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Browser `sessionStorage`
pub struct SessionSlot {
    storage: web_sys::Storage,
}

impl SessionSlot {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;

        let storage = window
            .session_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("sessionStorage is disabled".to_string()))?;

        Ok(SessionSlot { storage })
    }
}

impl SlotBackend for SessionSlot {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

/// In-memory slot, used when `sessionStorage` is unavailable and in tests
#[derive(Debug, Default)]
pub struct MemorySlot {
    values: RefCell<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotBackend for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Session storage if the host provides it, otherwise an in-memory slot
pub fn open_session_backend() -> Box<dyn SlotBackend> {
    with_memory_fallback(SessionSlot::open())
}

fn with_memory_fallback<B: SlotBackend + 'static>(
    opened: Result<B, StorageError>,
) -> Box<dyn SlotBackend> {
    match opened {
        Ok(slot) => Box::new(slot),
        Err(e) => {
            log::warn!("{}; cart will only live as long as this page", e);
            Box::new(MemorySlot::new())
        }
    }
}

/// Loads, mutates and saves the cart as a whole under a single key
pub struct CartStore<B> {
    backend: B,
    key: String,
    catalog: Catalog,
}

impl<B: SlotBackend> CartStore<B> {
    pub fn new(backend: B, key: impl Into<String>, catalog: Catalog) -> Self {
        CartStore {
            backend,
            key: key.into(),
            catalog,
        }
    }

    /// Read the persisted cart, reporting corrupt or unreadable data
    pub fn try_load(&self) -> Result<Cart, StorageError> {
        match self.backend.read(&self.key)? {
            Some(data) => Ok(Cart::from_json(&data)?),
            None => Ok(Cart::new()),
        }
    }

    /// Read the persisted cart. Any failure is logged and yields an empty cart.
    pub fn load_cart(&self) -> Cart {
        self.try_load().unwrap_or_else(|e| {
            log::error!("Error loading cart from '{}': {}", self.key, e);
            Cart::new()
        })
    }

    /// Overwrite the slot with the full cart
    pub fn save_cart(&self, cart: &Cart) -> Result<(), StorageError> {
        let data = cart.to_json()?;
        self.backend.write(&self.key, &data)
    }

    /// Append a copy of the product to the persisted cart.
    /// Returns false if the id is not in the catalog or the cart could not be saved.
    pub fn add_to_cart(&self, product_id: u32) -> bool {
        let Some(product) = self.catalog.find(product_id) else {
            log::debug!("Ignoring add for unknown product id {}", product_id);
            return false;
        };

        let mut cart = self.load_cart();
        cart.push(CartItem::from(product));

        match self.save_cart(&cart) {
            Ok(()) => {
                log::debug!("Added '{}' to cart ({} items)", product.name, cart.len());
                true
            }
            Err(e) => {
                log::error!("Failed to save cart: {}", e);
                false
            }
        }
    }

    pub fn clear_cart(&self) {
        if let Err(e) = self.save_cart(&Cart::new()) {
            log::error!("Failed to clear cart: {}", e);
        }
    }

    /// Apply a UI request and return the cart as it now reads from storage
    pub fn dispatch(&self, event: CartEvent) -> Cart {
        match event {
            CartEvent::AddRequested(product_id) => {
                self.add_to_cart(product_id);
            }
            CartEvent::ClearRequested => self.clear_cart(),
        }
        self.load_cart()
    }
}
