/// Runtime configuration passed in from the host page
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use wasm_bindgen::JsValue;

pub const DEFAULT_STORAGE_KEY: &str = "cart";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid shop config: {0}")]
    Invalid(String),
    #[error("storageKey must not be empty")]
    EmptyStorageKey,
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Shop settings. Every field is optional on the JS side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShopConfig {
    /// Session storage key the cart is persisted under
    pub storage_key: String,
    /// Placeholder shown beside the cart list while it is empty
    pub empty_state_message: Option<String>,
    pub currency_symbol: String,
    pub log_level: String,
    /// Element to mount into; the document body if unset
    pub root_id: Option<String>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            empty_state_message: None,
            currency_symbol: "$".to_string(),
            log_level: "info".to_string(),
            root_id: None,
        }
    }
}

impl ShopConfig {
    /// Read a config object handed over from JavaScript. `undefined` and `null` mean defaults.
    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }

        let config: ShopConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}
