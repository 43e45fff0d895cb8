/// Session Cart - product list with a per-tab shopping cart
/// Built with Rust + WASM + Yew

pub mod cart;
pub mod catalog;
pub mod config;
pub mod events;
pub mod storage;
pub mod ui;

use catalog::Catalog;
use config::ShopConfig;
use ui::shop::{Shop, ShopProps};
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // The logger passes everything; log::max_level is set per shop config in `mount`
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    log::set_max_level(log::LevelFilter::Info);
}

// Start the shop with default settings
#[wasm_bindgen]
pub fn start_shop() -> Result<(), JsValue> {
    mount(ShopConfig::default())
}

// Start the shop with a config object, e.g. `{ storageKey: "shoppingCart" }`
#[wasm_bindgen]
pub fn start_shop_with_config(config: JsValue) -> Result<(), JsValue> {
    let config = ShopConfig::from_js(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    mount(config)
}

fn mount(config: ShopConfig) -> Result<(), JsValue> {
    let level = config
        .level_filter()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::set_max_level(level);

    let props = ShopProps {
        config: config.clone(),
        catalog: Catalog::standard(),
    };

    match &config.root_id {
        Some(id) => {
            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
                .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", id)))?;
            yew::Renderer::<Shop>::with_root_and_props(root, props).render();
        }
        None => {
            yew::Renderer::<Shop>::with_props(props).render();
        }
    }

    log::info!("Shop started with cart key '{}'", config.storage_key);
    Ok(())
}
