//! Browser bindings
//!
//! The page that collects pasted links calls into these exports and shows or
//! downloads the returned document.

use wasm_bindgen::prelude::*;

use crate::generator::{GroupSettings, OutputFormat};

/// Convert pasted share links to Clash YAML
#[wasm_bindgen]
pub fn convert_links(text: &str) -> Result<String, JsValue> {
    crate::convert_with(text, &GroupSettings::default(), OutputFormat::Yaml)
        .map_err(|e| JsValue::from_str(&format!("Failed to convert links: {}", e)))
}

/// Convert pasted share links, choosing `yaml` or `json` output
#[wasm_bindgen]
pub fn convert_links_as(text: &str, format: &str) -> Result<String, JsValue> {
    let format = format.parse::<OutputFormat>().map_err(|e| JsValue::from_str(&e))?;
    crate::convert_with(text, &GroupSettings::default(), format)
        .map_err(|e| JsValue::from_str(&format!("Failed to convert links: {}", e)))
}
