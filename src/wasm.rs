use wasm_bindgen::prelude::*;

use crate::model::ProfileDocument;

#[wasm_bindgen]
pub fn render_resume(json: &str, template: &str) -> Result<Vec<u8>, JsValue> {
    crate::render_json(json, template).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Same as [`render_resume`], but takes the profile as a JS object.
#[wasm_bindgen]
pub fn render_resume_value(profile: JsValue, template: &str) -> Result<Vec<u8>, JsValue> {
    let profile: ProfileDocument = serde_wasm_bindgen::from_value(profile)
        .map_err(|e| JsValue::from_str(&format!("Invalid profile: {}", e)))?;
    crate::render_named(&profile, template).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn resume_filename(name: &str) -> String {
    crate::suggested_filename(name)
}
