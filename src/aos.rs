//! Binding to the AOS (animate on scroll) global loaded by the page.

use wasm_bindgen::prelude::*;

use crate::config::AosOptions;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = AOS, js_name = init, catch)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;
}

/// Fails when the options cannot be converted or the `AOS` global is missing.
pub fn init(options: &AosOptions) -> Result<(), JsValue> {
    let options = serde_wasm_bindgen::to_value(options)?;
    aos_init(&options)
}
