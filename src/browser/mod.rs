//! Browser Bindings
//!
//! localStorage and file access, behind the core's error types.

mod storage;
mod files;

use wasm_bindgen::{JsCast, JsValue};

pub use storage::BrowserStorage;
pub use files::read_file_text;

/// Best-effort readable message from a thrown JS value
fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
