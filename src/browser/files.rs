//! File Reading

use tally_core::ReadFailure;
use wasm_bindgen_futures::JsFuture;

use super::js_error_message;

/// Read a user-selected file as UTF-8 text
pub async fn read_file_text(file: &web_sys::File) -> Result<String, ReadFailure> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| ReadFailure(format!("{}: {}", file.name(), js_error_message(&e))))?;

    text.as_string()
        .ok_or_else(|| ReadFailure(format!("{} did not decode as text", file.name())))
}
