//! Photo Commands
//!
//! Reads a browser file selection into an upload payload.

use closet_core::Photo;
use wasm_bindgen_futures::JsFuture;

pub async fn read_photo(file: web_sys::File) -> Result<Photo, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Could not read {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    log::debug!("read {} ({} bytes)", file.name(), bytes.len());
    Ok(Photo::new(file.name(), file.type_(), bytes))
}
