use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{TouchupError, TouchupResult};
use crate::raster::buffer::PixelBuffer;

/// Decode encoded image bytes (PNG, JPEG, WebP, ...) into a straight-alpha RGBA8 buffer.
///
/// Opaque formats decode with alpha 255 everywhere.
pub fn decode_image(bytes: &[u8]) -> TouchupResult<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| TouchupError::decode(format!("decode image from memory: {e}")))?;
    PixelBuffer::from_rgba_image(dyn_img.to_rgba8())
}

/// Read and decode an image file.
pub fn decode_image_path(path: &Path) -> TouchupResult<PixelBuffer> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes).map_err(|e| match e {
        TouchupError::Decode(msg) => TouchupError::decode(format!("'{}': {msg}", path.display())),
        other => other,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/decode.rs"]
mod tests;
