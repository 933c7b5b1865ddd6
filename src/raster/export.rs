use std::io::Cursor;
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::foundation::error::{TouchupError, TouchupResult};
use crate::raster::buffer::PixelBuffer;

/// Encode a buffer as a PNG byte stream (straight alpha, RGBA8).
#[tracing::instrument(skip(buffer), fields(dims = %buffer.dimensions()))]
pub fn encode_png(buffer: &PixelBuffer) -> TouchupResult<Vec<u8>> {
    let mut out = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut out),
        buffer.as_bytes(),
        buffer.width(),
        buffer.height(),
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| TouchupError::export(format!("encode png: {e}")))?;
    Ok(out)
}

/// Background PNG encode of an immutable buffer snapshot.
///
/// The job owns an `Arc` of the snapshot, so the live buffer may keep changing while encoding
/// runs. Dropping the job detaches the worker; the encoded bytes are then discarded.
#[derive(Debug)]
pub struct ExportJob {
    snapshot: Arc<PixelBuffer>,
    handle: JoinHandle<TouchupResult<Vec<u8>>>,
}

impl ExportJob {
    /// Start encoding `snapshot` on a worker thread.
    pub fn spawn(snapshot: Arc<PixelBuffer>) -> TouchupResult<Self> {
        let worker_snapshot = Arc::clone(&snapshot);
        let handle = std::thread::Builder::new()
            .name("touchup-export".to_string())
            .spawn(move || encode_png(&worker_snapshot))
            .map_err(|e| TouchupError::export(format!("failed to spawn export worker: {e}")))?;
        Ok(Self { snapshot, handle })
    }

    /// The snapshot being encoded.
    pub fn snapshot(&self) -> &Arc<PixelBuffer> {
        &self.snapshot
    }

    /// Return `true` once the worker has finished (successfully or not).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until encoding completes and return the PNG bytes.
    pub fn wait(self) -> TouchupResult<Vec<u8>> {
        self.handle
            .join()
            .map_err(|_| TouchupError::export("export worker panicked"))?
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/export.rs"]
mod tests;
