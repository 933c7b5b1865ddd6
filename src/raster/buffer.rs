use crate::foundation::core::Dimensions;
use crate::foundation::error::{TouchupError, TouchupResult};

/// One straight-alpha RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Owned straight-alpha RGBA8 raster, tightly packed and row-major.
///
/// Dimensions are fixed at construction. Both the editable cutout and the read-only original
/// image use this type; the editor session guarantees they share dimensions.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    dims: Dimensions,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA8 bytes. `data.len()` must equal `width * height * 4`.
    pub fn new(dims: Dimensions, data: Vec<u8>) -> TouchupResult<Self> {
        if dims.is_empty() {
            return Err(TouchupError::validation(format!(
                "pixel buffer must be non-empty, got {dims}"
            )));
        }
        let expected = dims.rgba_len()?;
        if data.len() != expected {
            return Err(TouchupError::validation(format!(
                "pixel buffer {dims} expects {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self { dims, data })
    }

    /// Create a buffer where every pixel is `rgba`.
    pub fn filled(dims: Dimensions, rgba: Rgba8) -> TouchupResult<Self> {
        let len = dims.rgba_len()?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..dims.pixel_count() {
            data.extend_from_slice(&rgba);
        }
        Self::new(dims, data)
    }

    /// Take ownership of an `image` crate RGBA buffer.
    pub fn from_rgba_image(img: image::RgbaImage) -> TouchupResult<Self> {
        let (width, height) = img.dimensions();
        Self::new(Dimensions::new(width, height), img.into_raw())
    }

    /// Copy into an `image` crate RGBA buffer.
    pub fn to_rgba_image(&self) -> TouchupResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.dims.width, self.dims.height, self.data.clone())
            .ok_or_else(|| TouchupError::validation("rgba image size mismatch"))
    }

    /// Pixel dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.dims.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.dims.height
    }

    /// Borrow the raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its raw RGBA8 bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Read pixel `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let i = self.index(x, y)?;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Alpha of pixel `(x, y)`, or `None` when out of bounds.
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        self.pixel(x, y).map(|p| p[3])
    }

    /// Overwrite pixel `(x, y)`. Returns `false` when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: Rgba8) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.data[i..i + 4].copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    /// Clear the alpha of pixel `(x, y)` to zero. Color channels are zeroed too so that the
    /// buffer stays canonical for byte comparisons.
    pub(crate) fn clear_pixel(&mut self, x: u32, y: u32) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].fill(0);
        }
    }

    /// Replace the whole pixel payload with `other`'s. Dimensions must match.
    pub fn copy_from(&mut self, other: &PixelBuffer) -> TouchupResult<()> {
        if self.dims != other.dims {
            return Err(TouchupError::DimensionMismatch {
                cutout: self.dims,
                original: other.dims,
            });
        }
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        Some(((y as usize) * (self.dims.width as usize) + (x as usize)) * 4)
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("dims", &self.dims)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
