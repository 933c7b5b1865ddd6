use crate::foundation::error::{TouchupError, TouchupResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Pixel dimensions of a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create a dimensions value. Zero extents are allowed here; buffers validate on construction.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `true` when either extent is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width divided by height.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Number of pixels.
    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Length of a tightly packed RGBA8 buffer with these dimensions.
    pub fn rgba_len(self) -> TouchupResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| TouchupError::validation("rgba buffer size overflow"))
    }

    /// Dimensions as a floating-point `Size`.
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Return `true` when the integer pixel `(x, y)` lies inside the raster.
    pub fn contains(self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
