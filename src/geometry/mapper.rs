use crate::foundation::core::{Dimensions, Point, Rect, Vec2};
use crate::foundation::error::{TouchupError, TouchupResult};

/// Aspect-fit (letterbox) placement of a buffer inside an on-screen container.
///
/// All lengths are in display space. `offset_x`/`offset_y` are measured from the container's
/// top-left corner (`origin`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplayRect {
    /// Top-left corner of the container in display space.
    pub origin: Point,
    /// Display pixels per buffer pixel.
    pub scale: f64,
    /// Horizontal letterbox padding.
    pub offset_x: f64,
    /// Vertical letterbox padding.
    pub offset_y: f64,
    /// Rendered width of the buffer.
    pub render_width: f64,
    /// Rendered height of the buffer.
    pub render_height: f64,
}

impl DisplayRect {
    /// Fit `buffer` inside `container`, preserving aspect ratio and centering the remainder.
    ///
    /// A buffer wider (relative to its height) than the container fills the width and is padded
    /// vertically; otherwise it fills the height and is padded horizontally.
    pub fn fit(container: Rect, buffer: Dimensions) -> TouchupResult<Self> {
        let cw = container.width();
        let ch = container.height();
        if !(cw.is_finite() && ch.is_finite()) || cw <= 0.0 || ch <= 0.0 {
            return Err(TouchupError::validation(format!(
                "container must have positive area, got {cw}x{ch}"
            )));
        }
        if buffer.is_empty() {
            return Err(TouchupError::validation("buffer must be non-empty"));
        }

        let buffer_aspect = buffer.aspect();
        let container_aspect = cw / ch;

        let (render_width, render_height, offset_x, offset_y) = if buffer_aspect > container_aspect
        {
            let rh = cw / buffer_aspect;
            (cw, rh, 0.0, (ch - rh) / 2.0)
        } else {
            let rw = ch * buffer_aspect;
            (rw, ch, (cw - rw) / 2.0, 0.0)
        };

        Ok(Self {
            origin: container.origin(),
            scale: render_width / f64::from(buffer.width),
            offset_x,
            offset_y,
            render_width,
            render_height,
        })
    }

    /// The rendered buffer area in display space.
    pub fn render_rect(&self) -> Rect {
        let min = self.origin + Vec2::new(self.offset_x, self.offset_y);
        Rect::from_origin_size(min, (self.render_width, self.render_height))
    }
}

/// Maps display-space pointer positions into buffer space for one fixed layout.
///
/// A mapper is captured once at stroke start and reused for every sample of that stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    display: DisplayRect,
    buffer: Dimensions,
}

impl CoordinateMapper {
    /// Build a mapper for `buffer` rendered into `container`.
    pub fn new(container: Rect, buffer: Dimensions) -> TouchupResult<Self> {
        Ok(Self {
            display: DisplayRect::fit(container, buffer)?,
            buffer,
        })
    }

    /// The letterbox placement this mapper was built from.
    pub fn display_rect(&self) -> DisplayRect {
        self.display
    }

    /// Buffer pixels per display pixel along x.
    pub fn visual_scale(&self) -> f64 {
        f64::from(self.buffer.width) / self.display.render_width
    }

    /// Convert a display-space point into buffer space.
    pub fn to_buffer(&self, client: Point) -> Point {
        let d = &self.display;
        let sx = f64::from(self.buffer.width) / d.render_width;
        let sy = f64::from(self.buffer.height) / d.render_height;
        Point::new(
            (client.x - d.origin.x - d.offset_x) * sx,
            (client.y - d.origin.y - d.offset_y) * sy,
        )
    }

    /// Convert a buffer-space point back into display space.
    pub fn to_display(&self, buffer: Point) -> Point {
        let d = &self.display;
        let sx = d.render_width / f64::from(self.buffer.width);
        let sy = d.render_height / f64::from(self.buffer.height);
        Point::new(
            buffer.x * sx + d.origin.x + d.offset_x,
            buffer.y * sy + d.origin.y + d.offset_y,
        )
    }

    /// Convert a display-space brush radius into buffer units.
    pub fn radius_to_buffer(&self, display_radius: f64) -> f64 {
        display_radius * self.visual_scale()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mapper.rs"]
mod tests;
