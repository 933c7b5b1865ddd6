use crate::foundation::core::{Point, Rect};
use crate::foundation::math::{
    distance_sq_to_segment, pixel_center, pixel_span, pixel_span_half_open,
};
use crate::raster::buffer::PixelBuffer;
use crate::stroke::interpolate::StrokeSegment;

/// Applies stroke coverage to the editable buffer.
///
/// Coverage is hard-edged: a pixel is affected when its center lies inside the brush shape.
/// The compositor never touches the source image or the undo history.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrushCompositor;

impl BrushCompositor {
    /// Apply `segment` to `target`, sampling `source` for restore stamps.
    ///
    /// Returns the buffer-space bounds of the pixels considered, or `None` when the segment lies
    /// entirely outside the buffer.
    pub fn apply(
        &self,
        target: &mut PixelBuffer,
        source: &PixelBuffer,
        segment: &StrokeSegment,
    ) -> Option<Rect> {
        match segment {
            StrokeSegment::Dot { center, radius } => erase_line(target, *center, *center, *radius),
            StrokeSegment::Line { from, to, radius } => erase_line(target, *from, *to, *radius),
            StrokeSegment::Stamps { centers, half_size } => {
                let mut dirty: Option<Rect> = None;
                for &c in centers {
                    if let Some(r) = restore_stamp(target, source, c, *half_size) {
                        dirty = Some(dirty.map_or(r, |d| d.union(r)));
                    }
                }
                dirty
            }
        }
    }
}

/// Destination-out: clear every pixel whose center is within `radius` of the segment.
fn erase_line(target: &mut PixelBuffer, from: Point, to: Point, radius: f64) -> Option<Rect> {
    if radius.is_nan() || radius <= 0.0 {
        return None;
    }
    let xs = pixel_span(
        from.x.min(to.x) - radius,
        from.x.max(to.x) + radius,
        target.width(),
    );
    let ys = pixel_span(
        from.y.min(to.y) - radius,
        from.y.max(to.y) + radius,
        target.height(),
    );
    if xs.is_empty() || ys.is_empty() {
        return None;
    }

    let r2 = radius * radius;
    for y in ys.clone() {
        for x in xs.clone() {
            if distance_sq_to_segment(pixel_center(x, y), from, to) <= r2 {
                target.clear_pixel(x, y);
            }
        }
    }
    Some(span_rect(xs, ys))
}

/// Source-over with an opaque source: overwrite a square region with source pixels.
///
/// Source coordinates are scaled by `source / target` so that differently sized sources still
/// line up.
fn restore_stamp(
    target: &mut PixelBuffer,
    source: &PixelBuffer,
    center: Point,
    half_size: f64,
) -> Option<Rect> {
    if half_size.is_nan() || half_size <= 0.0 {
        return None;
    }
    // Half-open so a stamp is never wider than its diameter.
    let xs = pixel_span_half_open(center.x - half_size, center.x + half_size, target.width());
    let ys = pixel_span_half_open(center.y - half_size, center.y + half_size, target.height());
    if xs.is_empty() || ys.is_empty() {
        return None;
    }

    let sx = f64::from(source.width()) / f64::from(target.width());
    let sy = f64::from(source.height()) / f64::from(target.height());
    let max_x = source.width() - 1;
    let max_y = source.height() - 1;

    for y in ys.clone() {
        let src_y = ((f64::from(y) + 0.5) * sy).floor().max(0.0) as u32;
        for x in xs.clone() {
            let src_x = ((f64::from(x) + 0.5) * sx).floor().max(0.0) as u32;
            if let Some(px) = source.pixel(src_x.min(max_x), src_y.min(max_y)) {
                target.set_pixel(x, y, px);
            }
        }
    }
    Some(span_rect(xs, ys))
}

fn span_rect(xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> Rect {
    Rect::new(
        f64::from(xs.start),
        f64::from(ys.start),
        f64::from(xs.end),
        f64::from(ys.end),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/composite.rs"]
mod tests;
