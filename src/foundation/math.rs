use std::ops::Range;

use crate::foundation::core::{Point, Rect};

/// Center of the integer pixel `(x, y)` in buffer space.
pub(crate) fn pixel_center(x: u32, y: u32) -> Point {
    Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
}

/// Squared distance from `p` to the closed segment `a..b`.
///
/// Degenerate segments (`a == b`) measure the distance to `a`.
pub(crate) fn distance_sq_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.hypot2();
    if len_sq <= f64::EPSILON {
        return (p - a).hypot2();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).hypot2()
}

/// Integer pixel indices whose centers can fall inside `[lo, hi]`, clamped to `0..limit`.
pub(crate) fn pixel_span(lo: f64, hi: f64, limit: u32) -> Range<u32> {
    if !(lo.is_finite() && hi.is_finite()) || hi < lo {
        return 0..0;
    }
    // center = i + 0.5 must satisfy lo <= center <= hi
    let start = (lo - 0.5).ceil().max(0.0);
    let end = ((hi - 0.5).floor() + 1.0).min(f64::from(limit));
    if end <= start {
        return 0..0;
    }
    (start as u32)..(end as u32)
}

/// Integer pixel indices whose centers fall inside the half-open `[lo, hi)`, clamped to
/// `0..limit`. A span of width `w` never selects more than `ceil(w)` pixels.
pub(crate) fn pixel_span_half_open(lo: f64, hi: f64, limit: u32) -> Range<u32> {
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo {
        return 0..0;
    }
    // lo <= i + 0.5 < hi
    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).ceil().min(f64::from(limit));
    if end <= start {
        return 0..0;
    }
    (start as u32)..(end as u32)
}

/// Portion of the segment `a..b` that lies inside `rect` (Liang-Barsky), or `None` when the
/// segment misses it or is not finite.
pub(crate) fn clip_segment(a: Point, b: Point, rect: Rect) -> Option<(Point, Point)> {
    let d = b - a;
    if !(a.is_finite() && d.x.is_finite() && d.y.is_finite()) {
        return None;
    }
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-d.x, a.x - rect.x0),
        (d.x, rect.x1 - a.x),
        (-d.y, a.y - rect.y0),
        (d.y, rect.y1 - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((a + d * t0, a + d * t1))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
