use crate::foundation::core::{Point, Rect};
use crate::foundation::math::clip_segment;
use crate::stroke::brush::BrushMode;

/// Default restore stamp spacing: one stamp every quarter diameter.
pub const DEFAULT_SPACING_DIVISOR: f64 = 4.0;

/// Smallest restore stamp spacing in buffer pixels.
pub const MIN_STAMP_SPACING: f64 = 1.0 / 16.0;

/// Buffer-space coverage produced for one pointer sample.
#[derive(Clone, Debug, PartialEq)]
pub enum StrokeSegment {
    /// Filled disc; the first erase sample of a stroke.
    Dot {
        /// Disc center.
        center: Point,
        /// Disc radius.
        radius: f64,
    },
    /// Round-capped, round-joined line of width `2 * radius`.
    Line {
        /// Previous sample.
        from: Point,
        /// Current sample.
        to: Point,
        /// Half the line width.
        radius: f64,
    },
    /// Square source copies of side `2 * half_size`, centered at each point.
    Stamps {
        /// Stamp centers in path order.
        centers: Vec<Point>,
        /// Half the stamp side.
        half_size: f64,
    },
}

/// Turns consecutive pointer samples into gap-free coverage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeInterpolator {
    spacing_divisor: f64,
}

impl Default for StrokeInterpolator {
    fn default() -> Self {
        Self {
            spacing_divisor: DEFAULT_SPACING_DIVISOR,
        }
    }
}

impl StrokeInterpolator {
    /// Interpolator placing restore stamps every `diameter / spacing_divisor` units.
    ///
    /// Non-positive or non-finite divisors fall back to the default.
    pub fn new(spacing_divisor: f64) -> Self {
        if spacing_divisor.is_finite() && spacing_divisor > 0.0 {
            Self { spacing_divisor }
        } else {
            Self::default()
        }
    }

    /// Coverage for `current`, continuing from `previous` when the stroke already has a sample.
    ///
    /// `bounds` is the buffer rectangle; restore stamps are only generated where they can touch it.
    pub fn segment(
        &self,
        mode: BrushMode,
        radius: f64,
        previous: Option<Point>,
        current: Point,
        bounds: Rect,
    ) -> StrokeSegment {
        match (mode, previous) {
            (BrushMode::Erase, None) => StrokeSegment::Dot {
                center: current,
                radius,
            },
            (BrushMode::Erase, Some(from)) => StrokeSegment::Line {
                from,
                to: current,
                radius,
            },
            (BrushMode::Restore, None) => StrokeSegment::Stamps {
                centers: vec![current],
                half_size: radius,
            },
            (BrushMode::Restore, Some(from)) => StrokeSegment::Stamps {
                centers: self.restore_stamps(from, current, radius * 2.0, bounds),
                half_size: radius,
            },
        }
    }

    /// Number of interpolation steps between two samples `distance` apart.
    ///
    /// Spacing never drops below [`MIN_STAMP_SPACING`].
    pub fn restore_steps(&self, distance: f64, diameter: f64) -> usize {
        let spacing = diameter / self.spacing_divisor;
        if spacing.is_nan() || spacing <= 0.0 || !distance.is_finite() {
            return 1;
        }
        ((distance / spacing.max(MIN_STAMP_SPACING)).ceil() as usize).max(1)
    }

    /// Stamp centers along `from..to`, evenly spaced at most `diameter / spacing_divisor` apart.
    ///
    /// The segment is first clipped to `bounds` grown by half a stamp; stamps beyond that
    /// cannot touch the buffer. Returns no centers when the segment misses it entirely.
    pub fn restore_stamps(
        &self,
        from: Point,
        to: Point,
        diameter: f64,
        bounds: Rect,
    ) -> Vec<Point> {
        let half = diameter / 2.0;
        let reach = if half.is_finite() && half > 0.0 {
            bounds.inflate(half, half)
        } else {
            bounds
        };
        let Some((from, to)) = clip_segment(from, to, reach) else {
            return Vec::new();
        };
        let steps = self.restore_steps(from.distance(to), diameter);
        (0..=steps)
            .map(|i| from.lerp(to, i as f64 / steps as f64))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/interpolate.rs"]
mod tests;
