use crate::foundation::core::{Point, Rect};
use crate::geometry::mapper::CoordinateMapper;

/// The two mutually exclusive brush operations.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BrushMode {
    /// Clear alpha under the brush.
    #[default]
    Erase,
    /// Copy original-image pixels back under the brush.
    Restore,
}

impl BrushMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Erase => Self::Restore,
            Self::Restore => Self::Erase,
        }
    }
}

impl std::fmt::Display for BrushMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Erase => "erase",
            Self::Restore => "restore",
        })
    }
}

/// One pointer-down to pointer-up gesture.
///
/// Mode, buffer-space radius and the display mapping are frozen when the stroke begins.
#[derive(Clone, Debug)]
pub struct Stroke {
    mode: BrushMode,
    radius: f64,
    mapper: CoordinateMapper,
    last: Option<Point>,
    samples: usize,
    dirty: Option<Rect>,
}

impl Stroke {
    pub(crate) fn begin(mode: BrushMode, radius: f64, mapper: CoordinateMapper) -> Self {
        Self {
            mode,
            radius,
            mapper,
            last: None,
            samples: 0,
            dirty: None,
        }
    }

    /// Brush mode for the whole stroke.
    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    /// Brush radius in buffer units.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Brush diameter in buffer units.
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Display mapping captured at stroke start.
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Number of samples recorded so far.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Most recent buffer-space sample, if any.
    pub fn last_point(&self) -> Option<Point> {
        self.last
    }

    /// Union of all buffer regions touched by this stroke.
    pub fn dirty(&self) -> Option<Rect> {
        self.dirty
    }

    /// Record a sample and return the previous one.
    pub(crate) fn push(&mut self, p: Point) -> Option<Point> {
        self.samples += 1;
        self.last.replace(p)
    }

    pub(crate) fn mark_dirty(&mut self, r: Rect) {
        self.dirty = Some(match self.dirty {
            Some(d) => d.union(r),
            None => r,
        });
    }
}
