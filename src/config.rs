use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{TouchupError, TouchupResult};
use crate::session::undo::DEFAULT_UNDO_CAP;
use crate::stroke::brush::BrushMode;
use crate::stroke::interpolate::DEFAULT_SPACING_DIVISOR;

/// What happens to an in-progress stroke when the container layout changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Keep mapping the stroke with the layout captured at pointer-down.
    #[default]
    KeepStroke,
    /// Commit the stroke immediately; the next pointer-down uses the new layout.
    EndStroke,
}

/// Editor tuning knobs, loadable from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Maximum number of undo snapshots.
    pub undo_cap: usize,
    /// Initial brush radius in display units.
    pub brush_radius: f64,
    /// Smallest allowed brush radius in display units.
    pub min_brush_radius: f64,
    /// Largest allowed brush radius in display units.
    pub max_brush_radius: f64,
    /// Brush mode when the session starts.
    pub initial_mode: BrushMode,
    /// Restore stamps are placed every `diameter / restore_spacing_divisor`.
    pub restore_spacing_divisor: f64,
    /// Layout-change behavior during a stroke.
    pub resize_policy: ResizePolicy,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            undo_cap: DEFAULT_UNDO_CAP,
            brush_radius: 20.0,
            min_brush_radius: 1.0,
            max_brush_radius: 200.0,
            initial_mode: BrushMode::Erase,
            restore_spacing_divisor: DEFAULT_SPACING_DIVISOR,
            resize_policy: ResizePolicy::KeepStroke,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> TouchupResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| TouchupError::validation(format!("invalid editor config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> TouchupResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> TouchupResult<()> {
        if self.undo_cap == 0 {
            return Err(TouchupError::validation("undo_cap must be >= 1"));
        }
        if !(self.min_brush_radius.is_finite() && self.min_brush_radius > 0.0) {
            return Err(TouchupError::validation(
                "min_brush_radius must be finite and > 0",
            ));
        }
        if !self.max_brush_radius.is_finite() || self.max_brush_radius < self.min_brush_radius {
            return Err(TouchupError::validation(
                "max_brush_radius must be finite and >= min_brush_radius",
            ));
        }
        if !(self.min_brush_radius..=self.max_brush_radius).contains(&self.brush_radius) {
            return Err(TouchupError::validation(format!(
                "brush_radius {} outside [{}, {}]",
                self.brush_radius, self.min_brush_radius, self.max_brush_radius
            )));
        }
        if !(self.restore_spacing_divisor.is_finite() && self.restore_spacing_divisor > 0.0) {
            return Err(TouchupError::validation(
                "restore_spacing_divisor must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Clamp a requested display-space radius into the configured range.
    pub fn clamp_radius(&self, radius: f64) -> f64 {
        if radius.is_nan() {
            return self.min_brush_radius;
        }
        radius.clamp(self.min_brush_radius, self.max_brush_radius)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
