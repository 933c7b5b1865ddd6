//! Pointer state machine: `Idle -> Stroking -> Idle`.
//!
//! Pointer-down captures the layout mapping, snapshots the buffer for undo and paints the first
//! sample. Moves interpolate from the previous sample. Up/leave commits the stroke and starts a
//! background export of the committed buffer.

use std::sync::Arc;

use crate::config::ResizePolicy;
use crate::foundation::core::Rect;
use crate::foundation::error::{TouchupError, TouchupResult};
use crate::geometry::mapper::CoordinateMapper;
use crate::input::event::{PlatformEvent, PointerEvent, PointerSample};
use crate::raster::export::ExportJob;
use crate::session::editor::EditorSession;
use crate::stroke::brush::{BrushMode, Stroke};

/// Holds the active stroke, if any.
#[derive(Debug, Default)]
pub struct InputController {
    stroke: Option<Stroke>,
}

impl InputController {
    /// Return `true` between pointer-down and pointer-up.
    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    /// The stroke in progress.
    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }

    pub(crate) fn take_stroke(&mut self) -> Option<Stroke> {
        self.stroke.take()
    }
}

/// Summary of a committed stroke.
#[derive(Debug)]
pub struct StrokeOutcome {
    /// Brush mode of the stroke.
    pub mode: BrushMode,
    /// Brush radius in buffer units.
    pub radius: f64,
    /// Number of pointer samples processed.
    pub samples: usize,
    /// Buffer-space bounds of all touched pixels.
    pub dirty: Option<Rect>,
    /// Background PNG encode of the committed buffer, when one was requested.
    pub export: Option<ExportJob>,
}

/// What a pointer event did.
#[derive(Debug)]
pub enum InputOutcome {
    /// The event was not valid in the current state and changed nothing.
    Ignored,
    /// A stroke began and its first sample was painted.
    StrokeStarted,
    /// A sample was added to the active stroke.
    StrokeExtended,
    /// The active stroke was committed.
    StrokeCommitted(StrokeOutcome),
}

impl EditorSession {
    /// The pointer state machine.
    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// Return `true` while a stroke is in progress.
    pub fn is_stroking(&self) -> bool {
        self.input.is_stroking()
    }

    /// Report the on-screen container rectangle the buffer is aspect-fitted into.
    ///
    /// A stroke in progress keeps its original mapping under [`ResizePolicy::KeepStroke`]; under
    /// [`ResizePolicy::EndStroke`] it is committed and its outcome returned.
    pub fn set_container(&mut self, container: Rect) -> TouchupResult<Option<StrokeOutcome>> {
        let changed = self.container != Some(container);
        self.container = Some(container);
        if changed
            && self.input.is_stroking()
            && self.config.resize_policy == ResizePolicy::EndStroke
        {
            tracing::debug!("layout changed mid-stroke; committing stroke");
            return self.end_stroke().map(Some);
        }
        Ok(None)
    }

    /// Feed a raw platform event through the normalizing adapter.
    pub fn handle_platform_event(&mut self, event: &PlatformEvent) -> TouchupResult<InputOutcome> {
        match event.normalize() {
            Some(ev) => self.handle_pointer(ev),
            None => Ok(InputOutcome::Ignored),
        }
    }

    /// Drive the state machine with a normalized pointer event.
    ///
    /// Events that are invalid for the current state (a move while idle, a second pointer-down
    /// while stroking, pointer-down before any layout) are ignored rather than treated as errors.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> TouchupResult<InputOutcome> {
        match (event, self.input.is_stroking()) {
            (PointerEvent::Down(sample), false) => {
                if self.mapper_for_current_layout().is_err() {
                    tracing::warn!("pointer-down ignored: no usable layout");
                    return Ok(InputOutcome::Ignored);
                }
                self.begin_stroke(sample)?;
                Ok(InputOutcome::StrokeStarted)
            }
            (PointerEvent::Move(sample), true) => {
                self.extend_stroke(sample)?;
                Ok(InputOutcome::StrokeExtended)
            }
            (PointerEvent::Up | PointerEvent::Leave, true) => {
                Ok(InputOutcome::StrokeCommitted(self.end_stroke()?))
            }
            _ => Ok(InputOutcome::Ignored),
        }
    }

    /// Start a stroke at `sample` (display space).
    ///
    /// Captures the layout mapping for the whole stroke, pushes an undo snapshot of the current
    /// buffer and paints the first sample.
    #[tracing::instrument(skip(self), fields(mode = %self.mode))]
    pub fn begin_stroke(&mut self, sample: PointerSample) -> TouchupResult<()> {
        if self.input.is_stroking() {
            return Err(TouchupError::invalid_state("a stroke is already in progress"));
        }
        let mapper = self.mapper_for_current_layout()?;
        let radius = mapper.radius_to_buffer(self.brush_radius);

        // Idle implies `current == buffer`, so the committed snapshot doubles as the undo entry.
        if self.undo.push(Arc::clone(&self.current)).is_some() {
            tracing::trace!(cap = self.undo.cap(), "oldest undo snapshot dropped");
        }

        tracing::debug!(radius, "stroke started");
        self.input.stroke = Some(Stroke::begin(self.mode, radius, mapper));
        self.paint(sample)
    }

    /// Add a display-space sample to the active stroke.
    pub fn extend_stroke(&mut self, sample: PointerSample) -> TouchupResult<()> {
        if !self.input.is_stroking() {
            return Err(TouchupError::invalid_state("no stroke in progress"));
        }
        self.paint(sample)
    }

    /// Commit the active stroke and start a background export of the result.
    pub fn end_stroke(&mut self) -> TouchupResult<StrokeOutcome> {
        let Some(mut outcome) = self.commit_active_stroke() else {
            return Err(TouchupError::invalid_state("no stroke in progress"));
        };
        outcome.export = Some(ExportJob::spawn(Arc::clone(&self.current))?);
        Ok(outcome)
    }

    /// Commit without exporting. Returns `None` when idle.
    pub(crate) fn commit_active_stroke(&mut self) -> Option<StrokeOutcome> {
        let stroke = self.input.take_stroke()?;
        self.current = Arc::new(self.buffer.clone());
        tracing::debug!(
            mode = %stroke.mode(),
            samples = stroke.samples(),
            "stroke committed"
        );
        Some(StrokeOutcome {
            mode: stroke.mode(),
            radius: stroke.radius(),
            samples: stroke.samples(),
            dirty: stroke.dirty(),
            export: None,
        })
    }

    fn mapper_for_current_layout(&self) -> TouchupResult<CoordinateMapper> {
        let container = self
            .container
            .ok_or_else(|| TouchupError::invalid_state("no container layout reported"))?;
        CoordinateMapper::new(container, self.buffer.dimensions())
    }

    fn paint(&mut self, sample: PointerSample) -> TouchupResult<()> {
        let Some(stroke) = self.input.stroke.as_mut() else {
            return Err(TouchupError::invalid_state("no stroke in progress"));
        };
        let point = stroke.mapper().to_buffer(sample.to_point());
        let previous = stroke.push(point);
        let bounds = self.buffer.dimensions().to_size().to_rect();
        let segment =
            self.interpolator
                .segment(stroke.mode(), stroke.radius(), previous, point, bounds);
        if let Some(dirty) = self
            .compositor
            .apply(&mut self.buffer, &self.source, &segment)
        {
            tracing::trace!(?dirty, "segment composited");
            stroke.mark_dirty(dirty);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/input.rs"]
mod tests;
