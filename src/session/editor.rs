use std::sync::Arc;

use crate::config::EditorConfig;
use crate::foundation::core::{Dimensions, Rect};
use crate::foundation::error::{TouchupError, TouchupResult};
use crate::input::event::{EditorCommand, KeyInput};
use crate::raster::buffer::PixelBuffer;
use crate::raster::decode::decode_image;
use crate::raster::export::encode_png;
use crate::session::input::InputController;
use crate::session::undo::UndoManager;
use crate::stroke::brush::BrushMode;
use crate::stroke::composite::BrushCompositor;
use crate::stroke::interpolate::StrokeInterpolator;

/// One touch-up editing session over an AI cutout and its original image.
///
/// The session exclusively owns the editable buffer and the undo history; the original image is
/// shared read-only. Input is single-threaded: every event is applied to completion before the
/// next one is accepted.
///
/// While no stroke is active, `current` always holds a snapshot equal to `buffer`.
pub struct EditorSession {
    pub(crate) config: EditorConfig,
    pub(crate) buffer: PixelBuffer,
    pub(crate) source: Arc<PixelBuffer>,
    pub(crate) current: Arc<PixelBuffer>,
    pub(crate) undo: UndoManager,
    pub(crate) interpolator: StrokeInterpolator,
    pub(crate) compositor: BrushCompositor,
    pub(crate) input: InputController,
    pub(crate) mode: BrushMode,
    pub(crate) brush_radius: f64,
    pub(crate) container: Option<Rect>,
    pub(crate) focused: bool,
}

impl EditorSession {
    /// Start a session from decoded rasters.
    ///
    /// Fails with [`TouchupError::DimensionMismatch`] when the two rasters differ in size. The
    /// unedited cutout is pushed as the first undo snapshot.
    #[tracing::instrument(skip_all, fields(cutout = %cutout.dimensions()))]
    pub fn new(
        cutout: PixelBuffer,
        original: impl Into<Arc<PixelBuffer>>,
        config: EditorConfig,
    ) -> TouchupResult<Self> {
        config.validate()?;
        let source = original.into();
        if cutout.dimensions() != source.dimensions() {
            return Err(TouchupError::DimensionMismatch {
                cutout: cutout.dimensions(),
                original: source.dimensions(),
            });
        }

        let mut undo = UndoManager::new(config.undo_cap)?;
        let current = Arc::new(cutout.clone());
        undo.push(Arc::clone(&current));

        tracing::debug!(undo_cap = config.undo_cap, "editor session started");
        Ok(Self {
            interpolator: StrokeInterpolator::new(config.restore_spacing_divisor),
            compositor: BrushCompositor,
            input: InputController::default(),
            mode: config.initial_mode,
            brush_radius: config.brush_radius,
            container: None,
            focused: true,
            buffer: cutout,
            source,
            current,
            undo,
            config,
        })
    }

    /// Decode both rasters and start a session. Both must decode before any input is accepted.
    pub fn from_encoded(
        cutout: &[u8],
        original: &[u8],
        config: EditorConfig,
    ) -> TouchupResult<Self> {
        let cutout = decode_image(cutout).map_err(|e| label_decode_error("cutout", e))?;
        let original = decode_image(original).map_err(|e| label_decode_error("original", e))?;
        Self::new(cutout, original, config)
    }

    /// Buffer dimensions, fixed for the whole session.
    pub fn dimensions(&self) -> Dimensions {
        self.buffer.dimensions()
    }

    /// The live editable buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// The read-only original image.
    pub fn source(&self) -> &Arc<PixelBuffer> {
        &self.source
    }

    /// The most recently committed result (after the last stroke end or undo).
    pub fn current_result(&self) -> Arc<PixelBuffer> {
        Arc::clone(&self.current)
    }

    /// Active configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Current brush mode.
    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    /// Select the brush mode used by the next stroke.
    pub fn set_mode(&mut self, mode: BrushMode) {
        if self.mode != mode {
            tracing::debug!(%mode, "brush mode changed");
        }
        self.mode = mode;
    }

    /// Flip between erase and restore.
    pub fn toggle_mode(&mut self) -> BrushMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Brush radius in display units.
    pub fn brush_radius(&self) -> f64 {
        self.brush_radius
    }

    /// Set the display-space brush radius, clamped to the configured range. Returns the value
    /// actually applied. Takes effect at the next stroke start.
    pub fn set_brush_radius(&mut self, radius: f64) -> f64 {
        self.brush_radius = self.config.clamp_radius(radius);
        self.brush_radius
    }

    /// Whether keyboard shortcuts are accepted.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Mark the editor as focused or not. Shortcuts are ignored while unfocused.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// The current on-screen container, if a layout has been reported.
    pub fn container(&self) -> Option<Rect> {
        self.container
    }

    /// Number of undo snapshots available.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Revert to the newest undo snapshot. Returns `false` when there was nothing to undo.
    ///
    /// An active stroke is abandoned first, so undo during a stroke reverts that stroke.
    #[tracing::instrument(skip(self), fields(depth = self.undo.len()))]
    pub fn undo(&mut self) -> bool {
        if let Some(stroke) = self.input.take_stroke() {
            tracing::debug!(mode = %stroke.mode(), "stroke abandoned by undo");
        }
        let Some(snapshot) = self.undo.pop() else {
            tracing::debug!("undo stack empty");
            return false;
        };
        self.buffer = (*snapshot).clone();
        self.current = snapshot;
        true
    }

    /// Apply a keyboard shortcut. Returns the executed command, or `None` when the key is
    /// unbound or the editor is not focused.
    pub fn handle_key(&mut self, key: KeyInput) -> Option<EditorCommand> {
        if !self.focused {
            return None;
        }
        let cmd = key.command()?;
        match cmd {
            EditorCommand::Undo => {
                self.undo();
            }
            EditorCommand::SetMode(mode) => self.set_mode(mode),
        }
        Some(cmd)
    }

    /// Encode the live buffer as PNG, committing an active stroke first.
    ///
    /// On failure the buffer is untouched and the call can be retried.
    pub fn export_png(&mut self) -> TouchupResult<Vec<u8>> {
        self.commit_active_stroke();
        encode_png(&self.buffer)
    }

    /// End the session, discarding the undo history and returning the final buffer.
    pub fn finish(mut self) -> PixelBuffer {
        self.commit_active_stroke();
        self.undo.clear();
        tracing::debug!(dims = %self.buffer.dimensions(), "editor session finished");
        self.buffer
    }
}

fn label_decode_error(which: &str, err: TouchupError) -> TouchupError {
    match err {
        TouchupError::Decode(msg) => TouchupError::decode(format!("{which}: {msg}")),
        other => other,
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("dims", &self.buffer.dimensions())
            .field("mode", &self.mode)
            .field("brush_radius", &self.brush_radius)
            .field("undo_depth", &self.undo.len())
            .field("stroking", &self.input.is_stroking())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/editor.rs"]
mod tests;
