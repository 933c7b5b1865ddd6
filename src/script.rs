//! JSON-described replay of editor input.
//!
//! A script names the on-screen container and an ordered list of steps (pointer events, key
//! presses, brush changes, layout changes). Replaying it against an [`EditorSession`] reproduces
//! an interactive touch-up headlessly.

use std::path::Path;

use anyhow::Context;

use crate::config::EditorConfig;
use crate::foundation::core::Rect;
use crate::foundation::error::{TouchupError, TouchupResult};
use crate::input::event::{KeyInput, Modifiers, PlatformEvent, PointerEvent, PointerSample};
use crate::session::editor::EditorSession;
use crate::session::input::InputOutcome;
use crate::stroke::brush::BrushMode;

/// On-screen container rectangle in display space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContainerSpec {
    /// Left edge.
    #[serde(default)]
    pub x: f64,
    /// Top edge.
    #[serde(default)]
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl ContainerSpec {
    /// The container as a `kurbo` rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// One replay step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Pointer pressed at display `(x, y)`.
    Down {
        /// Horizontal display coordinate.
        x: f64,
        /// Vertical display coordinate.
        y: f64,
    },
    /// Pointer moved to display `(x, y)`.
    Move {
        /// Horizontal display coordinate.
        x: f64,
        /// Vertical display coordinate.
        y: f64,
    },
    /// Pointer released.
    Up,
    /// Pointer left the surface.
    Leave,
    /// Raw platform event (mouse or touch).
    Event {
        /// The event to normalize and feed.
        event: PlatformEvent,
    },
    /// Key press.
    Key {
        /// Character produced.
        key: char,
        /// Held modifiers.
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Select brush mode.
    Mode {
        /// New mode.
        mode: BrushMode,
    },
    /// Set display-space brush radius.
    Radius {
        /// New radius (clamped by config).
        radius: f64,
    },
    /// Report a new container layout.
    Resize {
        /// New container.
        container: ContainerSpec,
    },
    /// Undo the last stroke.
    Undo,
    /// Focus or blur the editor.
    Focus {
        /// Whether shortcuts are accepted.
        focused: bool,
    },
}

/// A complete replay script.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditScript {
    /// Initial container layout.
    pub container: ContainerSpec,
    /// Editor configuration; defaults apply when absent.
    #[serde(default)]
    pub config: Option<EditorConfig>,
    /// Steps in order.
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

/// Counters collected while replaying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Steps processed.
    pub steps: usize,
    /// Strokes committed (by up/leave or a forced resize commit).
    pub strokes: usize,
    /// Undo requests that reverted a snapshot.
    pub undos: usize,
    /// Pointer events ignored by the state machine.
    pub ignored: usize,
}

impl EditScript {
    /// Parse a script from JSON.
    pub fn from_json_str(s: &str) -> TouchupResult<Self> {
        let script: Self = serde_json::from_str(s)
            .map_err(|e| TouchupError::validation(format!("invalid edit script: {e}")))?;
        if let Some(cfg) = &script.config {
            cfg.validate()?;
        }
        Ok(script)
    }

    /// Read and parse a script file.
    pub fn from_path(path: &Path) -> TouchupResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read edit script '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// The script's configuration, or the defaults.
    pub fn editor_config(&self) -> EditorConfig {
        self.config.clone().unwrap_or_default()
    }

    /// Replay every step against `session`. An active stroke at the end is left open.
    #[tracing::instrument(skip_all, fields(steps = self.steps.len()))]
    pub fn apply(&self, session: &mut EditorSession) -> TouchupResult<ReplayReport> {
        let mut report = ReplayReport::default();
        if session.set_container(self.container.to_rect())?.is_some() {
            report.strokes += 1;
        }

        for step in &self.steps {
            report.steps += 1;
            let outcome = match step {
                ScriptStep::Down { x, y } => {
                    session.handle_pointer(PointerEvent::Down(PointerSample::new(*x, *y)))?
                }
                ScriptStep::Move { x, y } => {
                    session.handle_pointer(PointerEvent::Move(PointerSample::new(*x, *y)))?
                }
                ScriptStep::Up => session.handle_pointer(PointerEvent::Up)?,
                ScriptStep::Leave => session.handle_pointer(PointerEvent::Leave)?,
                ScriptStep::Event { event } => session.handle_platform_event(event)?,
                ScriptStep::Key { key, modifiers } => {
                    let depth = session.undo_depth();
                    session.handle_key(KeyInput {
                        key: *key,
                        modifiers: *modifiers,
                    });
                    if session.undo_depth() < depth {
                        report.undos += 1;
                    }
                    continue;
                }
                ScriptStep::Mode { mode } => {
                    session.set_mode(*mode);
                    continue;
                }
                ScriptStep::Radius { radius } => {
                    session.set_brush_radius(*radius);
                    continue;
                }
                ScriptStep::Resize { container } => {
                    if session.set_container(container.to_rect())?.is_some() {
                        report.strokes += 1;
                    }
                    continue;
                }
                ScriptStep::Undo => {
                    if session.undo() {
                        report.undos += 1;
                    }
                    continue;
                }
                ScriptStep::Focus { focused } => {
                    session.set_focused(*focused);
                    continue;
                }
            };

            match outcome {
                InputOutcome::Ignored => report.ignored += 1,
                InputOutcome::StrokeCommitted(_) => report.strokes += 1,
                InputOutcome::StrokeStarted | InputOutcome::StrokeExtended => {}
            }
        }

        tracing::debug!(?report, "script replayed");
        Ok(report)
    }
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;
