//! Platform-neutral input types.
//!
//! Mouse and touch events are normalized into [`PointerEvent`]s carrying a single
//! [`PointerSample`]; the geometry and compositing code never sees platform event types.

use crate::foundation::core::Point;
use crate::stroke::brush::BrushMode;

/// One pointer position in display space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerSample {
    /// Horizontal display coordinate.
    pub x: f64,
    /// Vertical display coordinate.
    pub y: f64,
}

impl PointerSample {
    /// Create a sample at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The sample as a `kurbo` point.
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Normalized pointer lifecycle event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed / first touch.
    Down(PointerSample),
    /// Pointer moved while pressed.
    Move(PointerSample),
    /// Pointer released / last touch lifted.
    Up,
    /// Pointer left the editing surface.
    Leave,
}

/// A single active touch.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TouchPoint {
    /// Platform touch identifier.
    #[serde(default)]
    pub id: u64,
    /// Horizontal display coordinate.
    pub x: f64,
    /// Vertical display coordinate.
    pub y: f64,
}

/// Raw events as delivered by a windowing or browser layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlatformEvent {
    /// Mouse button pressed.
    MouseDown {
        /// Horizontal display coordinate.
        x: f64,
        /// Vertical display coordinate.
        y: f64,
    },
    /// Mouse moved.
    MouseMove {
        /// Horizontal display coordinate.
        x: f64,
        /// Vertical display coordinate.
        y: f64,
    },
    /// Mouse button released.
    MouseUp,
    /// Mouse left the editing surface.
    MouseLeave,
    /// One or more touches began.
    TouchStart {
        /// Touches currently on the surface.
        touches: Vec<TouchPoint>,
    },
    /// Touches moved.
    TouchMove {
        /// Touches currently on the surface.
        touches: Vec<TouchPoint>,
    },
    /// A touch ended; `touches` lists the ones still down.
    TouchEnd {
        /// Touches still on the surface.
        #[serde(default)]
        touches: Vec<TouchPoint>,
    },
    /// The platform cancelled all touches.
    TouchCancel,
}

impl PlatformEvent {
    /// Normalize into a [`PointerEvent`]. Multi-touch follows the first listed touch.
    ///
    /// Returns `None` for events that carry no pointer information (e.g. an empty touch list).
    pub fn normalize(&self) -> Option<PointerEvent> {
        fn first(touches: &[TouchPoint]) -> Option<PointerSample> {
            touches.first().map(|t| PointerSample::new(t.x, t.y))
        }

        match self {
            Self::MouseDown { x, y } => Some(PointerEvent::Down(PointerSample::new(*x, *y))),
            Self::MouseMove { x, y } => Some(PointerEvent::Move(PointerSample::new(*x, *y))),
            Self::MouseUp => Some(PointerEvent::Up),
            Self::MouseLeave => Some(PointerEvent::Leave),
            Self::TouchStart { touches } => first(touches).map(PointerEvent::Down),
            Self::TouchMove { touches } => first(touches).map(PointerEvent::Move),
            Self::TouchEnd { touches } if touches.is_empty() => Some(PointerEvent::Up),
            Self::TouchEnd { .. } => None,
            Self::TouchCancel => Some(PointerEvent::Up),
        }
    }
}

/// Keyboard modifier state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Control key.
    pub ctrl: bool,
    /// Command / Windows key.
    pub meta: bool,
    /// Shift key.
    pub shift: bool,
    /// Alt / Option key.
    pub alt: bool,
}

impl Modifiers {
    /// Return `true` when no modifier is held.
    pub fn is_bare(self) -> bool {
        !(self.ctrl || self.meta || self.shift || self.alt)
    }

    /// Return `true` when the platform "command" modifier (ctrl or meta) is held.
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A key press as the editor sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KeyInput {
    /// Character produced by the key.
    pub key: char,
    /// Modifiers held during the press.
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// A key press without modifiers.
    pub fn bare(key: char) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// A key press with ctrl held.
    pub fn ctrl(key: char) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        }
    }

    /// Editor command bound to this key press, if any.
    ///
    /// `ctrl+z` / `meta+z` undo; bare `e` / `r` select erase / restore.
    pub fn command(self) -> Option<EditorCommand> {
        let m = self.modifiers;
        match self.key.to_ascii_lowercase() {
            'z' if m.command() && !m.shift && !m.alt => Some(EditorCommand::Undo),
            'e' if m.is_bare() => Some(EditorCommand::SetMode(BrushMode::Erase)),
            'r' if m.is_bare() => Some(EditorCommand::SetMode(BrushMode::Restore)),
            _ => None,
        }
    }
}

/// Commands reachable from keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    /// Undo the last stroke.
    Undo,
    /// Switch brush mode.
    SetMode(BrushMode),
}

#[cfg(test)]
#[path = "../../tests/unit/input/event.rs"]
mod tests;
