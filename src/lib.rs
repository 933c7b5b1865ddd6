//! Touchup is the headless core of an interactive alpha-mask touch-up editor.
//!
//! An AI background remover produces a cutout with a straight alpha channel; the editor lets a
//! user paint over it with two brushes:
//!
//! - Erase clears alpha under the brush
//! - Restore copies pixels back from the original image
//!
//! The public API is session-oriented. Create an [`EditorSession`] from the cutout and the
//! original, report the on-screen container with [`EditorSession::set_container`], then feed
//! pointer and key events. Each committed stroke yields a background PNG export of the result.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Editor configuration.
pub mod config;
/// Shared value types, math helpers and errors.
pub mod foundation;
/// Display-to-buffer coordinate mapping.
pub mod geometry;
/// Pointer, touch and keyboard events.
pub mod input;
/// RGBA8 pixel buffers plus PNG decode and export.
pub mod raster;
/// Headless replay of recorded input.
pub mod script;
/// The editing session, its pointer state machine and undo history.
pub mod session;
/// Brush strokes: interpolation and compositing.
pub mod stroke;

pub use crate::foundation::core::{Dimensions, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{TouchupError, TouchupResult};

pub use crate::config::{EditorConfig, ResizePolicy};
pub use crate::geometry::mapper::{CoordinateMapper, DisplayRect};
pub use crate::input::event::{
    EditorCommand, KeyInput, Modifiers, PlatformEvent, PointerEvent, PointerSample, TouchPoint,
};
pub use crate::raster::buffer::{PixelBuffer, Rgba8};
pub use crate::raster::decode::{decode_image, decode_image_path};
pub use crate::raster::export::{ExportJob, encode_png};
pub use crate::script::{ContainerSpec, EditScript, ReplayReport, ScriptStep};
pub use crate::session::editor::EditorSession;
pub use crate::session::input::{InputController, InputOutcome, StrokeOutcome};
pub use crate::session::undo::UndoManager;
pub use crate::stroke::brush::{BrushMode, Stroke};
pub use crate::stroke::composite::BrushCompositor;
pub use crate::stroke::interpolate::{StrokeInterpolator, StrokeSegment};
