use super::*;
use crate::foundation::core::Dimensions;
use crate::raster::buffer::PixelBuffer;

fn opaque(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::filled(Dimensions::new(width, height), [40, 80, 120, 255]).unwrap()
}

fn session(script: &EditScript) -> EditorSession {
    let src = opaque(4, 4);
    EditorSession::new(src.clone(), src, script.editor_config()).unwrap()
}

#[test]
fn parses_tagged_steps() {
    let script = EditScript::from_json_str(
        r#"{
            "container": { "width": 4, "height": 4 },
            "steps": [
                { "op": "radius", "radius": 1 },
                { "op": "down", "x": 2, "y": 2 },
                { "op": "move", "x": 3, "y": 2 },
                { "op": "up" },
                { "op": "key", "key": "z", "modifiers": { "ctrl": true } },
                { "op": "mode", "mode": "restore" },
                { "op": "resize", "container": { "x": 10, "y": 0, "width": 8, "height": 8 } },
                { "op": "event", "event": { "kind": "mouse_leave" } },
                { "op": "focus", "focused": false },
                { "op": "undo" }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(script.steps.len(), 10);
    assert_eq!(script.container.to_rect(), Rect::new(0.0, 0.0, 4.0, 4.0));
    assert_eq!(
        script.steps[5],
        ScriptStep::Mode {
            mode: BrushMode::Restore
        }
    );
    assert!(script.config.is_none());
}

#[test]
fn rejects_unknown_ops_and_bad_config() {
    assert!(EditScript::from_json_str(r#"{"container":{"width":1,"height":1},"steps":[{"op":"paint"}]}"#).is_err());
    let err = EditScript::from_json_str(
        r#"{"container":{"width":1,"height":1},"config":{"undo_cap":0}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, TouchupError::Validation(_)));
}

#[test]
fn replay_erases_then_restores() {
    let script = EditScript::from_json_str(
        r#"{
            "container": { "width": 4, "height": 4 },
            "steps": [
                { "op": "radius", "radius": 1 },
                { "op": "down", "x": 2, "y": 2 },
                { "op": "up" },
                { "op": "key", "key": "r" },
                { "op": "down", "x": 2, "y": 2 },
                { "op": "up" }
            ]
        }"#,
    )
    .unwrap();
    let mut s = session(&script);
    let report = script.apply(&mut s).unwrap();
    assert_eq!(report.steps, 6);
    assert_eq!(report.strokes, 2);
    assert_eq!(report.ignored, 0);
    assert_eq!(s.mode(), BrushMode::Restore);
    assert_eq!(s.buffer().alpha(2, 2), Some(255));
    assert_eq!(s.undo_depth(), 3);
}

#[test]
fn replay_counts_undos_and_ignored_events() {
    let script = EditScript::from_json_str(
        r#"{
            "container": { "width": 4, "height": 4 },
            "steps": [
                { "op": "up" },
                { "op": "radius", "radius": 1 },
                { "op": "down", "x": 2, "y": 2 },
                { "op": "leave" },
                { "op": "key", "key": "z", "modifiers": { "meta": true } },
                { "op": "undo" },
                { "op": "undo" }
            ]
        }"#,
    )
    .unwrap();
    let mut s = session(&script);
    let report = script.apply(&mut s).unwrap();
    assert_eq!(report.ignored, 1);
    assert_eq!(report.strokes, 1);
    // Two effective undos: the stroke, then the initial snapshot. The third is a no-op.
    assert_eq!(report.undos, 2);
    assert_eq!(s.buffer().alpha(2, 2), Some(255));
}

#[test]
fn unfocused_keys_are_dropped() {
    let script = EditScript::from_json_str(
        r#"{
            "container": { "width": 4, "height": 4 },
            "steps": [
                { "op": "focus", "focused": false },
                { "op": "key", "key": "r" }
            ]
        }"#,
    )
    .unwrap();
    let mut s = session(&script);
    script.apply(&mut s).unwrap();
    assert_eq!(s.mode(), BrushMode::Erase);
}
