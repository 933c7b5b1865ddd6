/// The editor session.
pub mod editor;
/// Pointer state machine.
pub mod input;
/// Bounded snapshot history.
pub mod undo;
