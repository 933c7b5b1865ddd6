/// Normalized input events and platform adapters.
pub mod event;
