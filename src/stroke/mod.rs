/// Brush modes and the per-stroke state.
pub mod brush;
/// Applies stroke segments to a pixel buffer.
pub mod composite;
/// Turns pointer samples into paintable segments.
pub mod interpolate;
