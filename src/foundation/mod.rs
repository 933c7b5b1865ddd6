/// Dimensions and re-exported `kurbo` geometry.
pub mod core;
/// Crate error type.
pub mod error;
pub(crate) mod math;
