/// Aspect-fit layout and coordinate conversion.
pub mod mapper;
