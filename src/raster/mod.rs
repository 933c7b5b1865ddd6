/// Owned RGBA8 buffers.
pub mod buffer;
/// Image decoding into [`buffer::PixelBuffer`].
pub mod decode;
/// PNG encoding and background export jobs.
pub mod export;
