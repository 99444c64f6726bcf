//! Minimal PNG encoder
//!
//! Just enough of the PNG format to write 8-bit RGBA images: chunk framing
//! with CRC32 checksums and a single-IDAT encoder with zlib-compressed,
//! unfiltered scanlines. Decoding and the wider zoo of chunk types are out
//! of scope.

pub mod chunk;
pub mod encoder;

pub use chunk::{ChunkType, PngChunk};
pub use encoder::{PngEncoder, PNG_SIGNATURE};
