//! PNG stream encoder
//!
//! Serializes an RGBA pixmap as a minimal, structurally valid PNG: the file
//! signature, an IHDR chunk, a single IDAT chunk holding zlib-compressed
//! scanlines (each prefixed with filter type 0), and an empty IEND chunk.

use byteorder::{BigEndian, WriteBytesExt};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use icongen_core::{IconError, IconResult, Pixmap};
use std::io::Write;

use crate::chunk::{ChunkType, PngChunk};

/// PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// 8 bits per channel
const BIT_DEPTH: u8 = 8;

/// RGBA (color type 6)
const COLOR_TYPE_RGBA: u8 = 6;

/// PNG encoder for 8-bit RGBA pixel buffers
#[derive(Debug, Clone)]
pub struct PngEncoder {
    compression: Compression,
}

impl PngEncoder {
    pub fn new() -> Self {
        Self {
            compression: Compression::best(),
        }
    }

    /// Encode a pixmap into an in-memory PNG byte stream
    pub fn encode(&self, pixmap: &Pixmap) -> IconResult<Vec<u8>> {
        let mut output = Vec::new();
        self.encode_to(pixmap, &mut output)?;
        Ok(output)
    }

    /// Encode a pixmap to a writer
    pub fn encode_to<W: Write>(&self, pixmap: &Pixmap, writer: &mut W) -> IconResult<()> {
        let expected = pixmap.width() as usize * pixmap.height() as usize;
        if pixmap.pixel_count() != expected {
            return Err(IconError::BufferSizeMismatch {
                expected,
                actual: pixmap.pixel_count(),
            });
        }

        writer.write_all(&PNG_SIGNATURE)?;
        self.header_chunk(pixmap)?.write(writer)?;
        self.data_chunk(pixmap)?.write(writer)?;
        PngChunk::new(ChunkType::ImageEnd, Vec::new()).write(writer)?;

        Ok(())
    }

    /// Build the IHDR chunk: dimensions plus the fixed format fields
    fn header_chunk(&self, pixmap: &Pixmap) -> IconResult<PngChunk> {
        let mut data = Vec::with_capacity(13);
        data.write_u32::<BigEndian>(pixmap.width())?;
        data.write_u32::<BigEndian>(pixmap.height())?;
        data.write_u8(BIT_DEPTH)?;
        data.write_u8(COLOR_TYPE_RGBA)?;
        data.write_u8(0)?; // compression method: deflate
        data.write_u8(0)?; // filter method: adaptive (per-scanline byte)
        data.write_u8(0)?; // interlace: none
        Ok(PngChunk::new(ChunkType::ImageHeader, data))
    }

    /// Build the IDAT chunk: filter-prefixed scanlines, zlib-compressed
    fn data_chunk(&self, pixmap: &Pixmap) -> IconResult<PngChunk> {
        let width = pixmap.width() as usize;
        let mut raw = Vec::with_capacity(pixmap.height() as usize * (1 + width * 4));

        for y in 0..pixmap.height() {
            raw.push(0); // filter type: none
            for pixel in pixmap.row(y) {
                raw.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
            }
        }

        let mut encoder = ZlibEncoder::new(Vec::new(), self.compression);
        encoder.write_all(&raw)?;
        let compressed = encoder.finish()?;

        Ok(PngChunk::new(ChunkType::ImageData, compressed))
    }
}

impl Default for PngEncoder {
    fn default() -> Self {
        Self::new()
    }
}
