//! PNG chunk framing
//!
//! Every PNG chunk is framed the same way: a big-endian payload length, a
//! four-byte ASCII type tag, the payload, and a CRC32 (IEEE) computed over
//! the type tag and payload together.

use byteorder::{BigEndian, WriteBytesExt};
use icongen_core::IconResult;
use std::io::Write;

/// Chunk types emitted by the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkType {
    /// Image header (IHDR)
    ImageHeader,
    /// Compressed image data (IDAT)
    ImageData,
    /// End-of-stream marker (IEND)
    ImageEnd,
}

impl ChunkType {
    pub fn to_fourcc(&self) -> [u8; 4] {
        match self {
            ChunkType::ImageHeader => *b"IHDR",
            ChunkType::ImageData => *b"IDAT",
            ChunkType::ImageEnd => *b"IEND",
        }
    }
}

/// A chunk in a PNG stream
#[derive(Debug, Clone)]
pub struct PngChunk {
    pub chunk_type: ChunkType,
    pub data: Vec<u8>,
}

impl PngChunk {
    pub fn new(chunk_type: ChunkType, data: Vec<u8>) -> Self {
        Self { chunk_type, data }
    }

    /// Write the framed chunk to output
    pub fn write<W: Write>(&self, writer: &mut W) -> IconResult<()> {
        let fourcc = self.chunk_type.to_fourcc();

        // Length covers the payload only, not the type tag or CRC
        writer.write_u32::<BigEndian>(self.data.len() as u32)?;
        writer.write_all(&fourcc)?;
        writer.write_all(&self.data)?;

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&fourcc);
        hasher.update(&self.data);
        writer.write_u32::<BigEndian>(hasher.finalize())?;

        Ok(())
    }
}
