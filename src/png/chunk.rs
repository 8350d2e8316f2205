use std::io::Write;

use anyhow::Result;

use crate::error::Error;
use crate::png::MAX_FIELD_VALUE;

pub type ChunkType = [u8; 4];

pub const IHDR: ChunkType = *b"IHDR";
pub const IDAT: ChunkType = *b"IDAT";
pub const IEND: ChunkType = *b"IEND";

/// Length, type and CRC fields surrounding every chunk's data.
pub const FRAMING_LENGTH: usize = 12;

/// CRC-32 over the chunk type followed by the chunk data.
pub fn crc32(kind: &ChunkType, data: &[u8]) -> u32 {
    let mut crc = flate2::Crc::new();
    crc.update(kind);
    crc.update(data);
    crc.sum()
}

pub fn write_chunk<W: Write>(out: &mut W, kind: &ChunkType, data: &[u8]) -> Result<()> {
    let length = match u32::try_from(data.len()) {
        Ok(length) if length <= MAX_FIELD_VALUE => length,
        _ => return Err(Error::ChunkTooLarge(data.len()).into()),
    };

    out.write_all(&length.to_be_bytes())?;
    out.write_all(kind)?;
    out.write_all(data)?;
    out.write_all(&crc32(kind, data).to_be_bytes())?;

    log::debug!(
        "Wrote {} chunk with {length} data bytes",
        String::from_utf8_lossy(kind)
    );

    Ok(())
}
