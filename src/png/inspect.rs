use std::io::Read;
use std::path::Path;

use anyhow::Result;
use flate2::read::ZlibDecoder;
use serde::Serialize;

use crate::error::Error;
use crate::png::chunk::{crc32, ChunkType, FRAMING_LENGTH, IDAT, IEND, IHDR};
use crate::png::encoder::{ColorType, BIT_DEPTH, FILTER_NONE};
use crate::png::{MAX_FIELD_VALUE, SIGNATURE};

/// What a successful inspection found out about a PNG stream.
#[derive(Clone, Debug, Serialize)]
pub struct PngReport {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: ColorType,
    pub chunks: Vec<String>,
    pub idat_count: usize,
    /// The shared pixel value when every row is unfiltered and every pixel
    /// is identical.
    pub solid_color: Option<Vec<u8>>,
}

struct RawChunk<'a> {
    kind: ChunkType,
    data: &'a [u8],
}

struct Header {
    width: u32,
    height: u32,
    color_type: ColorType,
}

pub fn inspect_file(path: &Path) -> Result<PngReport> {
    let bytes = std::fs::read(path)?;
    inspect(&bytes)
}

/// Validates framing, checksums and pixel data of a PNG stream.
///
/// Only the non-interlaced 8-bit RGB and RGBA layouts are understood.
pub fn inspect(bytes: &[u8]) -> Result<PngReport> {
    let stream = match bytes.strip_prefix(&SIGNATURE[..]) {
        Some(stream) => stream,
        None => return Err(Error::BadSignature.into()),
    };

    let chunks = read_chunks(stream)?;

    let header = match chunks.first() {
        Some(chunk) if chunk.kind == IHDR => Header::parse(chunk.data)?,
        _ => return Err(Error::MissingChunk("IHDR").into()),
    };

    if chunks.last().map(|chunk| chunk.kind) != Some(IEND) {
        return Err(Error::MissingChunk("IEND").into());
    }

    let idat_chunks: Vec<&RawChunk> = chunks.iter().filter(|chunk| chunk.kind == IDAT).collect();
    if idat_chunks.is_empty() {
        return Err(Error::MissingChunk("IDAT").into());
    }

    let compressed: Vec<u8> = idat_chunks
        .iter()
        .flat_map(|chunk| chunk.data.iter().copied())
        .collect();
    let channels = header.color_type.channels();
    let row_length = 1 + header.width as usize * channels;
    let expected = row_length * header.height as usize;

    // one byte past the declared size is enough to detect oversized data
    let mut pixel_data = Vec::with_capacity(expected.min(compressed.len().saturating_mul(4)));
    ZlibDecoder::new(&compressed[..])
        .take(expected as u64 + 1)
        .read_to_end(&mut pixel_data)?;

    if pixel_data.len() != expected {
        return Err(Error::PixelDataLength {
            expected,
            actual: pixel_data.len(),
        }
        .into());
    }

    Ok(PngReport {
        width: header.width,
        height: header.height,
        bit_depth: BIT_DEPTH,
        color_type: header.color_type,
        chunks: chunks
            .iter()
            .map(|chunk| String::from_utf8_lossy(&chunk.kind).into_owned())
            .collect(),
        idat_count: idat_chunks.len(),
        solid_color: solid_color(&pixel_data, row_length, channels),
    })
}

fn read_chunks(mut stream: &[u8]) -> Result<Vec<RawChunk<'_>>> {
    let mut chunks = Vec::new();

    while !stream.is_empty() {
        if stream.len() < FRAMING_LENGTH {
            return Err(Error::Truncated.into());
        }

        let length = u32::from_be_bytes(stream[0..4].try_into()?);
        if length > MAX_FIELD_VALUE {
            return Err(Error::ChunkTooLarge(length as usize).into());
        }

        let data_end = 8 + length as usize;
        if stream.len() < data_end + 4 {
            return Err(Error::Truncated.into());
        }

        let kind: ChunkType = stream[4..8].try_into()?;
        let data = &stream[8..data_end];
        let stored = u32::from_be_bytes(stream[data_end..data_end + 4].try_into()?);
        let computed = crc32(&kind, data);
        if stored != computed {
            return Err(Error::CrcMismatch {
                chunk: String::from_utf8_lossy(&kind).into_owned(),
                stored,
                computed,
            }
            .into());
        }

        log::debug!(
            "Read {} chunk with {length} data bytes",
            String::from_utf8_lossy(&kind)
        );

        chunks.push(RawChunk { kind, data });
        stream = &stream[data_end + 4..];

        if kind == IEND {
            break;
        }
    }

    if !stream.is_empty() {
        return Err(Error::TrailingData(stream.len()).into());
    }

    Ok(chunks)
}

impl Header {
    fn parse(data: &[u8]) -> Result<Self> {
        let data: &[u8; 13] = match data.try_into() {
            Ok(data) => data,
            Err(_) => {
                return Err(Error::InvalidHeader(format!(
                    "expected 13 data bytes, found {}",
                    data.len()
                ))
                .into())
            }
        };

        let width = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
        let height = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
        let valid = |value: u32| (1..=MAX_FIELD_VALUE).contains(&value);
        if !valid(width) || !valid(height) {
            return Err(Error::InvalidDimensions { width, height }.into());
        }

        let [bit_depth, color_code, compression, filter, interlace] =
            [data[8], data[9], data[10], data[11], data[12]];

        if bit_depth != BIT_DEPTH {
            return Err(
                Error::InvalidHeader(format!("unsupported bit depth: {bit_depth}")).into(),
            );
        }

        let color_type = match ColorType::from_code(color_code) {
            Some(color_type) => color_type,
            None => {
                return Err(
                    Error::InvalidHeader(format!("unsupported color type: {color_code}")).into(),
                )
            }
        };

        if compression != 0 || filter != 0 || interlace != 0 {
            return Err(Error::InvalidHeader(format!(
                "unsupported methods: compression {compression}, filter {filter}, interlace {interlace}"
            ))
            .into());
        }

        Ok(Self {
            width,
            height,
            color_type,
        })
    }
}

fn solid_color(pixel_data: &[u8], row_length: usize, channels: usize) -> Option<Vec<u8>> {
    let first = pixel_data.get(1..1 + channels)?;

    let solid = pixel_data.chunks_exact(row_length).all(|row| {
        row[0] == FILTER_NONE && row[1..].chunks_exact(channels).all(|pixel| pixel == first)
    });

    solid.then(|| first.to_vec())
}
