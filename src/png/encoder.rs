use std::io::Write;
use std::path::Path;

use anyhow::Result;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde::Serialize;

use crate::error::Error;
use crate::png::chunk::{write_chunk, FRAMING_LENGTH, IDAT, IEND, IHDR};
use crate::png::{MAX_FIELD_VALUE, SIGNATURE};

pub const BIT_DEPTH: u8 = 8;

/// Filter type 0: scanline bytes are stored as-is.
pub const FILTER_NONE: u8 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorType {
    Rgb,
    Rgba,
}

impl ColorType {
    pub fn code(self) -> u8 {
        match self {
            ColorType::Rgb => 2,
            ColorType::Rgba => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            2 => Some(ColorType::Rgb),
            6 => Some(ColorType::Rgba),
            _ => None,
        }
    }

    pub fn channels(self) -> usize {
        match self {
            ColorType::Rgb => 3,
            ColorType::Rgba => 4,
        }
    }
}

/// An image in which every pixel has the same color.
#[derive(Clone, Debug)]
pub struct SolidRaster {
    width: u32,
    height: u32,
    color_type: ColorType,
    pixel: [u8; 4],
}

impl SolidRaster {
    pub fn rgb(width: u32, height: u32, color: [u8; 3]) -> Result<Self> {
        let [r, g, b] = color;
        Self::new(width, height, ColorType::Rgb, [r, g, b, 0])
    }

    pub fn rgba(width: u32, height: u32, color: [u8; 4]) -> Result<Self> {
        Self::new(width, height, ColorType::Rgba, color)
    }

    fn new(width: u32, height: u32, color_type: ColorType, pixel: [u8; 4]) -> Result<Self> {
        let valid = |value: u32| (1..=MAX_FIELD_VALUE).contains(&value);
        if !valid(width) || !valid(height) {
            return Err(Error::InvalidDimensions { width, height }.into());
        }

        Ok(Self {
            width,
            height,
            color_type,
            pixel,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn color_type(&self) -> ColorType {
        self.color_type
    }

    pub fn pixel(&self) -> &[u8] {
        &self.pixel[..self.color_type.channels()]
    }

    /// Unfiltered pixel rows, each prefixed with its filter byte.
    pub fn scanlines(&self) -> Vec<u8> {
        let row_length = 1 + self.width as usize * self.color_type.channels();
        let mut row = Vec::with_capacity(row_length);
        row.push(FILTER_NONE);
        for _ in 0..self.width {
            row.extend_from_slice(self.pixel());
        }

        row.repeat(self.height as usize)
    }

    fn header(&self) -> [u8; 13] {
        let mut header = [0; 13];
        header[0..4].copy_from_slice(&self.width.to_be_bytes());
        header[4..8].copy_from_slice(&self.height.to_be_bytes());
        header[8] = BIT_DEPTH;
        header[9] = self.color_type.code();
        // compression, filter and interlace methods stay 0
        header
    }
}

pub fn encode(raster: &SolidRaster) -> Result<Vec<u8>> {
    let mut compressor = ZlibEncoder::new(Vec::new(), Compression::default());
    compressor.write_all(&raster.scanlines())?;
    let compressed = compressor.finish()?;

    let header = raster.header();
    let mut png = Vec::with_capacity(
        SIGNATURE.len() + 3 * FRAMING_LENGTH + header.len() + compressed.len(),
    );
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, &IHDR, &header)?;
    write_chunk(&mut png, &IDAT, &compressed)?;
    write_chunk(&mut png, &IEND, &[])?;

    Ok(png)
}

pub fn write_png(path: &Path, raster: &SolidRaster) -> Result<()> {
    let png = encode(raster)?;
    std::fs::write(path, png)?;
    Ok(())
}
