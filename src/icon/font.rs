use std::path::Path;

use anyhow::Result;

use crate::error::Error;

const BUILTIN_WIDTH: usize = 5;
const BUILTIN_HEIGHT: usize = 7;
const BUILTIN_ADVANCE: i32 = 6;

/// 5x7 bitmaps for `A` to `Z`, one byte per row, bit 4 is the leftmost column.
const BUILTIN_GLYPHS: [[u8; BUILTIN_HEIGHT]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
];

pub enum LabelFont {
    TrueType(fontdue::Font),
    /// Fixed-size bitmap font that ignores the requested pixel height
    Builtin,
}

/// A rasterized glyph positioned relative to the left end of the baseline,
/// with y growing downwards.
#[derive(Debug)]
pub struct Glyph {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

impl LabelFont {
    /// Loads a TrueType font, falling back to the built-in bitmap font when
    /// the file can't be read or parsed.
    pub fn load(path: &Path) -> Self {
        match Self::load_truetype(path) {
            Ok(font) => {
                log::debug!("Loaded font {}", path.display());
                LabelFont::TrueType(font)
            }
            Err(error) => {
                log::warn!(
                    "Falling back to the built-in font, {} could not be loaded: {error}",
                    path.display()
                );
                LabelFont::Builtin
            }
        }
    }

    fn load_truetype(path: &Path) -> Result<fontdue::Font> {
        let data = std::fs::read(path)?;

        match fontdue::Font::from_bytes(data, fontdue::FontSettings::default()) {
            Ok(font) => Ok(font),
            Err(message) => Err(Error::Font(String::from(message)).into()),
        }
    }

    pub fn layout(&self, text: &str, pixel_height: f32) -> Vec<Glyph> {
        match self {
            LabelFont::TrueType(font) => layout_truetype(font, text, pixel_height),
            LabelFont::Builtin => layout_builtin(text),
        }
    }
}

fn layout_truetype(font: &fontdue::Font, text: &str, pixel_height: f32) -> Vec<Glyph> {
    let mut glyphs = Vec::new();
    let mut pen = 0.0f32;
    let mut previous = None;

    for character in text.chars() {
        if let Some(previous) = previous {
            pen += font
                .horizontal_kern(previous, character, pixel_height)
                .unwrap_or(0.0);
        }

        let (metrics, coverage) = font.rasterize(character, pixel_height);
        glyphs.push(Glyph {
            x: pen.round() as i32 + metrics.xmin,
            y: -(metrics.ymin + metrics.height as i32),
            width: metrics.width,
            height: metrics.height,
            coverage,
        });

        pen += metrics.advance_width;
        previous = Some(character);
    }

    glyphs
}

fn layout_builtin(text: &str) -> Vec<Glyph> {
    let mut glyphs = Vec::new();
    let mut pen = 0;

    for character in text.chars() {
        let character = character.to_ascii_uppercase();
        if character.is_ascii_uppercase() {
            let rows = &BUILTIN_GLYPHS[(character as u8 - b'A') as usize];
            let coverage = rows
                .iter()
                .flat_map(|&row| {
                    (0..BUILTIN_WIDTH).map(move |column| {
                        if row & (0x10u8 >> column) != 0 {
                            u8::MAX
                        } else {
                            0
                        }
                    })
                })
                .collect();

            glyphs.push(Glyph {
                x: pen,
                y: -(BUILTIN_HEIGHT as i32),
                width: BUILTIN_WIDTH,
                height: BUILTIN_HEIGHT,
                coverage,
            });
        }

        pen += BUILTIN_ADVANCE;
    }

    glyphs
}
