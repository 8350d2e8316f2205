use image::{Pixel, Rgba, RgbaImage};

use crate::icon::font::{Glyph, LabelFont};
use crate::icon::{LABEL_COLOR, LABEL_TEXT, OPAQUE, STEEL_BLUE};

/// Ink extents of a laid out string, in the glyph coordinate space.
struct Bounds {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

/// Renders a square icon with the label centered on a steel blue fill.
pub fn render_label(size: u32, font: &LabelFont) -> RgbaImage {
    let [r, g, b] = STEEL_BLUE;
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([r, g, b, OPAQUE]));

    let glyphs = font.layout(LABEL_TEXT, (size / 3) as f32);
    let bounds = match ink_bounds(&glyphs) {
        Some(bounds) => bounds,
        None => return canvas,
    };

    let text_width = bounds.right - bounds.left;
    let text_height = bounds.bottom - bounds.top;
    let origin_x = (size as i32 - text_width).div_euclid(2) - bounds.left;
    let origin_y = (size as i32 - text_height).div_euclid(2) - bounds.top;

    for glyph in &glyphs {
        draw_glyph(&mut canvas, glyph, origin_x, origin_y);
    }

    canvas
}

fn ink_bounds(glyphs: &[Glyph]) -> Option<Bounds> {
    glyphs
        .iter()
        .filter(|glyph| glyph.width > 0 && glyph.height > 0)
        .map(|glyph| Bounds {
            left: glyph.x,
            top: glyph.y,
            right: glyph.x + glyph.width as i32,
            bottom: glyph.y + glyph.height as i32,
        })
        .reduce(|a, b| Bounds {
            left: a.left.min(b.left),
            top: a.top.min(b.top),
            right: a.right.max(b.right),
            bottom: a.bottom.max(b.bottom),
        })
}

fn draw_glyph(canvas: &mut RgbaImage, glyph: &Glyph, origin_x: i32, origin_y: i32) {
    let (width, height) = canvas.dimensions();
    let [r, g, b, _] = LABEL_COLOR;

    for (index, &coverage) in glyph.coverage.iter().enumerate() {
        if coverage == 0 {
            continue;
        }

        let x = origin_x + glyph.x + (index % glyph.width) as i32;
        let y = origin_y + glyph.y + (index / glyph.width) as i32;
        if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
            continue;
        }

        canvas
            .get_pixel_mut(x as u32, y as u32)
            .blend(&Rgba([r, g, b, coverage]));
    }
}
