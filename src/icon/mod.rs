use std::path::PathBuf;

use anyhow::Result;

use crate::args::{GenerateArgs, Style};
use crate::icon::font::LabelFont;
use crate::png::encoder::{write_png, SolidRaster};

pub mod font;
pub mod text;

pub const STEEL_BLUE: [u8; 3] = [70, 130, 180];
pub const OPAQUE: u8 = u8::MAX;
pub const LABEL_COLOR: [u8; 4] = [255, 255, 255, OPAQUE];
pub const LABEL_TEXT: &str = "EK";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub file_name: &'static str,
}

/// Icon files expected by the application bundler. The `@2x` variant is
/// double the size of its base name.
pub const ICON_TARGETS: [IconTarget; 3] = [
    IconTarget {
        size: 32,
        file_name: "32x32.png",
    },
    IconTarget {
        size: 128,
        file_name: "128x128.png",
    },
    IconTarget {
        size: 256,
        file_name: "128x128@2x.png",
    },
];

/// Writes every icon target into the output directory, creating it first.
/// Returns the written paths in target order.
pub fn generate(args: &GenerateArgs) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&args.out_dir)?;

    let mut label_font = None;
    let mut written = Vec::with_capacity(ICON_TARGETS.len());

    for target in &ICON_TARGETS {
        let path = args.out_dir.join(target.file_name);
        let size = target.size;

        match args.style {
            Style::Text => {
                let font = label_font.get_or_insert_with(|| LabelFont::load(&args.font));
                text::render_label(size, font).save_with_format(&path, image::ImageFormat::Png)?;
            }
            Style::Rgba => {
                let [r, g, b] = STEEL_BLUE;
                write_png(&path, &SolidRaster::rgba(size, size, [r, g, b, OPAQUE])?)?;
            }
            Style::Rgb => {
                write_png(&path, &SolidRaster::rgb(size, size, STEEL_BLUE)?)?;
            }
        }

        log::info!("{}", creation_message(target, args.style));
        written.push(path);
    }

    log::info!("Icon creation completed in {}", args.out_dir.display());

    Ok(written)
}

fn creation_message(target: &IconTarget, style: Style) -> String {
    let [r, g, b] = STEEL_BLUE;
    let size = target.size;

    match style {
        Style::Text => format!("Created {}", target.file_name),
        Style::Rgba => format!(
            "Created {} - {size}x{size} RGBA({r}, {g}, {b}, {OPAQUE})",
            target.file_name
        ),
        Style::Rgb => format!(
            "Created {} - {size}x{size} RGB({r}, {g}, {b})",
            target.file_name
        ),
    }
}
