use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_OUT_DIR: &str = "/root/EnhanceKeys/EnhanceKeys/src-tauri/icons";
pub const DEFAULT_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

pub enum Args {
    Generate(GenerateArgs),
    Check(CheckArgs),
}

#[derive(Clone, Debug)]
pub struct GenerateArgs {
    pub out_dir: PathBuf,
    pub style: Style,
    pub font: PathBuf,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            style: Style::Text,
            font: PathBuf::from(DEFAULT_FONT),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CheckArgs {
    pub files: Vec<PathBuf>,
    pub json: bool,
}

/// How an icon gets its pixels and which encoder writes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// RGBA fill with a centered label, saved through the `image` crate
    Text,
    /// Opaque RGBA fill, written by the built-in PNG encoder
    Rgba,
    /// RGB fill, written by the built-in PNG encoder
    Rgb,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Text => "text",
            Style::Rgba => "rgba",
            Style::Rgb => "rgb",
        };
        write!(f, "{name}")
    }
}
