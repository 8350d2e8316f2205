use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use placeholder_icons::args::{DEFAULT_FONT, DEFAULT_OUT_DIR};

/// Generates solid-color PNG placeholder icons for application packaging
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateOptions,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the 32x32, 128x128 and 128x128@2x icons (the default)
    Generate(GenerateOptions),

    /// Verify that PNG files are well formed and report their contents
    Check(CheckOptions),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the icons are written to, created if missing
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// How the icons are drawn and encoded
    #[arg(short, long, value_enum, default_value_t = StyleOption::Text)]
    pub style: StyleOption,

    /// TrueType font used to draw the label in the text style
    #[arg(short, long, default_value = DEFAULT_FONT)]
    pub font: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct CheckOptions {
    /// PNG files to inspect
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print one JSON report per file to stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum StyleOption {
    /// RGBA icon with a centered "EK" label
    Text,
    /// Solid opaque RGBA icon
    Rgba,
    /// Solid RGB icon
    Rgb,
}

impl From<GenerateOptions> for placeholder_icons::args::GenerateArgs {
    fn from(value: GenerateOptions) -> Self {
        placeholder_icons::args::GenerateArgs {
            out_dir: value.out_dir,
            style: value.style.into(),
            font: value.font,
        }
    }
}

impl From<CheckOptions> for placeholder_icons::args::CheckArgs {
    fn from(value: CheckOptions) -> Self {
        placeholder_icons::args::CheckArgs {
            files: value.files,
            json: value.json,
        }
    }
}

impl From<StyleOption> for placeholder_icons::args::Style {
    fn from(value: StyleOption) -> Self {
        match value {
            StyleOption::Text => placeholder_icons::args::Style::Text,
            StyleOption::Rgba => placeholder_icons::args::Style::Rgba,
            StyleOption::Rgb => placeholder_icons::args::Style::Rgb,
        }
    }
}
