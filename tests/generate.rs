use std::path::{Path, PathBuf};

use placeholder_icons::args::{Args, CheckArgs, GenerateArgs, Style, DEFAULT_FONT};
use placeholder_icons::check::check;
use placeholder_icons::icon::font::LabelFont;
use placeholder_icons::icon::text::render_label;
use placeholder_icons::icon::{generate, ICON_TARGETS};
use placeholder_icons::png::encoder::ColorType;
use placeholder_icons::png::inspect::inspect_file;
use placeholder_icons::run;

fn generate_args(out_dir: PathBuf, style: Style) -> GenerateArgs {
    GenerateArgs {
        out_dir,
        style,
        font: PathBuf::from("/nonexistent/font.ttf"),
    }
}

// ── Solid styles ─────────────────────────────────────────────────────────────

#[test]
fn rgb_style_writes_conformant_solid_icons() {
    let dir = tempfile::tempdir().unwrap();
    let written = generate(&generate_args(dir.path().to_path_buf(), Style::Rgb)).unwrap();

    assert_eq!(written.len(), 3);
    for (path, target) in written.iter().zip(ICON_TARGETS) {
        assert_eq!(path, &dir.path().join(target.file_name));

        let report = inspect_file(path).unwrap();
        assert_eq!((report.width, report.height), (target.size, target.size));
        assert_eq!(report.bit_depth, 8);
        assert_eq!(report.color_type, ColorType::Rgb);
        assert_eq!(report.chunks, ["IHDR", "IDAT", "IEND"]);
        assert_eq!(report.solid_color, Some(vec![70, 130, 180]));
    }
}

#[test]
fn rgba_style_writes_opaque_icons() {
    let dir = tempfile::tempdir().unwrap();
    let written = generate(&generate_args(dir.path().to_path_buf(), Style::Rgba)).unwrap();

    for path in &written {
        let report = inspect_file(path).unwrap();
        assert_eq!(report.color_type, ColorType::Rgba);
        assert_eq!(report.idat_count, 1);
        assert_eq!(report.solid_color, Some(vec![70, 130, 180, 255]));
    }

    let retina = image::open(dir.path().join("128x128@2x.png")).unwrap().to_rgba8();
    assert_eq!(retina.dimensions(), (256, 256));
}

#[test]
fn output_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("src-tauri").join("icons");

    generate(&generate_args(out_dir.clone(), Style::Rgb)).unwrap();

    assert!(out_dir.join("32x32.png").is_file());
    assert!(out_dir.join("128x128.png").is_file());
    assert!(out_dir.join("128x128@2x.png").is_file());
}

#[test]
fn existing_icons_are_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("32x32.png"), b"stale").unwrap();

    generate(&generate_args(dir.path().to_path_buf(), Style::Rgba)).unwrap();

    assert!(inspect_file(&dir.path().join("32x32.png")).is_ok());
}

#[test]
fn unwritable_output_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"").unwrap();

    // a regular file where the directory should be
    assert!(generate(&generate_args(blocker.join("icons"), Style::Rgb)).is_err());
}

// ── Text style ───────────────────────────────────────────────────────────────

#[test]
fn text_style_falls_back_when_font_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let written = generate(&generate_args(dir.path().to_path_buf(), Style::Text)).unwrap();

    for (path, target) in written.iter().zip(ICON_TARGETS) {
        let report = inspect_file(path).unwrap();
        assert_eq!((report.width, report.height), (target.size, target.size));
        assert_eq!(report.color_type, ColorType::Rgba);
        assert_eq!(report.solid_color, None);

        let icon = image::open(path).unwrap().to_rgba8();
        let last = target.size - 1;
        assert_eq!(icon.get_pixel(0, 0).0, [70, 130, 180, 255]);
        assert_eq!(icon.get_pixel(last, last).0, [70, 130, 180, 255]);
        assert!(icon.pixels().any(|p| p.0 == [255, 255, 255, 255]));
    }
}

/// Inclusive pixel extents of everything that differs from the background.
fn ink_extents(icon: &image::RgbaImage) -> Option<(u32, u32, u32, u32)> {
    icon.enumerate_pixels()
        .filter(|(_, _, pixel)| pixel.0 != [70, 130, 180, 255])
        .fold(None, |extents, (x, y, _)| match extents {
            None => Some((x, y, x, y)),
            Some((left, top, right, bottom)) => {
                Some((left.min(x), top.min(y), right.max(x), bottom.max(y)))
            }
        })
}

#[test]
fn truetype_label_is_centered_and_scaled() {
    let font_path = Path::new(DEFAULT_FONT);
    if !font_path.is_file() {
        eprintln!("skipping: {DEFAULT_FONT} is not installed");
        return;
    }

    let font = LabelFont::load(font_path);
    assert!(matches!(font, LabelFont::TrueType(_)));

    let mut heights = Vec::new();
    for target in ICON_TARGETS {
        let size = target.size;
        let icon = render_label(size, &font);
        let (left, top, right, bottom) = ink_extents(&icon).unwrap();
        let width = right - left + 1;
        let height = bottom - top + 1;

        // ink sits on the floor-divided center, within a pixel of antialiasing
        assert!(left.abs_diff((size - width) / 2) <= 1, "size {size}: left {left}");
        assert!(top.abs_diff((size - height) / 2) <= 1, "size {size}: top {top}");
        assert!(width > height, "size {size}: {width}x{height}");
        // cap height of a size / 3 pixel font
        assert!(height > size / 6 && height <= size / 3, "size {size}: height {height}");

        heights.push(height);
    }

    assert!(heights.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn text_style_with_installed_font_writes_labels() {
    if !Path::new(DEFAULT_FONT).is_file() {
        eprintln!("skipping: {DEFAULT_FONT} is not installed");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let mut args = generate_args(dir.path().to_path_buf(), Style::Text);
    args.font = PathBuf::from(DEFAULT_FONT);

    for path in generate(&args).unwrap() {
        let icon = image::open(&path).unwrap().to_rgba8();
        assert!(icon.pixels().any(|p| p.0 == [255, 255, 255, 255]));
        assert!(ink_extents(&icon).is_some());
    }
}

// ── run / check ──────────────────────────────────────────────────────────────

#[test]
fn run_generates_then_checks() {
    let dir = tempfile::tempdir().unwrap();
    run(Args::Generate(generate_args(dir.path().to_path_buf(), Style::Rgb))).unwrap();

    let files = ICON_TARGETS
        .iter()
        .map(|target| dir.path().join(target.file_name))
        .collect();
    run(Args::Check(CheckArgs { files, json: true })).unwrap();
}

#[test]
fn check_reports_every_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let files = generate(&generate_args(dir.path().to_path_buf(), Style::Rgba)).unwrap();

    let reports = check(&CheckArgs { files, json: false }).unwrap();
    let sizes: Vec<u32> = reports.iter().map(|report| report.width).collect();
    assert_eq!(sizes, [32, 128, 256]);
}

#[test]
fn check_fails_on_corrupted_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut files = generate(&generate_args(dir.path().to_path_buf(), Style::Rgb)).unwrap();

    let corrupted = dir.path().join("corrupted.png");
    let mut bytes = std::fs::read(&files[0]).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    std::fs::write(&corrupted, bytes).unwrap();
    files.push(corrupted);

    let error = check(&CheckArgs { files, json: false }).unwrap_err();
    assert_eq!(error.to_string(), "1 of 4 files failed inspection");
}

#[test]
fn check_fails_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let files = vec![dir.path().join("absent.png")];

    assert!(check(&CheckArgs { files, json: false }).is_err());
}
