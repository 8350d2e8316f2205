use anyhow::Result;

use crate::args::CheckArgs;
use crate::error::Error;
use crate::png::inspect::{inspect_file, PngReport};

/// Inspects every file and reports on it, failing if any file is not a
/// conformant PNG.
pub fn check(args: &CheckArgs) -> Result<Vec<PngReport>> {
    let mut reports = Vec::with_capacity(args.files.len());
    let mut failures = 0;

    for path in &args.files {
        match inspect_file(path) {
            Ok(report) => {
                if args.json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    log::info!(
                        "{}: {}x{} {:?}, {} IDAT chunk(s), {}",
                        path.display(),
                        report.width,
                        report.height,
                        report.color_type,
                        report.idat_count,
                        match &report.solid_color {
                            Some(color) => format!("solid {color:?}"),
                            None => String::from("not a solid color"),
                        }
                    );
                }
                reports.push(report);
            }
            Err(error) => {
                log::error!("{}: {error}", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(Error::new(format!(
            "{failures} of {} files failed inspection",
            args.files.len()
        ))
        .into());
    }

    Ok(reports)
}
