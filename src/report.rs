use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Timelike};
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::exif::ExifSource;
use crate::pipeline::{extract_metadata, Extraction};
use crate::timestamp::analyze_timestamp;

// ANSI color codes
const WHITE: &str = "\x1b[37m";
const GREEN: &str = "\x1b[32m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Outer width of the welcome box, borders included.
const BOX_WIDTH: usize = 90;
/// Blank rows above and below the text inside the box.
const BOX_PADDING_ROWS: usize = 1;

const WELCOME: &[&str] = &[
    "",
    "    Welcome to the Image Metadata Analysis Tool!",
    "    This tool allows you to analyze metadata from an image file.",
    "    ",
];
const TAGLINE: &str = "A tool for Image Metadata Analysis";

/// Frame `lines` in a white box with each line centered in `color` and bold.
pub fn boxed_text(lines: &[&str], color: &str) -> String {
    let inner = BOX_WIDTH - 2;
    let border = format!("{WHITE}+{}+{RESET}", "-".repeat(inner));
    let empty = format!("{WHITE}|{}|{RESET}", " ".repeat(inner));

    let mut rows = vec![border.clone()];
    rows.extend(std::iter::repeat_n(empty.clone(), BOX_PADDING_ROWS));
    for line in lines {
        rows.push(format!(
            "{WHITE}| {color}{BOLD}{line:^width$}{RESET} |{RESET}",
            width = inner - 2
        ));
    }
    rows.extend(std::iter::repeat_n(empty, BOX_PADDING_ROWS));
    rows.push(border);
    rows.join("\n")
}

/// The welcome banner printed at the start of every run, ending with a
/// blank line.
pub fn banner() -> String {
    let version = concat!("exif-report v", env!("CARGO_PKG_VERSION"));
    format!(
        "{}\n{TAGLINE:>width$}\n{version:>width$}\n",
        boxed_text(WELCOME, GREEN),
        width = BOX_WIDTH
    )
}

/// Render the reference time as `YYYY-MM-DD HH:MM:SS[.ffffff]`.
pub fn format_reference_time(t: NaiveDateTime) -> String {
    if t.nanosecond() / 1_000 == 0 {
        t.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        t.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

/// Run the tool once: banner, then whatever `config` asks for.
///
/// Output goes to `out`. The only error is a failure to write the report
/// file (or to `out` itself); a missing or unreadable image is reported as
/// text and is not an error.
pub fn run<S, W>(config: &Config, source: &S, reference_time: NaiveDateTime, out: &mut W) -> Result<()>
where
    S: ExifSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", banner())?;

    let Some(image_path) = config.image_path.as_deref() else {
        if config.announces_save() {
            if let Some(output) = config.output.as_deref() {
                log::warn!("No image given, nothing was written to {}", output.display());
                print_saved(out, output)?;
            }
        }
        return Ok(());
    };

    writeln!(
        out,
        "\nReference Time (Current Date and Time): {}",
        format_reference_time(reference_time)
    )?;

    let record = match extract_metadata(source, image_path) {
        Extraction::Found(record) => record,
        Extraction::NotFound => {
            writeln!(out, "No metadata found in the image.")?;
            return Ok(());
        }
    };

    if config.show_info {
        writeln!(out, "\nImage Metadata:")?;
        for line in record.lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "\nTimestamp Analysis:")?;
        writeln!(out, "{}", analyze_timestamp(&record, reference_time))?;
    }

    if let Some(output) = config.output.as_deref() {
        record
            .write_to(output)
            .with_context(|| format!("Failed to save report to {}", output.display()))?;
        if config.announces_save() {
            print_saved(out, output)?;
        }
    }

    Ok(())
}

fn print_saved<W: Write + ?Sized>(out: &mut W, output: &Path) -> Result<()> {
    writeln!(out, "Output saved successfully to {}", output.display())?;
    Ok(())
}
