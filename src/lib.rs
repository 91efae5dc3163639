//! # exif-report
//!
//! Read EXIF metadata (including GPS coordinates) from a single image, print it
//! or save it as a `key: value` text report, and compare the capture timestamp
//! with the current time.
//!
//! ## Quick Start
//!
//! [`report::run`] drives a whole invocation the same way the binary does:
//!
//! ```rust,no_run
//! use exif_report::config::Config;
//! use exif_report::exif::FileExifSource;
//! use exif_report::report;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config {
//!         image_path: Some("photo.jpg".into()),
//!         output: Some("photo.txt".into()),
//!         show_info: true,
//!     };
//!     let now = chrono::Local::now().naive_local();
//!     report::run(&config, &FileExifSource, now, &mut std::io::stdout())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! ```rust,no_run
//! use exif_report::exif::FileExifSource;
//! use exif_report::pipeline::{extract_metadata, Extraction};
//! use exif_report::timestamp::analyze_timestamp;
//! use std::path::Path;
//!
//! match extract_metadata(&FileExifSource, Path::new("photo.jpg")) {
//!     Extraction::Found(record) => {
//!         for line in record.lines() {
//!             println!("{line}");
//!         }
//!         let now = chrono::Local::now().naive_local();
//!         println!("{}", analyze_timestamp(&record, now));
//!     }
//!     Extraction::NotFound => println!("No metadata found in the image."),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`exif`]: decoder seam, tag values, GPS block, tag names
//! - [`pipeline`]: metadata extraction into an ordered record
//! - [`record`]: the ordered record and its text report
//! - [`timestamp`]: capture time vs. reference time
//! - [`report`]: banner and the console/file behavior of one run
//! - [`config`]: run options

pub mod config;
pub mod exif;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod timestamp;
