//! EXIF decoding.
//!
//! - [`ExifSource`]: the decoder seam, with [`FileExifSource`] reading real files
//! - [`TagValue`]: one decoded tag value and its console rendering
//! - [`GpsBlock`]: the GPS sub-IFD and its `deg° min' sec" dir` formatting
//! - [`tag_name`]: tag ID to standard name lookup

mod gps;
mod reader;
mod tags;
mod value;

#[cfg(test)]
pub(crate) mod testkit;

pub use gps::{Dms, FormattedGps, GpsBlock, GPS_INFO_TAG};
pub use reader::{ExifSource, FileExifSource, RawExif};
pub use tags::tag_name;
pub use value::TagValue;
