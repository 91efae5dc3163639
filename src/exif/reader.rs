use anyhow::{Context as _, Result};
use exif::{Context, Field, In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::gps::{Dms, GpsBlock};
use super::value::TagValue;

/// Decoded EXIF data as handed over by an [`ExifSource`].
///
/// `tags` keeps the decoder's order and raw numeric tag IDs. The GPS
/// sub-IFD is lifted out into `gps` instead of appearing as a tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawExif {
    pub tags: Vec<(u16, TagValue)>,
    pub gps: Option<GpsBlock>,
}

impl RawExif {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.gps.is_none()
    }
}

/// Something that can decode the EXIF block of an image file.
///
/// Any failure (unreadable file, unsupported container, no EXIF block)
/// is reported as an error; callers do not distinguish between them.
pub trait ExifSource {
    /// The display name of this source, used in log output.
    fn name(&self) -> &str;
    /// Decode the EXIF block of the file at `path`.
    fn read(&self, path: &Path) -> Result<RawExif>;
}

/// [`ExifSource`] backed by `kamadak-exif`, reading JPEG, TIFF, HEIF,
/// PNG and WebP containers from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileExifSource;

impl ExifSource for FileExifSource {
    fn name(&self) -> &str {
        "kamadak-exif"
    }

    fn read(&self, path: &Path) -> Result<RawExif> {
        let exif = {
            let file = File::open(path).context("Failed to open image file")?;
            let mut reader = BufReader::new(file);
            Reader::new()
                .read_from_container(&mut reader)
                .context("Failed to read EXIF block")?
        };

        let mut raw = RawExif::default();
        for field in exif.fields().filter(|f| f.ifd_num == In::PRIMARY) {
            match field.tag.context() {
                Context::Gps => absorb_gps_field(raw.gps.get_or_insert_with(GpsBlock::default), field),
                Context::Tiff | Context::Exif => {
                    if field.tag == Tag::GPSInfoIFDPointer {
                        raw.gps.get_or_insert_with(GpsBlock::default);
                    } else {
                        raw.tags.push((field.tag.number(), TagValue::from(&field.value)));
                    }
                }
                _ => {}
            }
        }

        log::debug!(
            "Decoded {} tag(s) from {} (GPS block: {})",
            raw.tags.len(),
            path.display(),
            if raw.gps.is_some() { "yes" } else { "no" }
        );
        Ok(raw)
    }
}

fn absorb_gps_field(gps: &mut GpsBlock, field: &Field) {
    match field.tag {
        Tag::GPSLatitudeRef => gps.latitude_ref = ascii_value(&field.value),
        Tag::GPSLatitude => gps.latitude = dms_value(&field.value),
        Tag::GPSLongitudeRef => gps.longitude_ref = ascii_value(&field.value),
        Tag::GPSLongitude => gps.longitude = dms_value(&field.value),
        _ => {}
    }
}

fn ascii_value(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(vecs) => vecs
            .first()
            .map(|v| String::from_utf8_lossy(v).trim().to_string()),
        _ => None,
    }
}

/// Convert an EXIF `[deg, min, sec]` rational triple, storing seconds as
/// hundredths.
fn dms_value(value: &Value) -> Option<Dms> {
    match value {
        Value::Rational(v) if v.len() >= 3 => Some(Dms::new(
            v[0].to_f64(),
            v[1].to_f64(),
            v[2].to_f64() * 100.0,
        )),
        _ => None,
    }
}
