use std::path::Path;

use crate::exif::{tag_name, ExifSource, RawExif, GPS_INFO_TAG};
use crate::record::{MetadataRecord, GPS_LATITUDE_KEY, GPS_LONGITUDE_KEY, NOT_AVAILABLE};

/// Outcome of reading an image's metadata.
///
/// Every failure collapses into `NotFound`; a record is never returned
/// partially populated.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Found(MetadataRecord),
    NotFound,
}

impl Extraction {
    pub fn record(&self) -> Option<&MetadataRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }
}

/// Read the image at `path` through `source` and build its metadata record.
///
/// The record starts with `GPS Latitude` and `GPS Longitude` (`N/A` when the
/// image has no GPS block), followed by every tag in decoder order, keyed by
/// its standard name or by its numeric ID when the name is unknown.
pub fn extract_metadata<S: ExifSource + ?Sized>(source: &S, path: &Path) -> Extraction {
    log::debug!("Reading {} with {}", path.display(), source.name());

    let raw = match source.read(path) {
        Ok(raw) => raw,
        Err(e) => {
            log::debug!("No metadata in {}: {e:#}", path.display());
            return Extraction::NotFound;
        }
    };

    if raw.is_empty() {
        log::debug!("EXIF block of {} has no tags", path.display());
        return Extraction::NotFound;
    }

    match build_record(raw) {
        Ok(record) => Extraction::Found(record),
        Err(e) => {
            log::debug!("Discarding metadata of {}: {e:#}", path.display());
            Extraction::NotFound
        }
    }
}

fn build_record(raw: RawExif) -> anyhow::Result<MetadataRecord> {
    let mut record = MetadataRecord::new();

    match &raw.gps {
        Some(gps) => {
            let formatted = gps.format()?;
            record.insert(GPS_LATITUDE_KEY, formatted.latitude.into());
            record.insert(GPS_LONGITUDE_KEY, formatted.longitude.into());
        }
        None => {
            record.insert(GPS_LATITUDE_KEY, NOT_AVAILABLE.into());
            record.insert(GPS_LONGITUDE_KEY, NOT_AVAILABLE.into());
        }
    }

    for (id, value) in raw.tags {
        if id == GPS_INFO_TAG {
            continue;
        }
        let key = tag_name(id).unwrap_or_else(|| id.to_string());
        record.insert(key, value);
    }

    Ok(record)
}
