use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::exif::TagValue;

pub const GPS_LATITUDE_KEY: &str = "GPS Latitude";
pub const GPS_LONGITUDE_KEY: &str = "GPS Longitude";
pub const NOT_AVAILABLE: &str = "N/A";

/// Ordered tag-name → value mapping produced for one image.
///
/// Insertion order is kept. Re-inserting an existing key replaces the value
/// in place, so the key keeps its first position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataRecord {
    entries: Vec<(String, TagValue)>,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: TagValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The `key: value` lines shared by the console dump and the report file.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|(k, v)| format!("{k}: {v}"))
    }

    /// Write one `key: value` line per entry to `path`, truncating any
    /// existing file. The handle is closed before this returns.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        for line in self.lines() {
            writeln!(writer, "{line}")
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to flush {}", path.display()))?;
        log::info!("Wrote {} line(s) to {}", self.len(), path.display());
        Ok(())
    }
}
