//! Fixture builders: real EXIF blocks wrapped in a minimal JPEG.

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub fn ascii(tag: Tag, s: &str) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![s.as_bytes().to_vec()]),
    }
}

pub fn short(tag: Tag, n: u16) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Short(vec![n]),
    }
}

fn triple(deg: u32, min: u32, sec: (u32, u32)) -> Value {
    Value::Rational(vec![
        Rational { num: deg, denom: 1 },
        Rational { num: min, denom: 1 },
        Rational { num: sec.0, denom: sec.1 },
    ])
}

/// GPS reference and coordinate fields; seconds are given as a rational.
pub fn gps_fields(
    lat_ref: &str,
    lat: (u32, u32, (u32, u32)),
    lon_ref: &str,
    lon: (u32, u32, (u32, u32)),
) -> Vec<Field> {
    vec![
        ascii(Tag::GPSLatitudeRef, lat_ref),
        Field { tag: Tag::GPSLatitude, ifd_num: In::PRIMARY, value: triple(lat.0, lat.1, lat.2) },
        ascii(Tag::GPSLongitudeRef, lon_ref),
        Field { tag: Tag::GPSLongitude, ifd_num: In::PRIMARY, value: triple(lon.0, lon.1, lon.2) },
    ]
}

/// SOI, APP1 `Exif\0\0` + TIFF block, EOI.
pub fn jpeg_bytes(fields: &[Field]) -> Vec<u8> {
    let mut writer = Writer::new();
    for field in fields {
        writer.push_field(field);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).expect("serialize EXIF");
    let tiff = tiff.into_inner();

    let segment_len = u16::try_from(2 + 6 + tiff.len()).expect("EXIF segment too large");
    let mut jpeg = vec![0xff, 0xd8, 0xff, 0xe1];
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xff, 0xd9]);
    jpeg
}

pub fn write_jpeg(dir: &Path, name: &str, fields: &[Field]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, jpeg_bytes(fields)).expect("write fixture");
    path
}
