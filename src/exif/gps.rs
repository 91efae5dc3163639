use anyhow::{Context, Result};

/// Tag ID of the GPS sub-IFD pointer (`GPSInfo`).
pub const GPS_INFO_TAG: u16 = 34853;

/// One coordinate axis as degrees, minutes, and seconds.
///
/// Seconds are held as fixed-point hundredths: `46.00"` is stored as
/// `4600.0`. [`Dms::seconds`] restores the real value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub centiseconds: f64,
}

impl Dms {
    pub fn new(degrees: f64, minutes: f64, centiseconds: f64) -> Self {
        Self { degrees, minutes, centiseconds }
    }

    pub fn seconds(&self) -> f64 {
        self.centiseconds / 100.0
    }
}

/// Raw GPS block as found behind tag [`GPS_INFO_TAG`].
///
/// Every part is optional because the decoder only fills what the file
/// carries. [`GpsBlock::format`] requires all four.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpsBlock {
    pub latitude_ref: Option<String>,
    pub latitude: Option<Dms>,
    pub longitude_ref: Option<String>,
    pub longitude: Option<Dms>,
}

/// The two display strings derived from a [`GpsBlock`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedGps {
    pub latitude: String,
    pub longitude: String,
}

impl GpsBlock {
    /// Format both axes as `{deg}° {min}' {sec:.2}" {dir}`.
    ///
    /// A latitude reference other than `N` is rendered `S`, a longitude
    /// reference other than `E` is rendered `W`.
    pub fn format(&self) -> Result<FormattedGps> {
        let lat = self.latitude.context("GPS block has no latitude")?;
        let lat_ref = self.latitude_ref.as_deref().context("GPS block has no latitude reference")?;
        let lon = self.longitude.context("GPS block has no longitude")?;
        let lon_ref = self.longitude_ref.as_deref().context("GPS block has no longitude reference")?;

        let lat_dir = if lat_ref == "N" { "N" } else { "S" };
        let lon_dir = if lon_ref == "E" { "E" } else { "W" };

        Ok(FormattedGps {
            latitude: format_axis(&lat, lat_dir),
            longitude: format_axis(&lon, lon_dir),
        })
    }
}

fn format_axis(dms: &Dms, direction: &str) -> String {
    format!(
        "{}° {}' {:.2}\" {direction}",
        dms.degrees,
        dms.minutes,
        dms.seconds()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lat_ref: &str, lon_ref: &str) -> GpsBlock {
        GpsBlock {
            latitude_ref: Some(lat_ref.into()),
            latitude: Some(Dms::new(40.0, 26.0, 4600.0)),
            longitude_ref: Some(lon_ref.into()),
            longitude: Some(Dms::new(79.0, 58.0, 5612.0)),
        }
    }

    #[test]
    fn formats_north_east() {
        let gps = block("N", "E").format().unwrap();
        assert_eq!(gps.latitude, "40° 26' 46.00\" N");
        assert_eq!(gps.longitude, "79° 58' 56.12\" E");
    }

    #[test]
    fn non_north_reference_becomes_south() {
        for r in ["S", "n", "", "X"] {
            let gps = block(r, "E").format().unwrap();
            assert!(gps.latitude.ends_with(" S"), "ref {r:?} gave {}", gps.latitude);
        }
    }

    #[test]
    fn non_east_reference_becomes_west() {
        for r in ["W", "e", "", "North"] {
            let gps = block("N", r).format().unwrap();
            assert!(gps.longitude.ends_with(" W"), "ref {r:?} gave {}", gps.longitude);
        }
    }

    #[test]
    fn fractional_minutes_keep_their_decimals() {
        let mut b = block("N", "E");
        b.latitude = Some(Dms::new(12.0, 30.5, 0.0));
        assert_eq!(b.format().unwrap().latitude, "12° 30.5' 0.00\" N");
    }

    #[test]
    fn missing_parts_are_errors() {
        let mut b = block("N", "E");
        b.longitude_ref = None;
        assert!(b.format().is_err());

        assert!(GpsBlock::default().format().is_err());
    }
}
