use std::path::PathBuf;

/// Options for one run, taken from the command line.
///
/// There is no configuration file; the binary fills this from its
/// arguments and hands it to [`crate::report::run`].
///
/// ```rust
/// use exif_report::config::Config;
///
/// let config = Config {
///     image_path: Some("photo.jpg".into()),
///     output: Some("report.txt".into()),
///     show_info: false,
/// };
/// assert!(config.writes_report());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Image to analyze. Without it only the banner is shown.
    pub image_path: Option<PathBuf>,
    /// Destination of the `key: value` text report.
    pub output: Option<PathBuf>,
    /// Print the metadata and timestamp analysis to the console.
    pub show_info: bool,
}

impl Config {
    /// Whether a report file is requested for an actual image.
    pub fn writes_report(&self) -> bool {
        self.image_path.is_some() && self.output.is_some()
    }

    /// Whether the driver announces a saved report.
    ///
    /// The announcement is only made when the metadata is not already
    /// shown on the console. Without an image it is still printed even
    /// though nothing is written.
    pub fn announces_save(&self) -> bool {
        self.output.is_some() && !self.show_info
    }
}
