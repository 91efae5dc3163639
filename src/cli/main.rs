use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use exif_report::config::Config;
use exif_report::exif::FileExifSource;
use exif_report::report;

#[derive(Parser, Debug)]
#[command(
    name = "exif-report",
    version,
    about = "Image Metadata Analysis Tool: print or save EXIF metadata and GPS coordinates of an image"
)]
struct Cli {
    /// Path to the image file to analyze
    #[arg(value_name = "IMAGE_PATH")]
    image_path: Option<PathBuf>,

    /// Path to save the output as a text file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Display information in the console
    #[arg(short, long)]
    info: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            image_path: cli.image_path,
            output: cli.output,
            show_info: cli.info,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging; diagnostics go to stderr only
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let reference_time = chrono::Local::now().naive_local();
    let config = Config::from(cli);
    log::debug!("{config:?}");

    let stdout = std::io::stdout();
    report::run(&config, &FileExifSource, reference_time, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_options() {
        let cli = Cli::try_parse_from(["exif-report", "-i", "-o", "out.txt", "photo.jpg"]).unwrap();
        let config = Config::from(cli);
        assert_eq!(config.image_path, Some(PathBuf::from("photo.jpg")));
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
        assert!(config.show_info);
    }

    #[test]
    fn everything_is_optional() {
        let config = Config::from(Cli::try_parse_from(["exif-report"]).unwrap());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn long_forms() {
        let cli = Cli::try_parse_from(["exif-report", "--output", "r.txt", "--info"]).unwrap();
        assert!(cli.info);
        assert_eq!(cli.output, Some(PathBuf::from("r.txt")));
        assert!(cli.image_path.is_none());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["exif-report", "--json"]).is_err());
    }
}
