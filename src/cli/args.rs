//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use super::enums::Filter;

/// Convert an image into monospace character art
#[derive(Parser, Debug)]
#[command(name = "img2char")]
#[command(version, about = "Render an image as character art", long_about = None)]
pub struct Args {
    /// Input image path
    pub file: PathBuf,

    /// Output text file (default: output.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output width in characters (default: 80)
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<u32>,

    /// Output height in characters (default: 80)
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<u32>,

    /// Resampling filter (default: nearest)
    #[arg(long)]
    pub filter: Option<Filter>,

    /// Fail instead of clamping when a semi-transparent bright pixel maps past the ramp
    #[arg(long)]
    pub strict: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["img2char", "cat.png"]);
        assert_eq!(args.file, PathBuf::from("cat.png"));
        assert!(args.output.is_none());
        assert!(args.width.is_none());
        assert!(args.height.is_none());
        assert!(args.filter.is_none());
        assert!(!args.strict);
        assert!(args.config.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_file_required() {
        assert!(Args::try_parse_from(["img2char"]).is_err());
    }

    #[test]
    fn test_args_output_option() {
        let args = Args::parse_from(["img2char", "a.png", "--output", "art.txt"]);
        assert_eq!(args.output, Some(PathBuf::from("art.txt")));

        let args = Args::parse_from(["img2char", "a.png", "-o", "b.txt"]);
        assert_eq!(args.output, Some(PathBuf::from("b.txt")));
    }

    #[test]
    fn test_args_dimensions() {
        let args = Args::parse_from(["img2char", "a.png", "--width", "120", "--height", "40"]);
        assert_eq!(args.width, Some(120));
        assert_eq!(args.height, Some(40));
    }

    #[test]
    fn test_args_zero_width_parses() {
        // Rejected later, when settings are resolved
        let args = Args::parse_from(["img2char", "a.png", "--width", "0"]);
        assert_eq!(args.width, Some(0));
    }

    #[test]
    fn test_args_negative_width_rejected() {
        assert!(Args::try_parse_from(["img2char", "a.png", "--width", "-5"]).is_err());
    }

    #[test]
    fn test_args_filter_values() {
        let args = Args::parse_from(["img2char", "a.png", "--filter", "nearest"]);
        assert_eq!(args.filter, Some(Filter::Nearest));

        let args = Args::parse_from(["img2char", "a.png", "--filter", "catmull-rom"]);
        assert_eq!(args.filter, Some(Filter::CatmullRom));

        let args = Args::parse_from(["img2char", "a.png", "--filter", "lanczos3"]);
        assert_eq!(args.filter, Some(Filter::Lanczos3));

        assert!(Args::try_parse_from(["img2char", "a.png", "--filter", "sinc"]).is_err());
    }

    #[test]
    fn test_args_verbose_count() {
        let args = Args::parse_from(["img2char", "a.png", "-vv"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_args_combined_options() {
        let args = Args::parse_from([
            "img2char",
            "photo.jpg",
            "-o",
            "/tmp/photo.txt",
            "--width",
            "100",
            "--height",
            "50",
            "--filter",
            "gaussian",
            "--strict",
            "-c",
            "/tmp/img2char.toml",
        ]);
        assert_eq!(args.file, PathBuf::from("photo.jpg"));
        assert_eq!(args.output, Some(PathBuf::from("/tmp/photo.txt")));
        assert_eq!(args.width, Some(100));
        assert_eq!(args.height, Some(50));
        assert_eq!(args.filter, Some(Filter::Gaussian));
        assert!(args.strict);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/img2char.toml")));
    }
}
