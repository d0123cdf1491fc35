use clap::Parser;
use img2char::cli::Args;
use img2char::config::Config;
use img2char::settings::RenderSettings;

/// Map `-v` occurrences to a default log filter. `RUST_LOG` still wins.
fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    // Logs go to stderr so stdout carries only the rendered text
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(verbose)))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), img2char::Img2CharError> {
    let config = Config::load(args.config.as_deref())?;
    let settings = RenderSettings::resolve(&args, &config)?;
    log::debug!("Resolved settings: {:?}", settings);
    img2char::run(settings)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
