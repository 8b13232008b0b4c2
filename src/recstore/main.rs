use recstore::api::perform;
use recstore::config::Arguments;
use recstore::error::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

/// Environment variable holding the log filter, e.g. `RECSTORE_LOG=debug`.
const LOG_ENV: &str = "RECSTORE_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_normalized();
    init_logging(cli.verbose);

    let args = Arguments::from(cli);
    let stdout = std::io::stdout();
    perform(&args, &mut stdout.lock())
}

// stdout carries operation output, so logs go to stderr.
fn init_logging(verbose: bool) {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();
    if verbose {
        filter = filter.add_directive(LevelFilter::DEBUG.into());
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
