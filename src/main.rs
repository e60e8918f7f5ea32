//! nimbusctl - Main entry point

use clap::error::ErrorKind;
use clap::Parser;
use log::debug;

use nimbusctl::config::{defaults, exit};
use nimbusctl::Cli;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version land on stdout and exit clean; everything
            // else is a usage error.
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    print!("{}", e);
                    std::process::exit(exit::OK);
                }
                _ => {
                    eprint!("{}", e);
                    std::process::exit(exit::USAGE);
                }
            }
        }
    };

    let log_level = if cli.verbose {
        defaults::VERBOSE_LOG_LEVEL
    } else {
        defaults::LOG_LEVEL
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    debug!("Starting nimbusctl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = nimbusctl::cli::run::run(cli).await {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}
