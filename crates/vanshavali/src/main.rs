mod cli;
mod error;
mod output;
mod session;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    if let Err(error) = cli::run(&cli) {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}
