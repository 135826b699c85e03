use buildguard::{handlers, Cli};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("buildguard=debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    handlers::run_scan(&cli)
}
