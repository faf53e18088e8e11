mod cli;
mod commands;


use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Mode};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match cli.mode() {
        Mode::Generate => commands::generate::run(),
        Mode::Check => commands::check::run(),
        Mode::List => commands::list::run(),
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
