//! `genconf` entry-point: resolve a fragment tree and print the result.

use std::io;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use genconf_cli::cli::Cli;
use genconf_cli::environment;
use genconf_cli::run;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let environment = environment::resolve(environment::from_process(), &cli.dims);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &environment, &mut out).map_err(color_eyre::eyre::Report::from)
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
