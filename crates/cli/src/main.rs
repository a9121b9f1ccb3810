// SPDX-License-Identifier: MIT

//! Xfsum CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use xfsum::cli::Cli;
use xfsum::error::ExitCode;

mod cmd_summary;

fn init_logging() {
    let filter = EnvFilter::try_from_env("XFSUM_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("xfsum: {}", e);
            match e.downcast_ref::<xfsum::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cmd_summary::run(&cli)?;
    Ok(ExitCode::Success)
}
