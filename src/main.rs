#![allow(clippy::enum_variant_names)]

use std::fs::OpenOptions;
use std::sync::Mutex;

use clap::Parser as _;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::{
    application::{Application, ApplicationError},
    cli::Cli,
};

mod application;
mod cli;
mod events;
mod ext;
mod materializer;
mod parser;
mod structure;

#[snafu::report]
fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args)?;
    debug!("Parsed CLI arguments: {cli_args:?}");

    Application::run(cli_args)?;

    Ok(())
}

/// Console diagnostics go to stderr so stdout only carries the preview.
/// `--log-file` adds a timestamped, append-only copy of every event.
fn setup_tracing(cli_args: &Cli) -> Result<(), ApplicationError> {
    let console_layer = fmt::layer()
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(cli_args.log_level.to_level_filter());

    let file_layer = match &cli_args.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ApplicationError::LogFileError {
                    path: path.clone(),
                    source,
                })?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(LevelFilter::INFO),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
