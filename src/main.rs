mod config;
mod error;

use std::process::ExitCode;

use clap::ErrorKind;
use config::CliConfig;
use delta::{Delta, DeltaError, Side};
use error::CliError;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match CliConfig::try_parse_args() {
        Ok(config) => config,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&config) {
        Ok(()) => {
            println!("Delta JSON written to: {}", config.delta.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig) -> Result<(), CliError> {
    let original = document::load_document(&config.original)?;
    let updated = document::load_document(&config.updated)?;

    let delta = Delta::between(&original, &updated, config.delta_options()).map_err(|err| {
        let DeltaError::NotAnObject { side, .. } = err;
        let path = match side {
            Side::Original => &config.original,
            Side::Updated => &config.updated,
        };
        CliError::Delta {
            path: path.clone(),
            source: err,
        }
    })?;

    tracing::info!(
        path = %config.delta.display(),
        added = delta.added(),
        modified = delta.modified(),
        "write delta"
    );
    document::write_document(&config.delta, &delta.into_value())?;
    Ok(())
}
