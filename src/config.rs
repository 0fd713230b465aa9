use std::{ffi::OsString, path::PathBuf};

use clap::{CommandFactory, ErrorKind, Parser};
use delta::{DeltaOptions, KeyOrder};

#[derive(Debug, Parser)]
#[clap(author, version, about, name = "jsondelta", allow_hyphen_values = true)]
pub struct CliConfig {
    /// The original JSON document
    #[clap(value_name = "ORIGINAL", parse(from_os_str))]
    pub(crate) original: PathBuf,
    /// The updated JSON document
    #[clap(value_name = "UPDATED", parse(from_os_str))]
    pub(crate) updated: PathBuf,
    /// Where to write the delta document
    #[clap(value_name = "DELTA", parse(from_os_str))]
    pub(crate) delta: PathBuf,
    /// Treat objects that differ only in key order as equal
    #[clap(long)]
    pub(crate) ignore_key_order: bool,
    /// Anything after the delta path is ignored
    #[clap(hide = true, parse(from_os_str))]
    _rest: Vec<OsString>,
}

impl CliConfig {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        let config = Self::try_parse()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), clap::Error> {
        let paths = [
            ("ORIGINAL", &self.original),
            ("UPDATED", &self.updated),
            ("DELTA", &self.delta),
        ];
        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(Self::command().error(
                    ErrorKind::EmptyValue,
                    format!("the path for <{}> must not be empty", name),
                ));
            }
        }
        Ok(())
    }

    pub fn delta_options(&self) -> DeltaOptions {
        let key_order = if self.ignore_key_order {
            KeyOrder::Ignored
        } else {
            KeyOrder::Significant
        };
        DeltaOptions::default().key_order(key_order)
    }
}
