//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;
use figment::providers::Serialized;
use serde::Serialize;

use crate::export::OutputFormat;
use crate::model::ParamId;

/// Edit named string parameters and export the resulting model.
#[derive(Parser, Debug)]
#[command(name = "paramedit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load settings (form definition, output, logging) from a TOML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Set a parameter value before output, e.g. --set 2=mini (repeatable, applied in order)
    #[arg(long = "set", value_name = "ID=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(ParamId, String)>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the edited model
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Launch the interactive form editor
    #[arg(short, long)]
    pub interactive: bool,

    /// Save the effective form definition to a TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,

    /// Log file path (default: paramedit.log in interactive mode, stderr otherwise)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Parse an `ID=VALUE` assignment. The value may be empty or contain `=`.
pub fn parse_assignment(s: &str) -> Result<(ParamId, String), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got '{s}'"))?;
    let id = id
        .trim()
        .parse::<ParamId>()
        .map_err(|e| format!("invalid parameter id '{id}': {e}"))?;
    Ok((id, value.to_string()))
}

/// Settings fields that were explicitly given on the command line.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "OutputOverrides::is_empty")]
    output: OutputOverrides,
    #[serde(skip_serializing_if = "LoggingOverrides::is_empty")]
    logging: LoggingOverrides,
}

#[derive(Debug, Default, Serialize)]
struct OutputOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<OutputFormat>,
}

impl OutputOverrides {
    fn is_empty(&self) -> bool {
        self.path.is_none() && self.format.is_none()
    }
}

#[derive(Debug, Default, Serialize)]
struct LoggingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<String>,
}

impl LoggingOverrides {
    fn is_empty(&self) -> bool {
        self.file.is_none() && self.level.is_none()
    }
}

impl Cli {
    /// Provider carrying only the flags that were set, for merging on top of
    /// file and environment settings.
    pub fn to_config_overrides(&self) -> Serialized<impl Serialize> {
        Serialized::defaults(CliOverrides {
            output: OutputOverrides {
                path: self.output.clone(),
                format: self.format,
            },
            logging: LoggingOverrides {
                file: self.log_file.clone(),
                level: self.log_level.clone(),
            },
        })
    }
}
