//! Serialization of edited models.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::model::Model;

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// YAML
    Yaml,
}

/// Error type for export operations.
#[derive(Debug)]
pub enum ExportError {
    /// IO error writing the output file
    Io(std::io::Error),
    /// JSON serialization error
    Json(serde_json::Error),
    /// YAML serialization error
    Yaml(serde_yaml::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Json(e) => write!(f, "JSON serialize error: {}", e),
            Self::Yaml(e) => write!(f, "YAML serialize error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<serde_yaml::Error> for ExportError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

/// Render a model as text in the given format.
pub fn render_model(model: &Model, format: OutputFormat) -> Result<String, ExportError> {
    let text = match format {
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(model)?;
            s.push('\n');
            s
        }
        OutputFormat::Yaml => serde_yaml::to_string(model)?,
    };
    Ok(text)
}

/// Render a model and write it to `path`.
pub fn write_model(model: &Model, format: OutputFormat, path: &Path) -> Result<(), ExportError> {
    let text = render_model(model, format)?;
    std::fs::write(path, text)?;
    tracing::info!(path = %path.display(), ?format, "model written");
    Ok(())
}
