//! Layered configuration: defaults, TOML file, environment, then CLI overrides.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::export::OutputFormat;
use crate::model::{Model, ParamValue, Parameter};

/// Prefix for environment overrides, e.g. `PARAMEDIT_OUTPUT__FORMAT=yaml`.
pub const ENV_PREFIX: &str = "PARAMEDIT_";

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Layered extraction failed
    Figment(Box<figment::Error>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::Figment(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Figment(Box::new(e))
    }
}

/// Root settings structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Form definition and initial values
    pub form: FormConfig,
    /// Where and how the edited model is written
    pub output: OutputSettings,
    /// Log destination and verbosity
    pub logging: LoggingSettings,
}

/// Parameters to edit and the model seeding them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub params: Vec<Parameter>,
    pub model: Model,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output file (stdout when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl FormConfig {
    /// Built-in sample form used when nothing is configured.
    pub fn demo() -> Self {
        Self {
            params: vec![Parameter::new(1, "Purpose"), Parameter::new(2, "Length")],
            model: Model {
                param_values: vec![ParamValue::new(1, "casual"), ParamValue::new(2, "maxi")],
                colors: Vec::new(),
            },
        }
    }

    /// Load a bare form definition from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let form: Self = toml::from_str(&content)?;
        Ok(form)
    }

    /// Save the form definition to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Settings {
    /// Build the layered figment without CLI overrides.
    ///
    /// A missing file is not an error here; [`Toml::file`] yields nothing for it.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extract settings from `figment`.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let settings: Self = figment.extract()?;
        tracing::debug!(
            params = settings.form.params.len(),
            format = ?settings.output.format,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Form to edit, falling back to [`FormConfig::demo`] when no parameters are set.
    pub fn form_or_demo(&self) -> FormConfig {
        if self.form.params.is_empty() {
            FormConfig::demo()
        } else {
            self.form.clone()
        }
    }
}
