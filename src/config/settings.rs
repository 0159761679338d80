use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing_subscriber::EnvFilter;

use crate::cli::OutputFormat;
use crate::error::{ExampleError, Result};

/// Config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".hive/examples.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamplesConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
}

impl ExamplesConfig {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub async fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = fs::read_to_string(path).await?;
            toml::from_str(&content).map_err(|source| ExampleError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        for (key, filter) in [
            ("logging.filter", &self.logging.filter),
            ("logging.verbose_filter", &self.logging.verbose_filter),
        ] {
            if filter.trim().is_empty() {
                errors.push(format!("{} must not be empty", key));
            } else if let Err(e) = EnvFilter::try_new(filter) {
                errors.push(format!("{} is not a valid filter: {}", key, e));
            }
        }

        if self.display.list_id_width == 0 {
            errors.push("display.list_id_width must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ExampleError::Config(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used normally.
    pub filter: String,
    /// `EnvFilter` directive used with `--verbose`.
    pub verbose_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hive_examples=info".to_string(),
            verbose_filter: "hive_examples=debug".to_string(),
        }
    }
}

/// Terminal chrome for the menu CLI. Scenario text is never styled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Force ANSI styling on or off. Unset follows terminal detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
    /// Column width of the scenario id in `list` output.
    pub list_id_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: None,
            list_id_width: 14,
        }
    }
}
