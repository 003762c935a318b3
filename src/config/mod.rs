use crate::error::{ErrorCode, Result, SortLabError};
use crate::report::OutputFormat;
use crate::sort::Algorithm;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

pub mod loader;

pub use loader::ConfigLoader;

pub const ENV_ALGORITHM: &str = "SORTLAB_ALGORITHM";
pub const ENV_FORMAT: &str = "SORTLAB_FORMAT";
pub const ENV_LOG_LEVEL: &str = "SORTLAB_LOG_LEVEL";

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "sortlab.toml";

/// Location of the per-user configuration file, if a home directory exists
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "sortlab", "sortlab")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortLabConfig {
    pub default_algorithm: Algorithm,
    pub output_format: OutputFormat,
    pub log_level: Option<String>,
}

impl Default for SortLabConfig {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::Bubble,
            output_format: OutputFormat::Text,
            log_level: None,
        }
    }
}

/// One layer of configuration as written on disk; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub default_algorithm: Option<String>,
    pub output_format: Option<String>,
    pub log_level: Option<String>,
}

impl SortLabConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the keys present in `file`, leaving the rest untouched
    pub fn apply_file(&mut self, file: ConfigFile, origin: Option<PathBuf>) -> Result<()> {
        if let Some(algorithm) = file.default_algorithm {
            self.default_algorithm = parse_algorithm(&algorithm, origin.clone())?;
        }
        if let Some(format) = file.output_format {
            self.output_format = parse_format(&format, origin.clone())?;
        }
        if let Some(level) = file.log_level {
            self.log_level = Some(parse_log_level(&level, origin)?);
        }
        Ok(())
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(algorithm) = lookup(ENV_ALGORITHM) {
            self.default_algorithm =
                parse_algorithm(&algorithm, None).map_err(|e| e.with_context(ENV_ALGORITHM))?;
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            self.output_format =
                parse_format(&format, None).map_err(|e| e.with_context(ENV_FORMAT))?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level =
                Some(parse_log_level(&level, None).map_err(|e| e.with_context(ENV_LOG_LEVEL))?);
        }

        Ok(())
    }
}

fn parse_algorithm(value: &str, origin: Option<PathBuf>) -> Result<Algorithm> {
    value.parse::<Algorithm>().map_err(|e| {
        SortLabError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("invalid default_algorithm '{}'", value),
            origin,
        )
        .with_source(e)
    })
}

fn parse_format(value: &str, origin: Option<PathBuf>) -> Result<OutputFormat> {
    value.parse::<OutputFormat>().map_err(|e| {
        SortLabError::config_with_code(ErrorCode::CONFIG_INVALID_VALUE, e, origin)
    })
}

/// Accept a level (`debug`) or comma-separated `target=level` directives
fn parse_log_level(value: &str, origin: Option<PathBuf>) -> Result<String> {
    let trimmed = value.trim();
    let every_level_known = trimmed.split(',').all(|directive| {
        let level = directive
            .rsplit_once('=')
            .map_or(directive, |(_, level)| level);
        LevelFilter::from_str(level.trim()).is_ok()
    });

    if trimmed.is_empty() || !every_level_known {
        return Err(SortLabError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("invalid log_level '{}'", value),
            origin,
        ));
    }

    EnvFilter::try_new(trimmed).map_err(|e| {
        SortLabError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("invalid log_level '{}'", value),
            origin,
        )
        .with_source(e)
    })?;

    Ok(trimmed.to_string())
}
