use super::{global_config_path, ConfigFile, SortLabConfig, PROJECT_CONFIG_FILE};
use crate::error::{ErrorCode, Result, SortLabError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builds a [`SortLabConfig`] from defaults, config files and the environment
///
/// Layers are applied in order: global file, project file, explicit file,
/// environment. Optional files are skipped when missing; an explicit file
/// must exist.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    global_path: Option<PathBuf>,
    project_dir: Option<PathBuf>,
    explicit_path: Option<PathBuf>,
    use_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            global_path: global_config_path(),
            project_dir: std::env::current_dir().ok(),
            explicit_path: None,
            use_env: true,
        }
    }

    /// A loader that reads nothing but the files it is explicitly given
    pub fn isolated() -> Self {
        Self {
            global_path: None,
            project_dir: None,
            explicit_path: None,
            use_env: false,
        }
    }

    pub fn with_global_path(mut self, path: Option<PathBuf>) -> Self {
        self.global_path = path;
        self
    }

    pub fn with_project_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.project_dir = dir;
        self
    }

    pub fn with_explicit_path(mut self, path: Option<PathBuf>) -> Self {
        self.explicit_path = path;
        self
    }

    pub fn load(&self) -> Result<SortLabConfig> {
        let mut config = SortLabConfig::new();

        if let Some(path) = &self.global_path {
            if path.exists() {
                apply_path(&mut config, path)?;
            }
        }

        if let Some(dir) = &self.project_dir {
            let path = dir.join(PROJECT_CONFIG_FILE);
            if path.exists() {
                apply_path(&mut config, &path)?;
            }
        }

        if let Some(path) = &self.explicit_path {
            if !path.exists() {
                return Err(SortLabError::config_with_code(
                    ErrorCode::CONFIG_NOT_FOUND,
                    format!("Configuration file not found: {}", path.display()),
                    Some(path.clone()),
                ));
            }
            apply_path(&mut config, path)?;
        }

        if self.use_env {
            config.merge_env_vars()?;
        }

        debug!(?config, "Configuration loaded");
        Ok(config)
    }
}

fn apply_path(config: &mut SortLabConfig, path: &Path) -> Result<()> {
    debug!("Reading configuration from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        SortLabError::config_with_code(
            ErrorCode::CONFIG_GENERIC,
            "failed to read configuration",
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })?;

    let file: ConfigFile = toml::from_str(&content).map_err(|e| {
        SortLabError::config_with_code(
            ErrorCode::CONFIG_PARSE_ERROR,
            format!("failed to parse {}", path.display()),
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })?;

    config.apply_file(file, Some(path.to_path_buf()))
}
