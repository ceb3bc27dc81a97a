use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::{
    config::errors::ConfigError,
    utils::{DEFAULT_AVL_EXECUTABLE, DEFAULT_RESULTS_DIR},
};

/// Environment variable overriding [`RunnerConfig::avl_executable`].
pub const AVL_PATH_ENV: &str = "PAVL_AVL_PATH";
/// Environment variable overriding [`RunnerConfig::results_dir`].
pub const RESULTS_DIR_ENV: &str = "PAVL_RESULTS_DIR";

/// Where the solver lives and where its files go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Solver executable, resolved through `PATH` when not absolute.
    #[serde(default = "default_executable")]
    pub avl_executable: PathBuf,
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    /// Keep the input, script and raw output files after a run.
    #[serde(default)]
    pub keep_intermediates: bool,
}

fn default_executable() -> PathBuf {
    PathBuf::from(DEFAULT_AVL_EXECUTABLE)
}

fn default_results_dir() -> PathBuf {
    PathBuf::from(DEFAULT_RESULTS_DIR)
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            avl_executable: default_executable(),
            results_dir: default_results_dir(),
            keep_intermediates: false,
        }
    }
}

impl RunnerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading runner settings from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let config: RunnerConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `PAVL_AVL_PATH` and `PAVL_RESULTS_DIR` when they are set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            env::var(AVL_PATH_ENV).ok(),
            env::var(RESULTS_DIR_ENV).ok(),
        )
    }

    fn with_overrides(mut self, executable: Option<String>, results: Option<String>) -> Self {
        if let Some(executable) = executable.filter(|v| !v.trim().is_empty()) {
            self.avl_executable = PathBuf::from(executable);
        }
        if let Some(results) = results.filter(|v| !v.trim().is_empty()) {
            self.results_dir = PathBuf::from(results);
        }
        self
    }

    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = dir.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.avl_executable.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "Solver executable path is empty".to_string(),
            ));
        }
        if self.results_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "Results directory is empty".to_string(),
            ));
        }
        Ok(())
    }
}
