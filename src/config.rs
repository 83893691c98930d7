//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/compose-action/compose-action.toml`
//! 3. Environment variables: `COMPOSE_ACTION_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Unified configuration for compose-action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Executable providing the `compose` subcommand (default: docker)
    pub executable: String,
    /// Prefix of the environment variables inputs are read from (default: INPUT_)
    pub input_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            executable: "docker".into(),
            input_prefix: "INPUT_".into(),
        }
    }
}

/// Get the XDG config directory for compose-action.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "compose-action").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("compose-action.toml"))
}

impl Settings {
    /// Load settings from defaults, the global config file and env vars.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using an explicit config file (missing file is fine).
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("executable", defaults.executable)
            .map_err(config_err)?
            .set_default("input_prefix", defaults.input_prefix)
            .map_err(config_err)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(false));
        }

        // COMPOSE_ACTION_INPUT_PREFIX -> input_prefix; `__` is reserved for nesting
        builder = builder.add_source(
            Environment::with_prefix("COMPOSE_ACTION")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        settings.expand_paths();
        Ok(settings)
    }

    /// Expand `~`, `$VAR` and `${VAR}` in the executable path.
    fn expand_paths(&mut self) {
        self.executable = shellexpand::full(&self.executable)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| self.executable.clone());
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# compose-action configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/compose-action/compose-action.toml
#   Env:    COMPOSE_ACTION_* environment variables (explicit overrides)

# Executable that provides the `compose` subcommand
# executable = "docker"

# Prefix of the environment variables inputs are read from.
# `compose-file` is read from INPUT_COMPOSE-FILE with the default prefix.
# input_prefix = "INPUT_"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
