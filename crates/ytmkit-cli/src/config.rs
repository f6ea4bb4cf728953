//! Configuration file loading.
//!
//! ```toml
//! [solver]
//! method = "newton"
//! tolerance = 1e-10
//! max_iterations = 50
//! initial_guess = 0.04
//! ```
//!
//! Every key is optional; missing ones take the solver defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use ytmkit_bonds::pricing::YieldSolverConfig;

use crate::error::{CliError, CliResult};

/// Settings read from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Yield solver settings.
    pub solver: YieldSolverConfig,
}

impl CliConfig {
    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => {
                let config = Self::from_file(path)?;
                tracing::debug!(path = %path.display(), ?config, "loaded configuration");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
