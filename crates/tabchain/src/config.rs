//! Shell Configuration
//!
//! Loaded from an optional JSON file; every field has a default so a
//! partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tabchain_memory::MemoryUsage;

/// Most decimals worth printing for a megabyte amount
const MAX_PRECISION: usize = 6;

/// Complete shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Prompt printed before each interactive command
    pub prompt: String,

    /// Decimals shown for memory amounts
    /// Default: 2
    pub memory_precision: usize,

    /// Budget used to report memory pressure (megabytes)
    /// `None` disables pressure reporting
    pub memory_budget_mb: Option<f64>,

    /// Echo each scripted command before its output
    pub echo_commands: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: String::from("tabchain> "),
            memory_precision: 2,
            memory_budget_mb: Some(1024.0), // 1 GB
            echo_commands: false,
        }
    }
}

impl ShellConfig {
    /// Load and validate configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse and validate configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(budget) = self.memory_budget_mb {
            if !budget.is_finite() || budget <= 0.0 {
                return Err(ConfigError::InvalidBudget(budget));
            }
        }
        if self.memory_precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge(self.memory_precision));
        }
        Ok(())
    }

    /// Get the memory budget, if pressure reporting is on
    pub fn memory_budget(&self) -> Option<MemoryUsage> {
        self.memory_budget_mb.map(MemoryUsage::from_megabytes)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Memory budget must be a positive number of megabytes, got {0}")]
    InvalidBudget(f64),

    #[error("Memory precision too large (maximum 6), got {0}")]
    PrecisionTooLarge(usize),
}
