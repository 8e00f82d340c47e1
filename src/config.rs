use crate::cli::args::OutputFormat;
use crate::{HarnessError, Result};
use clap::ValueEnum;
use clarity_mock::MockRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".clarity-harness.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Chain globals such as `tx-sender`
    #[serde(default)]
    pub globals: BTreeMap<String, String>,
    /// Contracts to declare in addition to the built-in ones
    #[serde(default)]
    pub contracts: Vec<ContractConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Load configuration from a file in the project root
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            HarnessError::FileError(format!(
                "Failed to read config file {:?}: {}",
                config_path, e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            HarnessError::FileError(format!(
                "Failed to parse TOML config from {:?}: {}",
                config_path, e
            ))
        })?;

        debug!(path = ?config_path, contracts = config.contracts.len(), "Loaded config");
        Ok(config)
    }

    /// Load default config if file is missing, otherwise return error on parse failure
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Warning: Failed to load config: {}. Using defaults.", e);
                Config::default()
            }
        }
    }

    /// Declares the configured contracts and sets the configured globals.
    pub fn apply_to(&self, registry: &mut MockRegistry) {
        for contract in &self.contracts {
            for function in &contract.functions {
                registry.declare(&contract.name, function);
            }
        }
        for (name, value) in &self.globals {
            registry.set_global(name, value);
        }
    }

    /// The configured output format, ignoring values that are not a known format.
    pub fn output_format(&self) -> Option<OutputFormat> {
        let raw = self.output.format.as_deref()?;
        match OutputFormat::from_str(raw, true) {
            Ok(format) => Some(format),
            Err(_) => {
                warn!(format = raw, "Unknown output format in config; using text");
                None
            }
        }
    }
}
