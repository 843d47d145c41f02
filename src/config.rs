//! Configuration file support for relief-board.
//!
//! Provides YAML-based configuration through `relief-board.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use relief_board::adapters::outbound::network::abi::validate_signature;
use relief_board::adapters::outbound::network::{FieldOrder, MAX_ATTEMPTS_LIMIT};
use relief_board::application::dto::{ListingRequest, OutputFormat};
use relief_board::registry::domain::Listing;
use relief_board::shared::security::read_regular_file;
use relief_board::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "relief-board.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub rpc_url: Option<String>,
    pub contract: Option<String>,
    /// Relative paths are resolved against the config file's directory.
    pub snapshot: Option<PathBuf>,
    pub listings: Option<Vec<String>>,
    pub format: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub max_attempts: Option<u32>,
    pub field_order: Option<FieldOrder>,
    /// Read method signature per listing key
    pub methods: Option<HashMap<String, String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Method overrides keyed by listing. Only valid after `validate_config`.
    pub fn method_overrides(&self) -> HashMap<Listing, String> {
        self.methods
            .iter()
            .flatten()
            .filter_map(|(key, signature)| {
                Listing::from_str(key)
                    .ok()
                    .map(|listing| (listing, signature.trim().to_string()))
            })
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let (Some(snapshot), Some(dir)) = (config.snapshot.as_ref(), path.parent()) {
        if snapshot.is_relative() {
            config.snapshot = Some(dir.join(snapshot));
        }
    }

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.snapshot.is_some() && (config.rpc_url.is_some() || config.contract.is_some()) {
        bail!(
            "Invalid config: 'snapshot' cannot be combined with 'rpc_url' or 'contract'.\n\n\
             💡 Hint: Read either from a snapshot file or from the chain, not both."
        );
    }

    if let Some(ref listings) = config.listings {
        ListingRequest::parse(listings).map_err(|e| {
            anyhow::anyhow!(
                "Invalid config: {}\n\n💡 Hint: 'listings' accepts state, ground, supply, demand or all.",
                e
            )
        })?;
    }

    if let Some(ref format) = config.format {
        OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    if config.request_timeout_secs == Some(0) {
        bail!(
            "Invalid config: request_timeout_secs must be greater than 0.\n\n\
             💡 Hint: Omit the field to use the default of 10 seconds."
        );
    }

    if let Some(attempts) = config.max_attempts {
        if attempts == 0 || attempts > MAX_ATTEMPTS_LIMIT {
            bail!(
                "Invalid config: max_attempts must be between 1 and {}, got {}.",
                MAX_ATTEMPTS_LIMIT,
                attempts
            );
        }
    }

    if let Some(ref methods) = config.methods {
        for (key, signature) in methods {
            Listing::from_str(key).map_err(|e| {
                anyhow::anyhow!("Invalid config: methods.{}: {}", key, e)
            })?;
            validate_signature(signature.trim()).map_err(|e| {
                anyhow::anyhow!(
                    "Invalid config: methods.{}: {}\n\n\
                     💡 Hint: Use an argument-less signature such as getStateData().",
                    key,
                    e
                )
            })?;
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
