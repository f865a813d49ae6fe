//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `TWENTYFOUR_USERNAME`: Account username
//! - `TWENTYFOUR_PASSWORD`: Account password
//! - `TWENTYFOUR_APPLICATION_ID`: API application id
//! - `TWENTYFOUR_IDENTITY_ID`: Identity id (optional, defaults to nil GUID)
//! - `TWENTYFOUR_TIMEOUT_SECS`: Per-request timeout (optional)
//! - `TWENTYFOUR_CHUNK_SIZE`: Attachment chunk size in bytes (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml`
//! 2. `./twentyfour.json` or `./twentyfour.toml`
//! 3. The same names in the parent directory

use std::path::{Path, PathBuf};

use twentyfour_domain::{ClientConfig, Result, TwentyFourError};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `TwentyFourError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The credential variables must all be present; the rest falls back to
/// defaults.
///
/// # Errors
/// Returns `TwentyFourError::Config` if required variables are missing or
/// have invalid values.
pub fn load_from_env() -> Result<ClientConfig> {
    let username = env_var("TWENTYFOUR_USERNAME")?;
    let password = env_var("TWENTYFOUR_PASSWORD")?;
    let application_id = env_var("TWENTYFOUR_APPLICATION_ID")?;

    let mut config = ClientConfig::new(username, password, application_id);

    if let Ok(identity_id) = std::env::var("TWENTYFOUR_IDENTITY_ID") {
        config.identity_id = identity_id;
    }
    if let Ok(timeout) = std::env::var("TWENTYFOUR_TIMEOUT_SECS") {
        config.timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| TwentyFourError::Config(format!("Invalid timeout: {}", e)))?;
    }
    if let Ok(chunk_size) = std::env::var("TWENTYFOUR_CHUNK_SIZE") {
        config.chunk_size = chunk_size
            .parse::<usize>()
            .map_err(|e| TwentyFourError::Config(format!("Invalid chunk size: {}", e)))?;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `TwentyFourError::Config` if the file cannot be found, read or
/// parsed.
pub fn load_from_file(path: Option<&Path>) -> Result<ClientConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => probe_config_paths().ok_or_else(|| {
            TwentyFourError::Config("No configuration file found".to_string())
        })?,
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        TwentyFourError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|e| {
            TwentyFourError::Config(format!("Invalid JSON in {}: {}", path.display(), e))
        })?,
        Some("toml") => toml::from_str(&contents).map_err(|e| {
            TwentyFourError::Config(format!("Invalid TOML in {}: {}", path.display(), e))
        })?,
        other => {
            return Err(TwentyFourError::Config(format!(
                "Unsupported config format: {:?}",
                other
            )))
        }
    };

    tracing::info!(path = %path.display(), "Configuration loaded from file");
    Ok(config)
}

fn probe_config_paths() -> Option<PathBuf> {
    let candidates = [
        "config.json",
        "config.toml",
        "twentyfour.json",
        "twentyfour.toml",
        "../config.json",
        "../config.toml",
        "../twentyfour.json",
        "../twentyfour.toml",
    ];
    candidates.iter().map(PathBuf::from).find(|path| path.is_file())
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| TwentyFourError::Config(format!("Missing environment variable: {}", name)))
}
