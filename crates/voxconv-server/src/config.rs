//! Server configuration.
//!
//! Settings come from, in increasing priority:
//! 1. built-in defaults
//! 2. a JSON file (`VOXCONV_CONFIG`, or `voxconv.json` in the working directory)
//! 3. `VOXCONV_*` environment variables

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::logging::default_log_directory;

/// Config file read when `VOXCONV_CONFIG` is not set.
pub const DEFAULT_CONFIG_FILE: &str = "voxconv.json";

/// Default cap on a request body.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file {path}: {reason}")]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        reason: String,
    },

    /// The config file is not valid JSON for [`ServerConfig`].
    #[error("Failed to parse config file {path}: {reason}")]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying serde error.
        reason: String,
    },

    /// An environment variable holds an unusable value.
    #[error("Invalid value for {name}: {value}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Runtime settings for the conversion server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,
    /// Built UI bundle (trunk `dist/`), served at `/`.
    pub site_dir: PathBuf,
    /// Static files served at `/static`; converted audio goes to `audio/` inside it.
    pub static_dir: PathBuf,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
    /// Directory for rolling log files.
    pub log_directory: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            site_dir: PathBuf::from("crates/voxconv-ui/dist"),
            static_dir: PathBuf::from("static"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            log_directory: default_log_directory(),
        }
    }
}

impl ServerConfig {
    /// Load the configuration from the config file and process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os("VOXCONV_CONFIG")
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from);
        let config = Self::from_file(&path)?;
        config.apply_env(|name| std::env::var(name).ok())
    }

    /// Read `path` if it exists, otherwise return defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Override fields from variables returned by `lookup`.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("VOXCONV_BIND_ADDR") {
            self.bind_addr = value.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "VOXCONV_BIND_ADDR",
                value,
            })?;
        }
        if let Some(value) = lookup("VOXCONV_SITE_DIR") {
            self.site_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("VOXCONV_STATIC_DIR") {
            self.static_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("VOXCONV_MAX_UPLOAD_BYTES") {
            self.max_upload_bytes = value.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "VOXCONV_MAX_UPLOAD_BYTES",
                value,
            })?;
        }
        if let Some(value) = lookup("VOXCONV_LOG_DIR") {
            self.log_directory = PathBuf::from(value);
        }
        Ok(self)
    }

    /// Where converted audio files are written.
    pub fn output_dir(&self) -> PathBuf {
        self.static_dir.join("audio")
    }

    /// Set the static directory.
    #[must_use]
    pub fn with_static_dir(mut self, path: PathBuf) -> Self {
        self.static_dir = path;
        self
    }

    /// Set the UI bundle directory.
    #[must_use]
    pub fn with_site_dir(mut self, path: PathBuf) -> Self {
        self.site_dir = path;
        self
    }

    /// Set the request body cap.
    #[must_use]
    pub const fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }
}
