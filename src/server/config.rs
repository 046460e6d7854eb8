//! Server configuration file support
//!
//! Handles parsing of TOML configuration files and environment variable
//! overrides. Precedence, lowest first: defaults, config file, environment,
//! command-line flags (applied by the CLI).

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::validation::input::{DEFAULT_MAX_BODY_BYTES, DEFAULT_MAX_FIELD_BYTES, InputLimits};

/// Default listening port
pub const DEFAULT_PORT: u16 = 8888;

/// Default bind address
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variable naming a configuration file
pub const ENV_CONFIG_PATH: &str = "SCHEMA_VALIDATOR_CONFIG";

/// Environment variable for the bind address
pub const ENV_ADDRESS: &str = "SCHEMA_VALIDATOR_ADDRESS";

/// Environment variable for the listening port
pub const ENV_PORT: &str = "SCHEMA_VALIDATOR_PORT";

/// Environment variable for the request body limit
pub const ENV_MAX_BODY_BYTES: &str = "SCHEMA_VALIDATOR_MAX_BODY_BYTES";

/// Environment variable for the per-field size limit
pub const ENV_MAX_FIELD_BYTES: &str = "SCHEMA_VALIDATOR_MAX_FIELD_BYTES";

/// Environment variable for an on-disk asset directory
pub const ENV_ASSETS_DIR: &str = "SCHEMA_VALIDATOR_ASSETS_DIR";

/// Environment variable for the console log format
pub const ENV_LOG_FORMAT: &str = "SCHEMA_VALIDATOR_LOG_FORMAT";

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {0}: {1}")]
    ReadError(PathBuf, String),

    #[error("Failed to parse config: {0}")]
    ParseError(String),

    #[error("Failed to serialize config: {0}")]
    SerializationError(String),

    #[error("Invalid listen address {0}")]
    InvalidAddress(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Console log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact human-readable lines (default)
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Unknown log format: {}. Use 'compact' or 'json'.",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Listener configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    /// Address to bind to
    #[serde(default = "default_address")]
    pub address: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on time spent handling one request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Request size limits section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsSection {
    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Maximum size of the `schema` or `document` field in bytes
    #[serde(default = "default_max_field_bytes")]
    pub max_field_bytes: usize,
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

fn default_max_field_bytes() -> usize {
    DEFAULT_MAX_FIELD_BYTES
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
            max_field_bytes: default_max_field_bytes(),
        }
    }
}

/// Static asset configuration section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssetsSection {
    /// Serve the UI from this directory instead of the embedded bundle
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Logging configuration section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingSection {
    /// Console log format
    #[serde(default)]
    pub format: LogFormat,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub limits: LimitsSection,

    #[serde(default)]
    pub assets: AssetsSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

impl ServerConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration.
    ///
    /// Reads `path` if given, otherwise the file named by
    /// `SCHEMA_VALIDATOR_CONFIG` if set, otherwise starts from defaults.
    /// Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Load configuration, resolving variables through `lookup`
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_path = lookup(ENV_CONFIG_PATH).map(PathBuf::from);
        let path = path.map(Path::to_path_buf).or(env_path);

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_overrides(lookup);

        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Convert configuration to TOML string
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializationError(e.to_string()))
    }

    /// Apply overrides for the `SCHEMA_VALIDATOR_*` variables found by `lookup`.
    ///
    /// Values that fail to parse are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(address) = lookup(ENV_ADDRESS) {
            self.server.address = address;
        }

        if let Some(port) = lookup(ENV_PORT)
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
        }

        if let Some(size) = lookup(ENV_MAX_BODY_BYTES)
            && let Ok(size) = size.parse()
        {
            self.limits.max_body_bytes = size;
        }

        if let Some(size) = lookup(ENV_MAX_FIELD_BYTES)
            && let Ok(size) = size.parse()
        {
            self.limits.max_field_bytes = size;
        }

        if let Some(dir) = lookup(ENV_ASSETS_DIR) {
            self.assets.directory = Some(PathBuf::from(dir));
        }

        if let Some(format) = lookup(ENV_LOG_FORMAT)
            && let Ok(format) = format.parse()
        {
            self.logging.format = format;
        }
    }

    /// Socket address the server should bind to
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        let ip: IpAddr = self
            .server
            .address
            .trim_matches(|c| c == '[' || c == ']')
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(self.server.address.clone()))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// Per-request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }

    /// Field limits handed to the validation endpoint
    pub fn input_limits(&self) -> InputLimits {
        InputLimits {
            max_field_bytes: self.limits.max_field_bytes,
        }
    }
}

/// Generate a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# schema-validator configuration

[server]
# Address and port to listen on
address = "0.0.0.0"
port = 8888

# Seconds before an unfinished request is abandoned
request_timeout_secs = 30

[limits]
# Maximum request body size in bytes
max_body_bytes = 3145728

# Maximum size of the schema or document field in bytes
max_field_bytes = 1048576

[assets]
# Serve the UI from a directory instead of the embedded bundle
# directory = "ui/dist"

[logging]
# Console log format: "compact" (default) or "json"
format = "compact"
"#
}
