//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Every setting has a default, so the dashboard runs with no config file
//! and no environment at all.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Remote launch table used when nothing else is configured
pub const DEFAULT_DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the launch table comes from
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_url")]
    pub url: String,

    /// Local CSV; takes precedence over `url` when set
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_dataset_url() -> String {
    DEFAULT_DATASET_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            url: default_dataset_url(),
            path: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Chart snapshot output
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,

    #[serde(default = "default_write_snapshots")]
    pub write_snapshots: bool,
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_write_snapshots() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            write_snapshots: default_write_snapshots(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Nothing is logged here: callers install their subscriber from the
    /// returned config first, then call [`ConfigLoad::report`].
    pub fn load_default() -> ConfigLoad {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("launchdash").join("config.toml")),
            Some(PathBuf::from("/etc/launchdash/config.toml")),
            Some(PathBuf::from("./launchdash.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first readable file among `paths`, recording every file
    /// that exists but fails to load
    pub fn load_first(paths: &[PathBuf]) -> ConfigLoad {
        let mut failures = Vec::new();

        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        return ConfigLoad {
                            config,
                            source: Some(path.clone()),
                            failures,
                        }
                    }
                    Err(e) => failures.push(e),
                }
            }
        }

        ConfigLoad {
            config: Self::from_env(),
            source: None,
            failures,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("LAUNCHDASH_DATASET_URL") {
            self.dataset.url = url;
        }
        if let Some(path) = lookup("LAUNCHDASH_DATASET_PATH") {
            self.dataset.path = Some(path);
        }

        if let Some(host) = lookup("LAUNCHDASH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("LAUNCHDASH_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Some(dir) = lookup("LAUNCHDASH_OUTPUT_DIR") {
            self.output.dir = dir;
        }
        if let Some(write) = lookup("LAUNCHDASH_WRITE_SNAPSHOTS") {
            self.output.write_snapshots = write.to_lowercase() != "false" && write != "0";
        }

        if let Some(level) = lookup("LAUNCHDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LAUNCHDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Outcome of searching the default config locations
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that exist but could not be read or parsed
    pub failures: Vec<ConfigError>,
}

impl ConfigLoad {
    /// Log where the config came from and every file that was skipped
    pub fn report(&self) {
        for failure in &self.failures {
            tracing::warn!("Ignoring config file: {}", failure);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# launchdash configuration
#
# Environment variables override these settings:
# - LAUNCHDASH_DATASET_URL
# - LAUNCHDASH_DATASET_PATH
# - LAUNCHDASH_HOST
# - LAUNCHDASH_PORT
# - LAUNCHDASH_OUTPUT_DIR
# - LAUNCHDASH_WRITE_SNAPSHOTS
# - LAUNCHDASH_LOG_LEVEL
# - LAUNCHDASH_LOG_FORMAT

[dataset]
# Launch records CSV, fetched once at startup
url = "{url}"

# Read a local CSV instead of fetching `url`
# path = "./spacex_launch_dash.csv"

# Timeout for the startup fetch (seconds)
request_timeout_secs = 30

[server]
host = "127.0.0.1"
port = 8050

[output]
# Directory for success_pie_chart.html and success_payload_scatter_chart.html
dir = "."

# Overwrite the snapshot files every time a chart is redrawn
write_snapshots = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        url = DEFAULT_DATASET_URL
    )
}
