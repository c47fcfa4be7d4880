//! Configuration loading and constants.
//!
//! Settings come from built-in defaults, an optional TOML file, and finally
//! command-line flags (the port flag may also come from `PORT`).
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// Response Constants
// =============================================================================

/// Literal status reported by the health probe
pub const HEALTH_STATUS: &str = "healthy";

/// Service version reported by the health probe
pub const SERVICE_VERSION: &str = "1.0.0";

/// Greeting returned by `GET /`
pub const GREETING: &str = "Hello, World! Welcome to the Flask App.";

/// Resolved `axum` version, read from Cargo.lock by the build script
pub const FRAMEWORK_VERSION: &str = env!("PROBE_AXUM_VERSION");

/// Compiler version captured by the build script
pub const RUNTIME_VERSION: &str = env!("PROBE_RUSTC_VERSION");

/// Value for the `server` response header
pub const SERVER_HEADER: &str = formatcp!("probe-service/{}", SERVICE_VERSION);

/// Probes must never be served from an intermediate cache
pub const CACHE_CONTROL_PROBE: &str = "no-store";

/// Hostname reported when the OS lookup fails
pub const UNKNOWN_HOSTNAME: &str = "unknown";

// =============================================================================
// Defaults
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Environment variable selecting the `environment` field of `/info`
pub const DEFAULT_ENVIRONMENT_VAR: &str = "APP_ENV";

/// Reported environment when the variable is unset or empty
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "probe_service=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Application-level settings
    #[serde(default)]
    pub app: AppSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Name of the environment variable read by `/info`
    #[serde(default = "AppSettings::default_environment_var")]
    pub environment_var: String,
    /// Fallback when that variable is unset or empty
    #[serde(default = "AppSettings::default_environment")]
    pub default_environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment_var: Self::default_environment_var(),
            default_environment: Self::default_environment(),
        }
    }
}

impl AppSettings {
    fn default_environment_var() -> String {
        DEFAULT_ENVIRONMENT_VAR.to_string()
    }

    fn default_environment() -> String {
        DEFAULT_ENVIRONMENT.to_string()
    }

    /// Resolve the deployment environment at call time.
    pub fn environment(&self) -> String {
        match std::env::var(&self.environment_var) {
            Ok(value) if !value.is_empty() => value,
            _ => self.default_environment.clone(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// When `required` is false a missing file yields the built-in defaults,
    /// which lets the service start with no configuration at all.
    pub fn load<P: AsRef<Path>>(path: P, required: bool) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line (or environment-fed) overrides on top of file settings.
    pub fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<u16>,
        log_format: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        if let Some(format) = log_format {
            self.logging.format = format;
        }
        self.validate()
    }

    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http.host, self.http.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("Invalid http.host or http.port: {}", e)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        match self.logging.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Unknown logging.format '{}', expected \"text\" or \"json\"",
                    other
                )))
            }
        }
        if self.app.environment_var.is_empty() {
            return Err(ConfigError::Validation(
                "app.environment_var must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
