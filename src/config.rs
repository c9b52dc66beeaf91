//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and applies environment
//! overrides. `AppConfig` is the root configuration struct. The admin secret
//! is resolved exactly once at startup and injected into handler state, so
//! request handling never reads the process environment.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "canary=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Log format value selecting structured JSON output
pub const LOG_FORMAT_JSON: &str = "json";

/// Environment variable holding the admin kill-switch secret.
/// Takes precedence over `[admin] api_key` in the config file.
pub const ADMIN_API_KEY_ENV: &str = "ADMIN_API_KEY";

/// Default listen address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 3001;

// =============================================================================
// Kill-Switch Timing
// =============================================================================

/// Delay between acknowledging an authorized kill request and calling
/// process-exit. Long enough for the response bytes to reach the client.
pub const EXIT_FLUSH_DELAY: Duration = Duration::from_millis(100);

/// Exit status used by the kill switch. Non-zero so an external supervisor
/// classifies the stop as a crash and restarts the process.
pub const KILL_EXIT_CODE: i32 = 1;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Admin kill-switch configuration
    #[serde(default)]
    pub admin: AdminConfig,
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
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Admin kill-switch configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminConfig {
    /// Shared secret required in the `x-api-key` header of kill requests.
    /// When unset the kill endpoint always answers 500.
    pub api_key: Option<String>,
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
}

impl AppConfig {
    /// Load configuration from a TOML file and apply environment overrides.
    ///
    /// The default config path is allowed to be absent (every field has a
    /// default); an explicitly chosen path that does not exist is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let mut config: AppConfig = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else if path == Path::new(DEFAULT_CONFIG_PATH) {
            AppConfig::default()
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                path.display()
            )));
        };

        // ADMIN_API_KEY env var wins over the config file
        if let Ok(key) = std::env::var(ADMIN_API_KEY_ENV) {
            if !key.is_empty() {
                config.admin.api_key = Some(key);
            }
        }

        Ok(config)
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
