//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//! Invalid settings are rejected at load time, never at runtime.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dashboard::TrendMode;
use crate::metrics::snapshot::{CONVERSION_MAX, CONVERSION_MIN};
use crate::metrics::MetricsSnapshot;
use crate::websocket::HubConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub simulator: SimulatorConfig,

    #[serde(default)]
    pub hub: HubConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8086
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8088".to_string(),
        "http://127.0.0.1:8088".to_string(),
    ]
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Metrics simulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,

    /// Fixed RNG seed; every view gets the same sequence when set
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub trend_mode: TrendMode,

    #[serde(default)]
    pub initial: MetricsSnapshot,
}

fn default_tick_interval() -> u64 {
    3000 // 3 seconds
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            seed: None,
            trend_mode: TrendMode::default(),
            initial: MetricsSnapshot::default(),
        }
    }
}

impl SimulatorConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

impl Config {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load from the first default location that exists, or the environment.
    ///
    /// Returns the file that was used, if any. A config file that exists but
    /// is invalid is an error.
    pub fn load_default() -> Result<(Self, Option<PathBuf>), ConfigError> {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("pulseboard").join("config.toml")),
            Some(PathBuf::from("/etc/pulseboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first of `paths` that exists, falling back to the environment
    pub fn load_first(paths: &[PathBuf]) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Ok((Self::load_with_env(path)?, Some(path.clone()))),
            None => Ok((Self::from_env()?, None)),
        }
    }

    /// Apply `PULSEBOARD_*` overrides read through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(host) = lookup("PULSEBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PULSEBOARD_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid PULSEBOARD_PORT"),
            }
        }

        // Simulator overrides
        if let Some(interval) = lookup("PULSEBOARD_TICK_INTERVAL_MS") {
            match interval.parse() {
                Ok(ms) => self.simulator.tick_interval_ms = ms,
                Err(_) => {
                    tracing::warn!(value = %interval, "Ignoring invalid PULSEBOARD_TICK_INTERVAL_MS")
                }
            }
        }
        if let Some(seed) = lookup("PULSEBOARD_SEED") {
            match seed.parse() {
                Ok(s) => self.simulator.seed = Some(s),
                Err(_) => tracing::warn!(value = %seed, "Ignoring invalid PULSEBOARD_SEED"),
            }
        }
        if let Some(mode) = lookup("PULSEBOARD_TREND_MODE") {
            match mode.parse() {
                Ok(m) => self.simulator.trend_mode = m,
                Err(e) => tracing::warn!(error = %e, "Ignoring invalid PULSEBOARD_TREND_MODE"),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("PULSEBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PULSEBOARD_LOG_FORMAT") {
            match format.parse() {
                Ok(f) => self.logging.format = f,
                Err(e) => tracing::warn!(error = %e, "Ignoring invalid PULSEBOARD_LOG_FORMAT"),
            }
        }
    }

    /// Reject settings the simulator or hub cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulator.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "simulator.tick_interval_ms must be greater than zero".to_string(),
            ));
        }

        let rate = self.simulator.initial.conversion_rate;
        if !rate.is_finite() || !(CONVERSION_MIN..=CONVERSION_MAX).contains(&rate) {
            return Err(ConfigError::Invalid(format!(
                "simulator.initial.conversion_rate must be within [{}, {}], got {}",
                CONVERSION_MIN, CONVERSION_MAX, rate
            )));
        }

        if self.hub.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "hub.max_connections must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Pulseboard Configuration
#
# Environment variables override these settings:
# - PULSEBOARD_HOST
# - PULSEBOARD_PORT
# - PULSEBOARD_TICK_INTERVAL_MS
# - PULSEBOARD_SEED
# - PULSEBOARD_TREND_MODE
# - PULSEBOARD_LOG_LEVEL
# - PULSEBOARD_LOG_FORMAT

[server]
# API server host
host = "0.0.0.0"

# API server port
port = 8086

# Allowed CORS origins
cors_origins = ["http://localhost:8088", "http://127.0.0.1:8088"]

# Request timeout in seconds
request_timeout_secs = 30

[simulator]
# How often each dashboard's KPIs move (ms, must be > 0)
tick_interval_ms = 3000

# Fixed RNG seed for reproducible feeds (omit for OS randomness)
# seed = 42

# Trend badges: "static" (fixed labels) or "derived" (change since last tick)
trend_mode = "static"

[simulator.initial]
# KPI values every new dashboard starts from
revenue = 45231
active_users = 2345
orders = 1234
# Percent, within [0, 10]
conversion_rate = 3.24

[hub]
# Maximum number of concurrently mounted dashboards
max_connections = 1000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/pulseboard/pulseboard.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.simulator.tick_interval(), Duration::from_millis(3000));
        assert_eq!(config.simulator.initial, MetricsSnapshot::default());
        assert_eq!(config.server.addr(), "0.0.0.0:8086");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.simulator.tick_interval_ms, 3000);
        assert_eq!(config.simulator.seed, None);
        assert_eq!(config.simulator.trend_mode, TrendMode::Static);
        assert_eq!(config.simulator.initial, MetricsSnapshot::default());
        assert_eq!(config.hub.max_connections, 1000);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [simulator]
            tick_interval_ms = 500
            trend_mode = "derived"

            [simulator.initial]
            revenue = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.simulator.tick_interval_ms, 500);
        assert_eq!(config.simulator.trend_mode, TrendMode::Derived);
        assert_eq!(config.simulator.initial.revenue, 10);
        assert_eq!(config.simulator.initial.active_users, 2345);
        assert_eq!(config.server.port, 8086);
    }

    #[test]
    fn test_load_first_reports_chosen_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let present = dir.path().join("config.toml");
        std::fs::write(&present, "[hub]\nmax_connections = 3\n").unwrap();

        let (config, used) = Config::load_first(&[missing.clone(), present.clone()]).unwrap();
        assert_eq!(used, Some(present));
        assert_eq!(config.hub.max_connections, 3);

        let (_, used) = Config::load_first(&[missing]).unwrap();
        assert_eq!(used, None);
    }

    #[test]
    fn test_counter_at_i64_limit_accepted() {
        let config: Config = toml::from_str("[simulator.initial]\nrevenue = 9223372036854775807").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.simulator.initial.revenue, i64::MAX);
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let mut config = Config::default();
        config.simulator.tick_interval_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_out_of_range_conversion_rejected() {
        let mut config = Config::default();
        config.simulator.initial.conversion_rate = 10.5;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.simulator.initial.conversion_rate = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_max_connections_rejected() {
        let mut config = Config::default();
        config.hub.max_connections = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PULSEBOARD_HOST", "127.0.0.1"),
            ("PULSEBOARD_PORT", "9000"),
            ("PULSEBOARD_TICK_INTERVAL_MS", "250"),
            ("PULSEBOARD_SEED", "7"),
            ("PULSEBOARD_TREND_MODE", "derived"),
            ("PULSEBOARD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.addr(), "127.0.0.1:9000");
        assert_eq!(config.simulator.tick_interval_ms, 250);
        assert_eq!(config.simulator.seed, Some(7));
        assert_eq!(config.simulator.trend_mode, TrendMode::Derived);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "PULSEBOARD_PORT" => Some("not-a-port".to_string()),
            "PULSEBOARD_TREND_MODE" => Some("sideways".to_string()),
            _ => None,
        });

        assert_eq!(config.server.port, 8086);
        assert_eq!(config.simulator.trend_mode, TrendMode::Static);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9100\n\n[simulator]\nseed = 99").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.simulator.seed, Some(99));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulator]\ntick_interval_ms = 0").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/pulseboard.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }
}
