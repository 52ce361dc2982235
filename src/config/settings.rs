//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration pointing at `localhost:8080` over the socket
//! transport.

use serde::Deserialize;

use crate::bridge::socket::ConnectionMode;
use crate::error::ConfigError;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Editor endpoint settings.
    #[serde(default)]
    pub host: HostConfig,

    /// Bridge behaviour settings.
    #[serde(default)]
    pub bridge: BridgeConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.address.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "host address must not be empty".to_string(),
            });
        }
        if self.bridge.timeout_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "bridge timeout must be at least 1ms".to_string(),
            });
        }
        Ok(())
    }
}

/// The editor's listening endpoint.
///
/// Read-only after startup; this is the only state shared across calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Hostname or IP the editor listens on.
    #[serde(default = "default_address")]
    pub address: String,

    /// Port the editor listens on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

fn default_address() -> String {
    "localhost".to_string()
}

const fn default_port() -> u16 {
    8080
}

/// Which transport variant talks to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Bidirectional WebSocket message transport.
    #[default]
    Socket,
    /// Request/response HTTP transport with fixed resource paths.
    Http,
}

/// Bridge behaviour settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    /// Transport variant: "socket" or "http".
    #[serde(default)]
    pub transport: TransportKind,

    /// Connection lifecycle for the socket transport: "ephemeral" or
    /// "persistent". Ignored by the HTTP transport.
    #[serde(default)]
    pub connection: ConnectionMode,

    /// Per-call timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::default(),
            connection: ConnectionMode::default(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

const fn default_timeout_ms() -> u64 {
    5000
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
