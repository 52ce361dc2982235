//! Error types for unity-bridge-mcp.
//!
//! The bridge distinguishes "cannot reach the editor" from "the editor
//! rejected the call". Each cause is a separate variant so tests can assert
//! on the taxonomy instead of string formats. All variants are converted to
//! plain result strings at the bridge boundary; none escape to the agent as
//! a protocol fault.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while exchanging a command with the editor.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Nothing is listening at the configured address.
    #[error("could not connect to the editor at {addr}: {detail}. Is the project open?")]
    HostUnavailable {
        /// The address that refused the connection.
        addr: String,
        /// The underlying connect failure.
        detail: String,
    },

    /// The editor accepted the connection but did not reply in time.
    #[error("no reply from the editor at {addr} within {}ms", timeout.as_millis())]
    Timeout {
        /// The address of the unresponsive editor.
        addr: String,
        /// The timeout that elapsed.
        timeout: Duration,
    },

    /// The connection dropped mid-exchange.
    #[error("connection to the editor was lost mid-exchange: {detail}")]
    TransportLost {
        /// What the transport reported when the connection dropped.
        detail: String,
    },

    /// A reply arrived but could not be decoded as the wire schema.
    #[error("the editor reply could not be understood: {detail}")]
    MalformedReply {
        /// Why decoding failed.
        detail: String,
    },

    /// The editor processed the command and reported an application error.
    #[error("Error: {message}")]
    HostRejected {
        /// The editor's error message, verbatim.
        message: String,
    },
}

/// Errors raised while mapping typed arguments onto the fixed wire slots.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// A spatial triple was given some but not all of its components.
    ///
    /// Partial triples are not representable on the wire; truncating them
    /// silently would send coordinates the caller never supplied.
    #[error("incomplete {slot} triple: supply all of x, y and z, or none")]
    PartialTriple {
        /// Which slot the triple was destined for.
        slot: &'static str,
    },
}

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}
