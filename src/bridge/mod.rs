//! The command bridge: fixed-schema RPC to a running editor.
//!
//! Control flow for one call:
//!
//! ```text
//! caller ──▶ dispatch (build Command)
//!        ──▶ wire     (encode to the fixed slot schema)
//!        ──▶ session  (one connection, one exchange, one reply)
//!        ──▶ wire     (decode the reply)
//!        ──▶ interpret (success text or typed error)
//!        ──▶ caller   (always a string at the outer boundary)
//! ```
//!
//! Errors stay typed ([`crate::error::BridgeError`]) until the [`Bridge`]
//! facade, where they become descriptive strings: the calling agent expects
//! a textual answer for every invocation, so nothing here raises a
//! top-level fault.

pub mod dispatch;
pub mod http;
pub mod interpret;
pub mod session;
pub mod socket;
pub mod wire;

pub use session::{AnyTransport, Session, Transport};
pub use wire::{Command, Reply, Vector3};

use std::time::Duration;

use crate::config::{Config, TransportKind};
use crate::error::BridgeError;

use http::HttpTransport;
use socket::SocketTransport;

/// The caller-facing bridge: a session plus the string boundary.
pub struct Bridge {
    session: Session<AnyTransport>,
}

impl Bridge {
    /// Creates a bridge over an already-constructed session.
    #[must_use]
    pub const fn new(session: Session<AnyTransport>) -> Self {
        Self { session }
    }

    /// Builds the bridge described by the configuration.
    ///
    /// The host address is explicit constructor input here, not process
    /// state, so bridges to different editors can coexist.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let transport = match config.bridge.transport {
            TransportKind::Socket => AnyTransport::Socket(SocketTransport::new(
                &config.host.address,
                config.host.port,
                config.bridge.connection,
            )),
            TransportKind::Http => {
                AnyTransport::Http(HttpTransport::new(&config.host.address, config.host.port))
            }
        };
        let timeout = Duration::from_millis(config.bridge.timeout_ms);
        Self::new(Session::new(transport, timeout))
    }

    /// Performs one exchange and interprets the reply.
    ///
    /// # Errors
    ///
    /// Returns the full [`BridgeError`] taxonomy: transport failures from
    /// the session and [`BridgeError::HostRejected`] from the interpreter.
    pub async fn run(&self, command: &Command) -> Result<String, BridgeError> {
        let reply = self.session.call(command).await?;
        interpret::interpret(&reply)
    }

    /// Performs one exchange and always returns a string.
    ///
    /// This is the outer contract: transport failures and editor rejections
    /// alike come back as readable text, never as a fault.
    pub async fn execute(&self, command: &Command) -> String {
        match self.run(command).await {
            Ok(result) => result,
            Err(error) => error.to_string(),
        }
    }
}
