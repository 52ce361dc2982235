//! Transport session: one command out, one reply back.
//!
//! A [`Session`] owns a transport and a timeout and performs exactly one
//! request/response round trip per call. The protocol has no request-ID
//! correlation, so there is never more than one outstanding exchange per
//! connection; transports enforce that themselves (the persistent socket
//! holds a mutex for the duration of send + receive, the ephemeral socket
//! opens an independent connection per call).
//!
//! The bridge never retries; every failure is reported to the caller as a
//! distinct [`BridgeError`] variant and recovery is at the caller's
//! discretion.

use std::time::Duration;

use crate::error::BridgeError;

use super::http::HttpTransport;
use super::socket::SocketTransport;
use super::wire::{Command, Reply};

/// A transport capable of delivering one command and returning one reply.
///
/// Implementations own timeout handling so they can release or destroy the
/// underlying connection when a call is cancelled mid-exchange.
pub trait Transport {
    /// Delivers `command` and waits for the editor's reply.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::HostUnavailable`] — nothing listening at the address
    /// - [`BridgeError::Timeout`] — no reply within `timeout`
    /// - [`BridgeError::TransportLost`] — connection dropped mid-exchange
    /// - [`BridgeError::MalformedReply`] — reply arrived but did not decode
    fn round_trip(
        &self,
        command: &Command,
        timeout: Duration,
    ) -> impl std::future::Future<Output = Result<Reply, BridgeError>>;
}

/// Either of the two supported transports, selected at configuration time.
///
/// The dispatcher and interpreter are transport-agnostic; only construction
/// cares which variant is in use.
pub enum AnyTransport {
    /// Bidirectional WebSocket message transport.
    Socket(SocketTransport),
    /// Request/response HTTP transport.
    Http(HttpTransport),
}

impl Transport for AnyTransport {
    async fn round_trip(&self, command: &Command, timeout: Duration) -> Result<Reply, BridgeError> {
        match self {
            Self::Socket(socket) => socket.round_trip(command, timeout).await,
            Self::Http(http) => http.round_trip(command, timeout).await,
        }
    }
}

/// A session binds a transport to a configured timeout.
pub struct Session<T = AnyTransport> {
    transport: T,
    timeout: Duration,
}

impl<T: Transport> Session<T> {
    /// Creates a session over `transport` with the given per-call timeout.
    pub const fn new(transport: T, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    /// Performs one command/reply exchange.
    ///
    /// # Errors
    ///
    /// Propagates the transport's [`BridgeError`] taxonomy unchanged.
    pub async fn call(&self, command: &Command) -> Result<Reply, BridgeError> {
        tracing::debug!(method = %command.method, "sending command");
        let reply = self.transport.round_trip(command, self.timeout).await;
        match &reply {
            Ok(reply) => tracing::debug!(status = ?reply.status, "reply received"),
            Err(error) => tracing::debug!(%error, "exchange failed"),
        }
        reply
    }
}
