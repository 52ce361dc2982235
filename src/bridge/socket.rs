//! WebSocket transport to the editor.
//!
//! The socket transport sends one text frame per command and expects one
//! text frame back. Two connection lifecycles are supported:
//!
//! - **Ephemeral**: every call opens a fresh connection, performs one
//!   exchange and closes, on every exit path. Concurrent callers get
//!   concurrency through independent connections.
//! - **Persistent**: one long-lived connection is reused across calls. A
//!   mutex is held for the whole send + receive, so exchanges never
//!   interleave on the wire. After any failure or timeout the connection is
//!   dropped and the next call reconnects.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::error::BridgeError;

use super::session::Transport;
use super::wire::{self, Command, Reply};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Connection lifecycle for the socket transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionMode {
    /// Open, exchange once, close.
    #[default]
    Ephemeral,
    /// Keep one connection open across calls.
    Persistent,
}

/// WebSocket transport with a configurable connection lifecycle.
pub struct SocketTransport {
    /// `host:port`, used in error messages.
    addr: String,
    /// Full `ws://` URL for connecting.
    url: String,
    mode: ConnectionMode,
    /// The long-lived stream in persistent mode; never used in ephemeral
    /// mode. Locked for the full duration of one exchange.
    conn: Mutex<Option<WsStream>>,
}

impl SocketTransport {
    /// Creates a socket transport for the editor at `host:port`.
    #[must_use]
    pub fn new(host: &str, port: u16, mode: ConnectionMode) -> Self {
        let addr = format!("{host}:{port}");
        Self {
            url: format!("ws://{addr}"),
            addr,
            mode,
            conn: Mutex::new(None),
        }
    }

    async fn connect(&self) -> Result<WsStream, BridgeError> {
        match connect_async(self.url.as_str()).await {
            Ok((stream, _response)) => {
                tracing::debug!(addr = %self.addr, "websocket connected");
                Ok(stream)
            }
            Err(e) => Err(BridgeError::HostUnavailable {
                addr: self.addr.clone(),
                detail: e.to_string(),
            }),
        }
    }

    /// Sends one frame and waits for the next text reply, skipping control
    /// frames.
    async fn exchange(stream: &mut WsStream, frame: String) -> Result<Reply, BridgeError> {
        stream
            .send(Message::Text(frame))
            .await
            .map_err(|e| BridgeError::TransportLost {
                detail: e.to_string(),
            })?;

        loop {
            match stream.next().await {
                Some(Ok(Message::Text(text))) => return wire::decode_reply(&text),
                Some(Ok(Message::Binary(bytes))) => {
                    let text =
                        String::from_utf8(bytes).map_err(|e| BridgeError::MalformedReply {
                            detail: format!("reply frame is not UTF-8: {e}"),
                        })?;
                    return wire::decode_reply(&text);
                }
                // Control frames between request and reply are legal.
                Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => {}
                Some(Ok(Message::Close(_))) | None => {
                    return Err(BridgeError::TransportLost {
                        detail: "connection closed before a reply arrived".to_string(),
                    })
                }
                Some(Err(e)) => {
                    return Err(BridgeError::TransportLost {
                        detail: e.to_string(),
                    })
                }
            }
        }
    }

    async fn call_ephemeral(&self, frame: String, timeout: Duration) -> Result<Reply, BridgeError> {
        let exchange = async {
            let mut stream = self.connect().await?;
            let reply = Self::exchange(&mut stream, frame).await;
            // Close unconditionally, success or failure. A timeout drops the
            // whole future, which closes the socket on drop.
            stream.close(None).await.ok();
            reply
        };

        tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_elapsed| self.timeout_error(timeout))?
    }

    async fn call_persistent(
        &self,
        frame: String,
        timeout: Duration,
    ) -> Result<Reply, BridgeError> {
        // One in-flight exchange at a time: the lock spans send + receive.
        let mut guard = self.conn.lock().await;

        let outcome = tokio::time::timeout(timeout, async {
            if guard.is_none() {
                *guard = Some(self.connect().await?);
            }
            let Some(stream) = guard.as_mut() else {
                return Err(BridgeError::TransportLost {
                    detail: "connection vanished before the exchange".to_string(),
                });
            };
            Self::exchange(stream, frame).await
        })
        .await;

        match outcome {
            Ok(Ok(reply)) => Ok(reply),
            Ok(Err(error)) => {
                // Connection state is unknown after a failure; reconnect on
                // the next call.
                *guard = None;
                Err(error)
            }
            Err(_elapsed) => {
                *guard = None;
                Err(self.timeout_error(timeout))
            }
        }
    }

    fn timeout_error(&self, timeout: Duration) -> BridgeError {
        BridgeError::Timeout {
            addr: self.addr.clone(),
            timeout,
        }
    }
}

impl Transport for SocketTransport {
    async fn round_trip(&self, command: &Command, timeout: Duration) -> Result<Reply, BridgeError> {
        let frame = wire::encode_command(command)?;
        match self.mode {
            ConnectionMode::Ephemeral => self.call_ephemeral(frame, timeout).await,
            ConnectionMode::Persistent => self.call_persistent(frame, timeout).await,
        }
    }
}
