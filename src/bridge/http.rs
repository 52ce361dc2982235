//! HTTP transport to the editor.
//!
//! The historical request/response variant of the protocol. It exposes a
//! handful of fixed resource paths rather than the full slot schema:
//!
//! - `GET /ping` — connectivity check, plaintext reply
//! - `GET /console` — console log, plaintext
//! - `GET /hierarchy` — scene tree description, plaintext
//! - `POST /execute` — everything else, JSON body `{action, name, position}`
//!
//! Plaintext responses are wrapped into the shared [`Reply`] model so the
//! dispatcher and interpreter do not care which transport is configured.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;

use crate::error::BridgeError;

use super::session::Transport;
use super::wire::{Command, Reply, Vector3};

/// HTTP transport speaking the fixed-path editor API.
pub struct HttpTransport {
    /// `host:port`, used in error messages.
    addr: String,
    /// Base URL, `http://host:port`.
    base: String,
    client: Client,
}

/// JSON body of a `POST /execute` request.
#[derive(Debug, Serialize, PartialEq)]
struct ExecuteBody<'a> {
    action: &'a str,
    name: Option<&'a str>,
    position: Option<Vector3>,
}

/// Where a command is routed on the HTTP API.
#[derive(Debug, PartialEq)]
enum Route<'a> {
    /// Plain GET to a fixed path.
    Get(&'static str),
    /// POST to `/execute` with a JSON body.
    Execute(ExecuteBody<'a>),
}

/// Maps a command's method onto its HTTP route.
///
/// Methods without a dedicated path fall through to the generic execute
/// endpoint, which only carries the action, name and position slots; the
/// remaining slots have no HTTP representation.
fn route_for(command: &Command) -> Route<'_> {
    match command.method.as_str() {
        "Ping" => Route::Get("/ping"),
        "ReadConsole" => Route::Get("/console"),
        "GetHierarchy" => Route::Get("/hierarchy"),
        _ => {
            let dropped = unrepresentable_slots(command);
            if !dropped.is_empty() {
                tracing::debug!(
                    method = %command.method,
                    slots = ?dropped,
                    "populated slots have no HTTP representation and were not sent"
                );
            }
            Route::Execute(ExecuteBody {
                action: &command.method,
                name: command.params.name.as_deref(),
                position: command.params.position,
            })
        }
    }
}

/// Names the populated slots that `/execute` cannot carry.
fn unrepresentable_slots(command: &Command) -> Vec<&'static str> {
    [
        command.params.string_param.as_ref().map(|_| "param_string"),
        command.params.second_param.as_ref().map(|_| "param_second"),
        command.params.value_param.as_ref().map(|_| "param_value"),
        command.params.rotation.map(|_| "param_rot"),
        command.params.scale.map(|_| "param_scale"),
    ]
    .into_iter()
    .flatten()
    .collect()
}

impl HttpTransport {
    /// Creates an HTTP transport for the editor at `host:port`.
    #[must_use]
    pub fn new(host: &str, port: u16) -> Self {
        let addr = format!("{host}:{port}");
        Self {
            base: format!("http://{addr}"),
            addr,
            client: Client::new(),
        }
    }

    fn classify(&self, error: &reqwest::Error, timeout: Duration) -> BridgeError {
        if error.is_timeout() {
            return BridgeError::Timeout {
                addr: self.addr.clone(),
                timeout,
            };
        }
        if error.is_connect() {
            return BridgeError::HostUnavailable {
                addr: self.addr.clone(),
                detail: error.to_string(),
            };
        }
        BridgeError::TransportLost {
            detail: error.to_string(),
        }
    }
}

impl Transport for HttpTransport {
    async fn round_trip(&self, command: &Command, timeout: Duration) -> Result<Reply, BridgeError> {
        let request = match route_for(command) {
            Route::Get(path) => self.client.get(format!("{}{path}", self.base)),
            Route::Execute(body) => {
                let json =
                    serde_json::to_string(&body).map_err(|e| BridgeError::MalformedReply {
                        detail: format!("failed to encode execute body: {e}"),
                    })?;
                self.client
                    .post(format!("{}/execute", self.base))
                    .header(CONTENT_TYPE, "application/json")
                    .body(json)
            }
        };

        let response = request
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| self.classify(&e, timeout))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.classify(&e, timeout))?;

        // The HTTP API replies in plaintext; fold it into the shared model.
        if status.is_success() {
            Ok(Reply::success(text))
        } else {
            Ok(Reply::error(format!("HTTP {status}: {text}")))
        }
    }
}
