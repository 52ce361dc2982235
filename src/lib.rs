//! unity-bridge-mcp: MCP server bridging AI agents to a running Unity Editor.
//!
//! The bridge encodes each agent tool call as a fixed-schema wire message,
//! delivers it to the editor over a configurable transport and returns the
//! editor's answer as a single readable string.
//!
//! # Architecture
//!
//! - The **bridge core** does the protocol work: wire codec, transport
//!   session (WebSocket or HTTP, ephemeral or persistent), command
//!   dispatcher and reply interpreter.
//! - The **MCP surface** is a thin registration layer: it names the
//!   operations, validates their arguments and forwards them into the
//!   bridge.
//!
//! The editor itself (object creation, materials, the scene) is an external
//! collaborator; this crate only speaks its wire protocol.
//!
//! # Modules
//!
//! - [`bridge`] — Wire codec, transports, dispatcher, interpreter
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Error taxonomy
//! - [`mcp`] — MCP protocol implementation

pub mod bridge;
pub mod config;
pub mod error;
pub mod mcp;
