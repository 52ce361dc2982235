//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the editor bridge operations as tools to AI assistants. The
//! server communicates over stdio transport using JSON-RPC 2.0 messages;
//! each tool call becomes exactly one bridge exchange with the editor.
//!
//! # Protocol Version
//!
//! This implementation targets MCP protocol version 2024-11-05.

pub mod protocol;
pub mod server;
pub mod transport;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, MCP_PROTOCOL_VERSION};
pub use server::McpServer;
pub use transport::StdioTransport;
