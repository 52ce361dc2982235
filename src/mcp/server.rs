//! MCP server exposing the editor bridge as agent tools.
//!
//! Lifecycle:
//!
//! 1. **Initialisation**: capability negotiation and version agreement
//! 2. **Operation**: tool calls, each one bridge exchange
//! 3. **Shutdown**: graceful termination on EOF or signal
//!
//! Every tool returns a single text content item. Bridge failures come back
//! as error-flagged text results, never as JSON-RPC faults: the agent
//! always gets a readable string for every invocation.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::bridge::{dispatch, Bridge};
use crate::error::DispatchError;
use crate::mcp::protocol::{
    ErrorCode, IncomingMessage, JsonRpcError, JsonRpcNotification, JsonRpcRequest,
    JsonRpcResponse, RequestId, MCP_PROTOCOL_VERSION, SERVER_NAME,
};
use crate::mcp::transport::StdioTransport;

/// Server state in the MCP lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for initialize request.
    AwaitingInit,
    /// Initialize received, waiting for initialized notification.
    Initialising,
    /// Ready for normal operation.
    Running,
    /// Shutdown in progress.
    ShuttingDown,
}

/// Server capabilities advertised during initialisation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServerCapabilities {
    /// Tool-related capabilities.
    pub tools: ToolCapabilities,
}

/// Tool-specific capabilities.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolCapabilities {
    /// Whether the tool list can change during the session.
    #[serde(rename = "listChanged", skip_serializing_if = "is_false")]
    pub list_changed: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if requires fn(&T) -> bool
const fn is_false(b: &bool) -> bool {
    !*b
}

/// Parameters for the initialize request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Protocol version requested by client.
    pub protocol_version: String,
    /// Client capabilities.
    #[serde(default)]
    pub capabilities: Value,
    /// Client information.
    #[serde(default)]
    pub client_info: Value,
}

/// A tool definition for the tools/list response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: Value,
}

/// Parameters for tools/call request.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    /// Name of the tool to call.
    pub name: String,
    /// Arguments for the tool.
    #[serde(default)]
    pub arguments: Value,
}

/// Content item in a tool call response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
}

/// Result of a tool call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
    /// Whether the tool call resulted in an error.
    #[serde(skip_serializing_if = "is_false")]
    pub is_error: bool,
}

impl ToolCallResult {
    /// Creates a successful text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Creates an error text result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: true,
        }
    }
}

/// The MCP server for the editor bridge.
pub struct McpServer {
    state: ServerState,
    transport: StdioTransport,
    /// Negotiated protocol version (set after initialisation).
    protocol_version: Option<String>,
    bridge: Bridge,
}

impl McpServer {
    /// Creates an MCP server over an already-configured bridge.
    #[must_use]
    pub fn new(bridge: Bridge) -> Self {
        Self {
            state: ServerState::AwaitingInit,
            transport: StdioTransport::new(),
            protocol_version: None,
            bridge,
        }
    }

    /// Returns the current server state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Runs the MCP server main loop with graceful shutdown handling.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn run(&mut self) -> std::io::Result<()> {
        self.run_with_shutdown().await
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(unix)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).map_err(std::io::Error::other)?;
        let mut sigterm = signal(SignalKind::terminate()).map_err(std::io::Error::other)?;

        loop {
            tokio::select! {
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(windows)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    tracing::info!("Received Ctrl+C, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Handles the result from transport read.
    ///
    /// Returns `true` if the server should shut down.
    async fn handle_transport_result(
        &mut self,
        line_result: std::io::Result<Option<String>>,
    ) -> std::io::Result<bool> {
        let Some(line) = line_result? else {
            self.state = ServerState::ShuttingDown;
            return Ok(true);
        };

        if line.trim().is_empty() {
            return Ok(false);
        }

        self.handle_line(&line).await?;

        Ok(self.state == ServerState::ShuttingDown)
    }

    /// Handles a single line of input.
    async fn handle_line(&mut self, line: &str) -> std::io::Result<()> {
        use crate::mcp::protocol::parse_message;

        match parse_message(line) {
            Ok(msg) => self.handle_message(msg).await,
            Err(error) => self.transport.write_error(&error).await,
        }
    }

    /// Handles a parsed incoming message.
    async fn handle_message(&mut self, msg: IncomingMessage) -> std::io::Result<()> {
        match msg {
            IncomingMessage::Request(req) => self.handle_request(req).await,
            IncomingMessage::Notification(ref notif) => {
                self.handle_notification(notif);
                Ok(())
            }
        }
    }

    /// Handles an incoming request.
    async fn handle_request(&mut self, req: JsonRpcRequest) -> std::io::Result<()> {
        let response = match req.method.as_str() {
            "initialize" => self.handle_initialize(&req),
            "tools/list" => self.handle_tools_list(&req),
            "tools/call" => self.handle_tools_call(&req).await,
            "ping" => Ok(Self::handle_ping(&req)),
            _ => Err(JsonRpcError::method_not_found(req.id.clone(), &req.method)),
        };

        match response {
            Ok(resp) => self.transport.write_response(&resp).await,
            Err(error) => self.transport.write_error(&error).await,
        }
    }

    /// Handles an incoming notification.
    fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        if notif.method == "notifications/initialized" && self.state == ServerState::Initialising {
            self.state = ServerState::Running;
        }
    }

    /// Handles the initialize request.
    fn handle_initialize(&mut self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        if self.state != ServerState::AwaitingInit {
            return Err(JsonRpcError::with_message(
                Some(req.id.clone()),
                ErrorCode::InvalidRequest,
                "Server already initialised",
            ));
        }

        let _params: InitializeParams = req
            .params
            .as_ref()
            .map(|p| serde_json::from_value(p.clone()))
            .transpose()
            .map_err(|e| {
                JsonRpcError::invalid_params(
                    req.id.clone(),
                    format!("Invalid initialize params: {e}"),
                )
            })?
            .ok_or_else(|| {
                JsonRpcError::invalid_params(req.id.clone(), "Missing initialize params")
            })?;

        let negotiated_version = MCP_PROTOCOL_VERSION.to_string();
        self.protocol_version = Some(negotiated_version.clone());
        self.state = ServerState::Initialising;

        let result = json!({
            "protocolVersion": negotiated_version,
            "capabilities": ServerCapabilities::default(),
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION"),
            },
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/list request.
    fn handle_tools_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let result = json!({
            "tools": Self::get_tool_definitions(),
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/call request.
    async fn handle_tools_call(
        &self,
        req: &JsonRpcRequest,
    ) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let params: ToolCallParams = req
            .params
            .as_ref()
            .map(|p| serde_json::from_value(p.clone()))
            .transpose()
            .map_err(|e| {
                JsonRpcError::invalid_params(
                    req.id.clone(),
                    format!("Invalid tool call params: {e}"),
                )
            })?
            .ok_or_else(|| {
                JsonRpcError::invalid_params(req.id.clone(), "Missing tool call params")
            })?;

        tracing::info!(tool = %params.name, "tool call");

        let result = self.call_tool(&params.name, &params.arguments).await;

        let result_value = serde_json::to_value(&result).map_err(|e| {
            JsonRpcError::with_message(
                Some(req.id.clone()),
                ErrorCode::InternalError,
                format!("Failed to serialise tool result: {e}"),
            )
        })?;

        Ok(JsonRpcResponse::success(req.id.clone(), result_value))
    }

    /// Handles the ping request.
    fn handle_ping(req: &JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::success(req.id.clone(), json!({}))
    }

    /// Requires that the server has completed initialisation.
    fn require_running(&self, id: &RequestId) -> Result<(), JsonRpcError> {
        if self.state == ServerState::Running {
            Ok(())
        } else {
            Err(JsonRpcError::with_message(
                Some(id.clone()),
                ErrorCode::InvalidRequest,
                "Server not initialised",
            ))
        }
    }

    /// Dispatches a tool call into the bridge.
    async fn call_tool(&self, name: &str, args: &Value) -> ToolCallResult {
        let command = match Self::build_command(name, args) {
            Ok(Some(command)) => command,
            Ok(None) => return ToolCallResult::error(format!("Unknown tool: {name}")),
            Err(message) => return ToolCallResult::error(message),
        };

        match self.bridge.run(&command).await {
            Ok(result) => ToolCallResult::text(result),
            Err(error) => ToolCallResult::error(error.to_string()),
        }
    }

    /// Builds the wire command for a tool call.
    ///
    /// Returns `Ok(None)` for unknown tool names and `Err` with a readable
    /// message when arguments are missing or malformed.
    fn build_command(
        name: &str,
        args: &Value,
    ) -> Result<Option<crate::bridge::Command>, String> {
        let command = match name {
            "ping_editor" => dispatch::ping(),
            "create_object" => {
                let object = req_str(args, "name")?;
                let position = spatial(args, "position")?;
                dispatch::create_object(object, position)
            }
            "delete_object" => dispatch::delete_object(req_str(args, "name")?),
            "set_transform" => {
                let object = req_str(args, "name")?;
                let position = spatial(args, "position")?;
                let rotation = spatial(args, "rotation")?;
                let scale = spatial(args, "scale")?;
                dispatch::set_transform(object, position, rotation, scale)
            }
            "create_material" => {
                let material = req_str(args, "name")?;
                let r = req_f64(args, "r")?;
                let g = req_f64(args, "g")?;
                let b = req_f64(args, "b")?;
                dispatch::create_material(material, r, g, b)
            }
            "set_component_property" => dispatch::set_component_property(
                req_str(args, "object")?,
                req_str(args, "component")?,
                req_str(args, "property")?,
                req_str(args, "value")?,
            ),
            "set_active" => {
                let object = req_str(args, "name")?;
                let active = args
                    .get("active")
                    .and_then(Value::as_bool)
                    .ok_or("Missing or invalid argument: active (boolean)")?;
                dispatch::set_active(object, active)
            }
            "execute_menu_item" => dispatch::execute_menu_item(req_str(args, "path")?),
            "run_script" => dispatch::run_script(req_str(args, "source")?),
            "get_hierarchy" => dispatch::get_hierarchy(),
            "read_console" => dispatch::read_console(),
            _ => return Ok(None),
        };
        Ok(Some(command))
    }

    /// Returns the tool definitions advertised by tools/list.
    fn get_tool_definitions() -> Vec<ToolDefinition> {
        let object_name = json!({"type": "string", "description": "Name of the scene object"});
        let axis = json!({"type": "number"});

        vec![
            ToolDefinition {
                name: "ping_editor".to_string(),
                description: "Checks that the Unity Editor is reachable.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {},
                }),
            },
            ToolDefinition {
                name: "create_object".to_string(),
                description: "Creates a new object in the scene, optionally at a position. \
                              Give all three of position_x/y/z or none."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "name": object_name,
                        "position_x": axis,
                        "position_y": axis,
                        "position_z": axis,
                    },
                    "required": ["name"],
                }),
            },
            ToolDefinition {
                name: "delete_object".to_string(),
                description: "Deletes an object from the scene.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "name": object_name,
                    },
                    "required": ["name"],
                }),
            },
            ToolDefinition {
                name: "set_transform".to_string(),
                description: "Sets an object's position, rotation (Euler degrees) and/or \
                              scale. Each triple is all-or-nothing; an omitted triple is \
                              left unchanged."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "name": object_name,
                        "position_x": axis, "position_y": axis, "position_z": axis,
                        "rotation_x": axis, "rotation_y": axis, "rotation_z": axis,
                        "scale_x": axis, "scale_y": axis, "scale_z": axis,
                    },
                    "required": ["name"],
                }),
            },
            ToolDefinition {
                name: "create_material".to_string(),
                description: "Creates a material with an RGB colour (components 0-1)."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "name": {"type": "string", "description": "Material name"},
                        "r": axis,
                        "g": axis,
                        "b": axis,
                    },
                    "required": ["name", "r", "g", "b"],
                }),
            },
            ToolDefinition {
                name: "set_component_property".to_string(),
                description: "Sets a property on a component of a scene object.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "object": {"type": "string", "description": "Name of the scene object"},
                        "component": {"type": "string", "description": "Component type name"},
                        "property": {"type": "string", "description": "Property to set"},
                        "value": {"type": "string", "description": "Value to assign, as text"},
                    },
                    "required": ["object", "component", "property", "value"],
                }),
            },
            ToolDefinition {
                name: "set_active".to_string(),
                description: "Activates or deactivates a scene object.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "name": object_name,
                        "active": {"type": "boolean"},
                    },
                    "required": ["name", "active"],
                }),
            },
            ToolDefinition {
                name: "execute_menu_item".to_string(),
                description: "Executes an editor menu item by its menu path, e.g. \
                              'GameObject/3D Object/Cube'."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "path": {"type": "string", "description": "Menu path"},
                    },
                    "required": ["path"],
                }),
            },
            ToolDefinition {
                name: "run_script".to_string(),
                description: "Runs a script inside the editor and returns its output."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "source": {"type": "string", "description": "Script source code"},
                    },
                    "required": ["source"],
                }),
            },
            ToolDefinition {
                name: "get_hierarchy".to_string(),
                description: "Returns the current scene hierarchy as a text tree.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {},
                }),
            },
            ToolDefinition {
                name: "read_console".to_string(),
                description: "Returns recent editor console log output.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {},
                }),
            },
        ]
    }
}

/// Extracts a required string argument.
fn req_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, String> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("Missing or invalid argument: {key} (string)"))
}

/// Extracts a required number argument.
fn req_f64(args: &Value, key: &str) -> Result<f64, String> {
    args.get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| format!("Missing or invalid argument: {key} (number)"))
}

/// Extracts an optional number argument, distinguishing absent from invalid.
fn opt_f64(args: &Value, key: &str) -> Result<Option<f64>, String> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| format!("Invalid argument: {key} (number)")),
    }
}

/// Assembles an optional spatial triple from `<prefix>_x/_y/_z` arguments.
///
/// Partial triples are rejected here, before any command exists, with the
/// dispatcher's own wording.
fn spatial(
    args: &Value,
    prefix: &'static str,
) -> Result<Option<crate::bridge::Vector3>, String> {
    let x = opt_f64(args, &format!("{prefix}_x"))?;
    let y = opt_f64(args, &format!("{prefix}_y"))?;
    let z = opt_f64(args, &format!("{prefix}_z"))?;

    dispatch::triple(prefix, x, y, z).map_err(|e: DispatchError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::Bridge;
    use crate::config::Config;

    fn test_server() -> McpServer {
        McpServer::new(Bridge::from_config(&Config::default()))
    }

    fn initialize_request(id: i64) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: RequestId::Number(id),
            method: "initialize".to_string(),
            params: Some(json!({"protocolVersion": MCP_PROTOCOL_VERSION})),
        }
    }

    fn initialized_notification() -> JsonRpcNotification {
        JsonRpcNotification {
            jsonrpc: "2.0".to_string(),
            method: "notifications/initialized".to_string(),
            params: None,
        }
    }

    #[test]
    fn initialize_moves_server_to_initialising() {
        let mut server = test_server();
        assert_eq!(server.state(), ServerState::AwaitingInit);

        let response = server.handle_initialize(&initialize_request(1)).unwrap();
        assert_eq!(server.state(), ServerState::Initialising);
        assert_eq!(response.result["protocolVersion"], MCP_PROTOCOL_VERSION);
        assert_eq!(response.result["serverInfo"]["name"], SERVER_NAME);
    }

    #[test]
    fn second_initialize_is_rejected() {
        let mut server = test_server();
        server.handle_initialize(&initialize_request(1)).unwrap();

        let error = server.handle_initialize(&initialize_request(2)).unwrap_err();
        assert_eq!(error.error.code, ErrorCode::InvalidRequest.code());
        // A botched re-initialize must not reset the lifecycle.
        assert_eq!(server.state(), ServerState::Initialising);
    }

    #[test]
    fn initialize_without_params_is_rejected() {
        let mut server = test_server();
        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: RequestId::Number(1),
            method: "initialize".to_string(),
            params: None,
        };

        let error = server.handle_initialize(&request).unwrap_err();
        assert_eq!(error.error.code, ErrorCode::InvalidParams.code());
        assert_eq!(server.state(), ServerState::AwaitingInit);
    }

    #[test]
    fn initialized_notification_promotes_to_running() {
        let mut server = test_server();
        server.handle_initialize(&initialize_request(1)).unwrap();
        assert_eq!(server.state(), ServerState::Initialising);

        server.handle_notification(&initialized_notification());
        assert_eq!(server.state(), ServerState::Running);
    }

    #[test]
    fn initialized_notification_is_ignored_before_initialize() {
        let mut server = test_server();

        server.handle_notification(&initialized_notification());
        assert_eq!(server.state(), ServerState::AwaitingInit);
    }

    #[test]
    fn requests_are_rejected_until_initialised() {
        let mut server = test_server();
        let id = RequestId::Number(5);

        // Before initialize.
        let error = server.require_running(&id).unwrap_err();
        assert_eq!(error.error.code, ErrorCode::InvalidRequest.code());

        // After initialize but before the initialized notification.
        server.handle_initialize(&initialize_request(1)).unwrap();
        assert!(server.require_running(&id).is_err());

        // After the full handshake.
        server.handle_notification(&initialized_notification());
        assert!(server.require_running(&id).is_ok());
    }

    #[test]
    fn tools_list_requires_running_state() {
        let mut server = test_server();
        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: RequestId::Number(3),
            method: "tools/list".to_string(),
            params: None,
        };

        assert!(server.handle_tools_list(&request).is_err());

        server.handle_initialize(&initialize_request(1)).unwrap();
        server.handle_notification(&initialized_notification());

        let response = server.handle_tools_list(&request).unwrap();
        let tools = response.result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 11);
    }

    #[test]
    fn tool_definitions_are_unique_and_schemad() {
        let tools = McpServer::get_tool_definitions();
        assert_eq!(tools.len(), 11);

        let mut names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), tools.len(), "tool names must be unique");

        for tool in &tools {
            assert_eq!(tool.input_schema["type"], "object");
            assert!(!tool.description.is_empty());
        }
    }

    #[test]
    fn build_command_maps_create_object() {
        let args = json!({"name": "Cube", "position_x": 1.0, "position_y": 2.0, "position_z": 3.0});
        let command = McpServer::build_command("create_object", &args)
            .unwrap()
            .unwrap();
        assert_eq!(command.method, "CreateObject");
        assert_eq!(command.params.name.as_deref(), Some("Cube"));
        assert!(command.params.position.is_some());
    }

    #[test]
    fn build_command_rejects_partial_triple() {
        let args = json!({"name": "Cube", "position_x": 1.0});
        let err = McpServer::build_command("create_object", &args).unwrap_err();
        assert!(err.contains("position"));
    }

    #[test]
    fn build_command_unknown_tool() {
        let result = McpServer::build_command("no_such_tool", &json!({})).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn build_command_missing_argument() {
        let err = McpServer::build_command("delete_object", &json!({})).unwrap_err();
        assert!(err.contains("name"));
    }

    #[test]
    fn build_command_set_active_bool() {
        let args = json!({"name": "Lamp", "active": false});
        let command = McpServer::build_command("set_active", &args)
            .unwrap()
            .unwrap();
        assert_eq!(command.params.string_param.as_deref(), Some("false"));
    }

    #[test]
    fn tool_result_serialisation() {
        let ok = ToolCallResult::text("done");
        let json = serde_json::to_string(&ok).unwrap();
        assert!(json.contains(r#""text":"done""#));
        assert!(!json.contains("isError"));

        let err = ToolCallResult::error("nope");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains(r#""isError":true"#));
    }
}
