//! Wire codec for the fixed-schema editor protocol.
//!
//! The editor deserialises incoming messages with a fixed native struct
//! (`JsonUtility`-style): it cannot discover a variable schema, so every
//! command is flattened into the same handful of named slots. Slots a given
//! method does not use are sent as explicit JSON `null` — never omitted — so
//! the editor's decoder always finds every key.
//!
//! Wire message: `{method, param_name, param_string, param_second,
//! param_value, param_pos, param_rot, param_scale}`.
//! Reply: `{status, result?, message?}` with `status` one of `"success"`
//! or `"error"`.
//!
//! Encoding and decoding are pure; no I/O happens here.

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// A spatial triple: position, rotation (Euler degrees) or scale.
///
/// By wire convention the same shape also carries RGB colour triples, with
/// `(r, g, b)` riding in `(x, y, z)`. Any finite value is accepted; the
/// bridge imposes no bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component (or red channel, for colour triples).
    pub x: f64,
    /// Y component (or green channel).
    pub y: f64,
    /// Z component (or blue channel).
    pub z: f64,
}

impl Vector3 {
    /// Creates a vector from its three components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// The fixed set of wire parameter slots, each independently optional.
///
/// Every new editor operation must be squeezed into these slots by
/// convention; the schema itself never grows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet {
    /// Plain target name (object, material, ...).
    pub name: Option<String>,
    /// First free-form string payload (script body, menu path, boolean-as-text).
    pub string_param: Option<String>,
    /// Second free-form string (e.g. property name alongside a component name).
    pub second_param: Option<String>,
    /// Third free-form string (e.g. the value being assigned).
    pub value_param: Option<String>,
    /// Position triple; also carries RGB colour by convention.
    pub position: Option<Vector3>,
    /// Rotation triple, Euler degrees.
    pub rotation: Option<Vector3>,
    /// Scale triple.
    pub scale: Option<Vector3>,
}

/// A single request to the editor: a method name plus the fixed slots.
///
/// `method` is free text understood by the editor; the bridge does not
/// validate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// The operation the editor should perform.
    pub method: String,
    /// Slot values for this operation; unused slots stay absent.
    pub params: ParamSet,
}

impl Command {
    /// Starts a command for `method` with all slots absent.
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: ParamSet::default(),
        }
    }

    /// Sets the target name slot.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.params.name = Some(name.into());
        self
    }

    /// Sets the first free-form string slot.
    #[must_use]
    pub fn string_param(mut self, value: impl Into<String>) -> Self {
        self.params.string_param = Some(value.into());
        self
    }

    /// Sets the second free-form string slot.
    #[must_use]
    pub fn second_param(mut self, value: impl Into<String>) -> Self {
        self.params.second_param = Some(value.into());
        self
    }

    /// Sets the third free-form string slot.
    #[must_use]
    pub fn value_param(mut self, value: impl Into<String>) -> Self {
        self.params.value_param = Some(value.into());
        self
    }

    /// Sets the position slot; `None` leaves it absent.
    #[must_use]
    pub fn position(mut self, vector: Option<Vector3>) -> Self {
        self.params.position = vector;
        self
    }

    /// Sets the rotation slot; `None` leaves it absent.
    #[must_use]
    pub fn rotation(mut self, vector: Option<Vector3>) -> Self {
        self.params.rotation = vector;
        self
    }

    /// Sets the scale slot; `None` leaves it absent.
    #[must_use]
    pub fn scale(mut self, vector: Option<Vector3>) -> Self {
        self.params.scale = vector;
        self
    }
}

/// Reply status reported by the editor.
///
/// Any other value fails deserialisation, which surfaces as
/// [`BridgeError::MalformedReply`] at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    /// The editor executed the command.
    Success,
    /// The editor rejected the command.
    Error,
}

/// A decoded editor reply.
///
/// Exactly one of `result`/`message` is meaningful depending on `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Whether the editor executed or rejected the command.
    pub status: ReplyStatus,
    /// Result text on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Error text on rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Reply {
    /// Creates a success reply carrying `result`.
    #[must_use]
    pub fn success(result: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Success,
            result: Some(result.into()),
            message: None,
        }
    }

    /// Creates an error reply carrying `message`.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Error,
            result: None,
            message: Some(message.into()),
        }
    }
}

/// The flat wire representation of a [`Command`].
///
/// No `skip_serializing_if` here: absent slots must serialise as explicit
/// `null` so the editor's fixed-schema decoder always finds every key.
#[derive(Debug, Serialize, Deserialize)]
struct WireCommand {
    method: String,
    #[serde(default)]
    param_name: Option<String>,
    #[serde(default)]
    param_string: Option<String>,
    #[serde(default)]
    param_second: Option<String>,
    #[serde(default)]
    param_value: Option<String>,
    #[serde(default)]
    param_pos: Option<Vector3>,
    #[serde(default)]
    param_rot: Option<Vector3>,
    #[serde(default)]
    param_scale: Option<Vector3>,
}

impl From<&Command> for WireCommand {
    fn from(command: &Command) -> Self {
        Self {
            method: command.method.clone(),
            param_name: command.params.name.clone(),
            param_string: command.params.string_param.clone(),
            param_second: command.params.second_param.clone(),
            param_value: command.params.value_param.clone(),
            param_pos: command.params.position,
            param_rot: command.params.rotation,
            param_scale: command.params.scale,
        }
    }
}

impl From<WireCommand> for Command {
    fn from(wire: WireCommand) -> Self {
        Self {
            method: wire.method,
            params: ParamSet {
                name: wire.param_name,
                string_param: wire.param_string,
                second_param: wire.param_second,
                value_param: wire.param_value,
                position: wire.param_pos,
                rotation: wire.param_rot,
                scale: wire.param_scale,
            },
        }
    }
}

/// Encodes a command into its wire JSON frame.
///
/// # Errors
///
/// Returns [`BridgeError::MalformedReply`] only if serialisation itself
/// fails, which cannot happen for finite float values.
pub fn encode_command(command: &Command) -> Result<String, BridgeError> {
    serde_json::to_string(&WireCommand::from(command)).map_err(|e| BridgeError::MalformedReply {
        detail: format!("failed to encode command: {e}"),
    })
}

/// Decodes a wire JSON frame back into a command.
///
/// Used by the editor side of the protocol and by tests; the bridge itself
/// only encodes commands.
///
/// # Errors
///
/// Returns [`BridgeError::MalformedReply`] if the frame does not match the
/// wire schema.
pub fn decode_command(frame: &str) -> Result<Command, BridgeError> {
    let wire: WireCommand =
        serde_json::from_str(frame).map_err(|e| BridgeError::MalformedReply {
            detail: format!("invalid command frame: {e}"),
        })?;
    Ok(wire.into())
}

/// Encodes a reply into its wire JSON frame.
///
/// # Errors
///
/// Returns [`BridgeError::MalformedReply`] only if serialisation itself fails.
pub fn encode_reply(reply: &Reply) -> Result<String, BridgeError> {
    serde_json::to_string(reply).map_err(|e| BridgeError::MalformedReply {
        detail: format!("failed to encode reply: {e}"),
    })
}

/// Decodes an editor reply frame.
///
/// # Errors
///
/// Returns [`BridgeError::MalformedReply`] if the payload is not the expected
/// record shape or `status` is missing or unrecognised.
pub fn decode_reply(frame: &str) -> Result<Reply, BridgeError> {
    serde_json::from_str(frame).map_err(|e| BridgeError::MalformedReply {
        detail: format!("invalid reply frame: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_slots_encode_as_null() {
        let command = Command::new("GetHierarchy");
        let frame = encode_command(&command).unwrap();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();

        // Every slot key must be present, explicitly null when unused.
        for key in [
            "param_name",
            "param_string",
            "param_second",
            "param_value",
            "param_pos",
            "param_rot",
            "param_scale",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
            assert!(value[key].is_null(), "key {key} should be null");
        }
        assert_eq!(value["method"], "GetHierarchy");
    }

    #[test]
    fn populated_slots_round_trip() {
        let command = Command::new("SetTransform")
            .name("Player")
            .position(Some(Vector3::new(1.0, 2.0, 3.0)))
            .rotation(Some(Vector3::new(0.0, 90.0, 0.0)));

        let frame = encode_command(&command).unwrap();
        let decoded = decode_command(&frame).unwrap();
        assert_eq!(decoded, command);
    }

    #[test]
    fn absent_slots_decode_as_absent() {
        let frame = encode_command(&Command::new("Ping")).unwrap();
        let decoded = decode_command(&frame).unwrap();

        assert!(decoded.params.name.is_none());
        assert!(decoded.params.position.is_none());
        assert_ne!(
            decoded.params.position,
            Some(Vector3::new(0.0, 0.0, 0.0)),
            "absent triple must not decode as a zero vector"
        );
    }

    #[test]
    fn decode_success_reply() {
        let reply = decode_reply(r#"{"status":"success","result":"OK"}"#).unwrap();
        assert_eq!(reply.status, ReplyStatus::Success);
        assert_eq!(reply.result.as_deref(), Some("OK"));
    }

    #[test]
    fn decode_error_reply() {
        let reply = decode_reply(r#"{"status":"error","message":"Object not found"}"#).unwrap();
        assert_eq!(reply.status, ReplyStatus::Error);
        assert_eq!(reply.message.as_deref(), Some("Object not found"));
    }

    #[test]
    fn decode_rejects_unknown_status() {
        let err = decode_reply(r#"{"status":"maybe"}"#).unwrap_err();
        assert!(matches!(err, BridgeError::MalformedReply { .. }));
    }

    #[test]
    fn decode_rejects_missing_status() {
        let err = decode_reply(r#"{"result":"OK"}"#).unwrap_err();
        assert!(matches!(err, BridgeError::MalformedReply { .. }));
    }

    #[test]
    fn decode_rejects_non_json() {
        let err = decode_reply("not json at all").unwrap_err();
        assert!(matches!(err, BridgeError::MalformedReply { .. }));
    }

    #[test]
    fn reply_round_trip() {
        let reply = Reply::error("boom");
        let frame = encode_reply(&reply).unwrap();
        assert_eq!(decode_reply(&frame).unwrap(), reply);
    }
}
