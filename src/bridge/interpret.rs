//! Reply interpreter: converts a decoded reply into a caller-visible string.

use crate::error::BridgeError;

use super::wire::{Reply, ReplyStatus};

/// Result text used when the editor reports success without a result.
pub const DEFAULT_SUCCESS: &str = "Success";

/// Extracts the result string from a reply.
///
/// Unknown status values never reach this point; the codec rejects them at
/// decode time.
///
/// # Errors
///
/// Returns [`BridgeError::HostRejected`] when the editor reported an
/// application-level failure, carrying the editor's message.
pub fn interpret(reply: &Reply) -> Result<String, BridgeError> {
    match reply.status {
        ReplyStatus::Success => Ok(reply
            .result
            .clone()
            .unwrap_or_else(|| DEFAULT_SUCCESS.to_string())),
        ReplyStatus::Error => Err(BridgeError::HostRejected {
            message: reply
                .message
                .clone()
                .unwrap_or_else(|| "no message given".to_string()),
        }),
    }
}
