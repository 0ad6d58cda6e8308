/// Centralized helpers for WebSocket and HTTP error responses.
///
/// Use these helpers to ensure all error messages are consistent, explicit, and include a code.
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;

use crate::server::game_session::messages::ServerWsMessage;

/// Sent verbatim if an error message itself fails to serialize.
const FALLBACK_ERROR: &str = r#"{"action":"Error","data":{"code":"INTERNAL","message":"Internal server error"}}"#;

/// Formats a WebSocket error message as a JSON string.
///
/// Same shape as `ServerWsMessage::Error`, so clients parse one error format.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_COMMAND").
/// - `message`: Human-readable error message (in English).
pub fn ws_error_message(code: &str, message: &str) -> String {
    serde_json::to_string(&ServerWsMessage::error(code, message))
        .unwrap_or_else(|_| FALLBACK_ERROR.to_string())
}

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code.
/// - `message`: Human-readable error message.
/// - `context`: Optional context string (e.g. the game id).
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let body = json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    });
    HttpResponse::build(status).json(body)
}
