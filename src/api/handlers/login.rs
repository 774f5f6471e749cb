//! Handler for the login endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, header},
};
use serde_json::{Value, json};
use tracing::debug;

use crate::api::dto::login::{LoginRequest, LoginResult};
use crate::error::AppError;
use crate::state::AppState;

/// Checks a username/password pair against the credential store.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Request Body
///
/// ```json
/// {
///   "username": "admin",
///   "password": "1234"
/// }
/// ```
///
/// # Response Codes
///
/// - **200 OK**: `{ "success": true, "message": "Login successful!" }`
/// - **401 Unauthorized**: `{ "success": false, "message": "Invalid credentials" }`,
///   also for missing fields, an empty or non-object body, or a body that is
///   not declared as JSON
/// - **400 Bad Request**: body declared as JSON but syntactically malformed
/// - **413 Payload Too Large**: body over the default request body limit
pub async fn login_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<LoginResult>, AppError> {
    let body = body.map_err(|e| AppError::body_rejected(e.status(), e.body_text()))?;
    let request = read_request(&headers, &body)?;

    state
        .auth_service
        .login(request.username.as_deref(), request.password.as_deref())
        .await?;

    Ok(Json(LoginResult::success()))
}

/// Decodes the request body. Bodies not declared as JSON and blank JSON
/// bodies carry no fields.
fn read_request(headers: &HeaderMap, body: &[u8]) -> Result<LoginRequest, AppError> {
    if !has_json_content_type(headers) {
        debug!("Login body is not declared as JSON, treating it as empty");
        return Ok(LoginRequest::default());
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(LoginRequest::default());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        AppError::bad_request("Malformed JSON body", json!({ "reason": e.to_string() }))
    })?;

    Ok(parse_request(value))
}

/// `application/json` or any `application/*+json` media type.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Reads the credential fields from a JSON object. Any other JSON value
/// carries no fields.
fn parse_request(body: Value) -> LoginRequest {
    match body {
        Value::Object(map) => serde_json::from_value(Value::Object(map)).unwrap_or_default(),
        other => {
            debug!(kind = json_kind(&other), "Login body is not an object");
            LoginRequest::default()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
