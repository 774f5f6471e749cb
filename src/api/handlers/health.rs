//! Handler for the root health check.

/// Plain text body returned by the health check.
pub const HEALTH_MESSAGE: &str = "Backend running!";

/// Confirms the service is running.
///
/// # Endpoint
///
/// `GET /`
///
/// Always responds **200 OK** with a plain text body, regardless of request
/// headers or body.
pub async fn health_handler() -> &'static str {
    HEALTH_MESSAGE
}
