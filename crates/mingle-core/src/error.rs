use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Render the service-wide JSON error shape: `{"kind": .., "message": ..}`.
///
/// Every service error enum funnels through this in its `IntoResponse`
/// impl so clients see one body format regardless of which service failed.
pub fn error_response(status: StatusCode, kind: &str, message: &str) -> Response {
    let body = serde_json::json!({
        "kind": kind,
        "message": message,
    });
    (status, axum::Json(body)).into_response()
}
