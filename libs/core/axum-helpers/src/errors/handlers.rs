use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::Response,
};

use super::{ErrorCode, error_response};

/// Fallback handler for unmatched routes.
///
/// Responds with the standard envelope and the requested path and query in the message.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    tracing::info!(
        error_code = ErrorCode::RouteNotFound.code(),
        "No route for {} {}",
        method,
        uri
    );

    error_response(
        StatusCode::NOT_FOUND,
        format!("{} - {}", ErrorCode::RouteNotFound.default_message(), uri),
    )
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed.default_message(),
    )
}
