use axum::response::{IntoResponse, Response};

use super::AppError;

/// Fallback for unmatched paths.
pub async fn not_found() -> Response {
    AppError::NotFound("The requested resource was not found".to_string()).into_response()
}

/// Fallback for a matched path with an unsupported HTTP method.
pub async fn method_not_allowed() -> Response {
    AppError::MethodNotAllowed("The HTTP method is not allowed for this resource".to_string())
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_fallbacks_status() {
        assert_eq!(not_found().await.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            method_not_allowed().await.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
