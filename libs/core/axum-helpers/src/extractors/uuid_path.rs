//! UUID path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Extractor for a single UUID path parameter.
///
/// A segment that is not a UUID is rejected with a 400 error envelope
/// instead of reaching the handler.
///
/// # Example
/// ```ignore
/// async fn get_bus(UuidPath(id): UuidPath) -> String {
///     format!("Bus ID: {}", id)
/// }
///
/// let app = Router::new().route("/bus/{bus_id}", get(get_bus));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state).await?;

        Uuid::parse_str(&id)
            .map(UuidPath)
            .map_err(|_| AppError::BadRequest(format!("Invalid id: {}", id)))
    }
}
