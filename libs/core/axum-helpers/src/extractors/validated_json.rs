//! JSON extractor with automatic validation using the validator crate.

use super::JsonBody;
use crate::errors::AppError;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that also runs [`Validate`].
///
/// Decode failures are rejected as 400 `"error"` envelopes; validation
/// failures as 400 `"validation error"` envelopes carrying the validator's
/// message.
///
/// # Example
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateBus {
///     #[validate(length(min = 1))]
///     plate: String,
/// }
///
/// async fn create(ValidatedJson(input): ValidatedJson<CreateBus>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(data) = JsonBody::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{EnvelopeBody, Message};
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[serde(default)]
        #[validate(length(min = 1))]
        plate: String,
    }

    async fn handler(ValidatedJson(payload): ValidatedJson<Payload>) -> String {
        payload.plate
    }

    async fn send(body: &'static str) -> (StatusCode, EnvelopeBody<String>) {
        let app = Router::new().route("/", post(handler));
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let (status, body) = send("{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, Message::Error);
        assert!(!body.into_data().is_empty());
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let (status, body) = send("{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, Message::ValidationError);
        assert!(body.into_data().contains("plate"));
    }
}
