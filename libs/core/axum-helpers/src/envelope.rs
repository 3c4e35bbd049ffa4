//! Uniform response envelope.
//!
//! Every response body has the same shape, whatever the outcome:
//!
//! ```json
//! { "status": 201, "message": "success", "data": { "data": { "_id": "..." } } }
//! { "status": 404, "message": "error", "data": { "data": "Bus with specified id not found!" } }
//! ```
//!
//! `status` always equals the transport status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};
use utoipa::ToSchema;

/// Short outcome label carried in the `message` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Message {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "validation error")]
    ValidationError,
}

/// Either the success payload or an error text, never both
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure { message: Message, error: String },
}

/// Response envelope: status code plus an [`Outcome`].
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    status: StatusCode,
    outcome: Outcome<T>,
}

impl<T> Envelope<T> {
    pub fn success(status: StatusCode, data: T) -> Self {
        Self {
            status,
            outcome: Outcome::Success(data),
        }
    }

    /// 200 OK with `data`
    pub fn ok(data: T) -> Self {
        Self::success(StatusCode::OK, data)
    }

    /// 201 Created with `data`
    pub fn created(data: T) -> Self {
        Self::success(StatusCode::CREATED, data)
    }

    pub fn failure(status: StatusCode, message: Message, error: impl Into<String>) -> Self {
        Self {
            status,
            outcome: Outcome::Failure {
                message,
                error: error.into(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> Message {
        match &self.outcome {
            Outcome::Success(_) => Message::Success,
            Outcome::Failure { message, .. } => *message,
        }
    }

    pub fn outcome(&self) -> &Outcome<T> {
        &self.outcome
    }

    pub fn into_outcome(self) -> Outcome<T> {
        self.outcome
    }
}

#[derive(Serialize)]
struct DataRef<'a, D: Serialize> {
    data: &'a D,
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Envelope", 3)?;
        state.serialize_field("status", &self.status.as_u16())?;
        state.serialize_field("message", &self.message())?;
        match &self.outcome {
            Outcome::Success(data) => state.serialize_field("data", &DataRef { data })?,
            Outcome::Failure { error, .. } => {
                state.serialize_field("data", &DataRef { data: error })?
            }
        }
        state.end()
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Wire shape of an [`Envelope`], for API documentation and for decoding
/// responses on the client side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnvelopeBody<T> {
    pub status: u16,
    pub message: Message,
    pub data: Data<T>,
}

/// The `{"data": ...}` wrapper inside an envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Data<T> {
    pub data: T,
}

impl<T> EnvelopeBody<T> {
    pub fn into_data(self) -> T {
        self.data.data
    }
}
