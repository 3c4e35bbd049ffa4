//! Reusable OpenAPI response types for the error envelope.

use serde::Serialize;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::{ToResponse, ToSchema};

use crate::envelope::Message;

/// Error envelope as documented in OpenAPI
#[derive(Serialize, ToSchema)]
pub struct ErrorEnvelope {
    pub status: u16,
    pub message: Message,
    pub data: ErrorData,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorData {
    /// Underlying error text
    pub data: String,
}

#[derive(ToResponse)]
#[response(
    description = "Bad Request - the body or path could not be decoded",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "message": "error",
        "data": { "data": "Failed to parse the request body as JSON: expected value at line 1 column 1" }
    })
)]
pub struct BadRequestResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - required fields are missing",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "message": "validation error",
        "data": { "data": "plate: length" }
    })
)]
pub struct ValidationErrorResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "status": 404,
        "message": "error",
        "data": { "data": "Bus with specified id not found!" }
    })
)]
pub struct NotFoundResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error - the document store call failed",
    content_type = "application/json",
    example = json!({
        "status": 500,
        "message": "error",
        "data": { "data": "Server selection timeout: No available servers" }
    })
)]
pub struct InternalServerErrorResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable",
    content_type = "application/json",
    example = json!({
        "status": 503,
        "message": "error",
        "data": { "data": "not ready: mongodb" }
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorEnvelope);
