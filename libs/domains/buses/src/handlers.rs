use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
use axum_helpers::{
    Envelope, EnvelopeBody, JsonBody, QueryParams, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        ValidationErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::BusResult;
use crate::filter::{BusChanges, BusFilter};
use crate::models::{Bus, BusQuery, CreateBus, UpdateBus};
use crate::repository::BusRepository;
use crate::service::{BusService, DELETED_MESSAGE};

/// OpenAPI documentation for the bus endpoints
#[derive(OpenApi)]
#[openapi(
    paths(create_bus, search_buses, get_bus, edit_bus, delete_bus),
    components(
        schemas(Bus, CreateBus, UpdateBus),
        responses(
            BadRequestResponse,
            ValidationErrorResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Buses", description = "Bus management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the bus router with all HTTP endpoints
pub fn router<R: BusRepository + 'static>(service: BusService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/bus/create", post(create_bus))
        .route("/bus/search", get(search_buses))
        .route(
            "/bus/{bus_id}",
            get(get_bus).put(edit_bus).delete(delete_bus),
        )
        .with_state(shared_service)
}

/// Create a new bus
#[utoipa::path(
    post,
    path = "/bus/create",
    tag = "Buses",
    request_body = CreateBus,
    responses(
        (status = 201, description = "Bus created", body = EnvelopeBody<Bus>),
        (status = 400, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_bus<R: BusRepository>(
    State(service): State<Arc<BusService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateBus>,
) -> BusResult<Envelope<Bus>> {
    let bus = service.create_bus(input).await?;
    Ok(Envelope::created(bus))
}

/// Search buses by exact field match; empty parameters are ignored and a
/// repeated parameter keeps its first value
#[utoipa::path(
    get,
    path = "/bus/search",
    tag = "Buses",
    params(BusQuery),
    responses(
        (status = 200, description = "Matching buses", body = EnvelopeBody<Vec<Bus>>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_buses<R: BusRepository>(
    State(service): State<Arc<BusService<R>>>,
    QueryParams(pairs): QueryParams<Vec<(String, String)>>,
) -> BusResult<Envelope<Vec<Bus>>> {
    let query = BusQuery::from_pairs(pairs);
    let buses = service.search_buses(BusFilter::from(query)).await?;
    Ok(Envelope::ok(buses))
}

/// Get a bus by id
#[utoipa::path(
    get,
    path = "/bus/{bus_id}",
    tag = "Buses",
    params(
        ("bus_id" = Uuid, Path, description = "Bus ID")
    ),
    responses(
        (status = 200, description = "Bus found", body = EnvelopeBody<Bus>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_bus<R: BusRepository>(
    State(service): State<Arc<BusService<R>>>,
    UuidPath(id): UuidPath,
) -> BusResult<Envelope<Bus>> {
    let bus = service.get_bus(id).await?;
    Ok(Envelope::ok(bus))
}

/// Edit a bus; only non-empty fields are applied
#[utoipa::path(
    put,
    path = "/bus/{bus_id}",
    tag = "Buses",
    params(
        ("bus_id" = Uuid, Path, description = "Bus ID")
    ),
    request_body = UpdateBus,
    responses(
        (status = 200, description = "Bus updated", body = EnvelopeBody<Bus>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn edit_bus<R: BusRepository>(
    State(service): State<Arc<BusService<R>>>,
    UuidPath(id): UuidPath,
    JsonBody(input): JsonBody<UpdateBus>,
) -> BusResult<Envelope<Bus>> {
    let bus = service.update_bus(id, BusChanges::from(input)).await?;
    Ok(Envelope::ok(bus))
}

/// Delete a bus
#[utoipa::path(
    delete,
    path = "/bus/{bus_id}",
    tag = "Buses",
    params(
        ("bus_id" = Uuid, Path, description = "Bus ID")
    ),
    responses(
        (status = 200, description = "Bus deleted", body = EnvelopeBody<String>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_bus<R: BusRepository>(
    State(service): State<Arc<BusService<R>>>,
    UuidPath(id): UuidPath,
) -> BusResult<Envelope<&'static str>> {
    service.delete_bus(id).await?;
    Ok(Envelope::ok(DELETED_MESSAGE))
}
