//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Path prefix for nested domain docs (routes are mounted at the root)
const NEST_ROOT: &str = "";

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HimWays API",
        version = "0.1.0",
        description = "Bus registry for the HimWays transit system, backed by MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = NEST_ROOT, api = domain_buses::ApiDoc)
    ),
    tags(
        (name = "Buses", description = "Bus management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;
