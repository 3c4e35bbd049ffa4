//! # Axum Helpers
//!
//! Shared building blocks for the HimWays HTTP services.
//!
//! ## Modules
//!
//! - **[`envelope`]**: Uniform `{status, message, data}` response wrapper
//! - **[`errors`]**: `AppError`, rendered as an error envelope
//! - **[`extractors`]**: JSON, query and UUID path extractors that reject with envelopes
//! - **[`http`]**: CORS and security-header middleware
//! - **[`server`]**: Router construction, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(api_routes)?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &config.server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use envelope::{Envelope, EnvelopeBody, Message, Outcome};
pub use errors::AppError;
pub use extractors::{JsonBody, QueryParams, UuidPath, ValidatedJson};
pub use server::{
    HealthCheckFuture, HealthResponse, ReadyResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks,
};
