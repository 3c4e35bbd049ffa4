use axum::{Router, extract::State, routing::get};
use core_config::AppInfo;
use futures::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use utoipa::ToSchema;

use crate::envelope::Envelope;
use crate::errors::AppError;

/// Liveness payload
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Readiness payload: overall state plus one entry per dependency
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub checks: BTreeMap<String, &'static str>,
}

/// A boxed future for health checks with a string error
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Runs multiple health checks concurrently and aggregates the results.
///
/// Returns a 200 envelope when every check passes and a 503 envelope naming
/// the failing dependencies otherwise.
///
/// # Example
/// ```ignore
/// let checks: Vec<(&str, HealthCheckFuture)> = vec![(
///     "mongodb",
///     Box::pin(async { check(&client).await.map_err(|e| e.to_string()) }),
/// )];
/// run_health_checks(checks).await
/// ```
pub async fn run_health_checks(
    checks: Vec<(&str, HealthCheckFuture<'_>)>,
) -> Result<Envelope<ReadyResponse>, AppError> {
    let names: Vec<_> = checks.iter().map(|(name, _)| name.to_string()).collect();
    let futures: Vec<_> = checks.into_iter().map(|(_, check)| check).collect();
    let results = join_all(futures).await;

    let mut statuses = BTreeMap::new();
    let mut failing = Vec::new();

    for (name, result) in names.into_iter().zip(results) {
        match result {
            Ok(()) => {
                statuses.insert(name, "connected");
            }
            Err(e) => {
                tracing::error!("Readiness check failed: {} error: {}", name, e);
                failing.push(name.clone());
                statuses.insert(name, "disconnected");
            }
        }
    }

    if failing.is_empty() {
        Ok(Envelope::ok(ReadyResponse {
            status: "ready",
            checks: statuses,
        }))
    } else {
        Err(AppError::ServiceUnavailable(format!(
            "not ready: {}",
            failing.join(", ")
        )))
    }
}

/// Liveness handler: always 200 while the process is serving.
pub async fn health_handler(State(app): State<AppInfo>) -> Envelope<HealthResponse> {
    Envelope::ok(HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    })
}

/// Router exposing `GET /health`.
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}
