//! Buses API routes

use axum::Router;
use domain_buses::{BusService, MongoBusRepository, handlers};

use crate::state::AppState;

/// Create the buses router over the `Bus` collection
pub fn router(state: &AppState) -> Router {
    let repository = MongoBusRepository::new(&state.db);
    let service = BusService::new(repository).with_store_timeout(state.config.store_timeout);

    handlers::router(service)
}
