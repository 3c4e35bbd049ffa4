//! Shared application state passed to the route builders.

use mongodb::{Client, Database};

/// Cloned per router (the MongoDB handles share one connection pool)
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    pub mongo_client: Client,
    /// The HimWays database
    pub db: Database,
}
