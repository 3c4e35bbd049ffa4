//! API routes module

pub mod buses;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Create all API routes, mounted at the root by `axum_helpers::create_router`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(buses::router(state))
        .merge(health::router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{AppInfo, server::ServerConfig};
    use database::mongodb::MongoConfig;
    use http_body_util::BodyExt;
    use mongodb::{Client, options::ClientOptions};
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;

    /// State whose client points at a port nothing listens on
    async fn unreachable_state() -> AppState {
        let mut options = ClientOptions::parse("mongodb://127.0.0.1:1").await.unwrap();
        options.server_selection_timeout = Some(Duration::from_millis(100));
        let mongo_client = Client::with_options(options).unwrap();
        let db = mongo_client.database("HimWays");

        AppState {
            config: Config {
                app: AppInfo {
                    name: "himways_api",
                    version: "0.0.0",
                },
                mongodb: MongoConfig::new("mongodb://127.0.0.1:1"),
                server: ServerConfig::default(),
                environment: Environment::Development,
                store_timeout: Duration::from_secs(1),
            },
            mongo_client,
            db,
        }
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bus_routes_are_mounted_at_root() {
        let app = routes(&unreachable_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/bus/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_ready_reports_unreachable_store() {
        let app = routes(&unreachable_state().await);

        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = json_body(response).await;
        assert_eq!(body["message"], "error");
        assert!(body["data"]["data"].as_str().unwrap().contains("mongodb"));
    }

    #[tokio::test]
    async fn test_store_failure_is_server_error() {
        let app = routes(&unreachable_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/bus/search?number=101")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["status"], 500);
    }
}
