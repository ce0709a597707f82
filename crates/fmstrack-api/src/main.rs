use std::env;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("FMSTRACK_BUCKET").unwrap_or_else(|_| "fmstrack".to_string());

    let s3 = fmstrack_storage::client::build_client().await;

    let state = AppState { s3, bucket };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        // Exercise catalog (fixed reference data)
        .route("/exercises", get(routes::exercises::list_exercises))
        .route("/exercises/{id}", get(routes::exercises::get_exercise))
        // Clients
        .route("/clients", get(routes::clients::list_clients))
        .route("/clients", post(routes::clients::create_client))
        .route("/clients/{id}", get(routes::clients::get_client))
        .route("/clients/{id}", put(routes::clients::update_client))
        .route("/clients/{id}", delete(routes::clients::delete_client))
        // Test records
        .route(
            "/test-records",
            post(routes::test_records::create_test_record),
        )
        .route(
            "/test-records/{id}",
            get(routes::test_records::get_test_record),
        )
        .route(
            "/test-records/{id}",
            delete(routes::test_records::delete_test_record),
        )
        .route(
            "/test-records/client/{client_id}",
            get(routes::test_records::list_client_test_records),
        )
        .layer(axum_mw::from_fn(middleware::requests::request_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
