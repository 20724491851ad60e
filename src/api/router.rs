use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/models", get(handlers::models::list))
        .route("/api/model/:id", get(handlers::models::detail))
        .route("/api/comparison", get(handlers::comparison::comparison))
        .route("/api/health", get(handlers::health::health_check));

    let assets = ServeDir::new(&state.config.dashboard_dir);

    // Local dashboard tool: any origin may read
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::dashboard::index))
        .route("/metrics", get(handlers::metrics::render))
        .merge(api)
        .nest_service("/static", assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
