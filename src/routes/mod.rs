//! API Routes
//!
//! - `POST /analyze` - Document analysis endpoint
//! - `GET /health` - Health check

pub mod analyze;
pub mod health;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors::apply_cors;
use crate::models::AppState;

/// Create the main application router with CORS and request tracing
/// applied.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let router = Router::new()
        .merge(analyze::router(state))
        .merge(health::router())
        .layer(TraceLayer::new_for_http());

    apply_cors(router)
}
