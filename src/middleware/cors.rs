// CORS configuration
//
// The frontend is served from a different origin during development, so the
// posture is deliberately wide open: all origins, methods, and headers,
// with credentials. tower-http rejects the literal `*` origin combined with
// credentials, so `very_permissive()` mirrors the request origin instead,
// which has the same effect.

use axum::Router;
use tower_http::cors::CorsLayer;

pub fn apply_cors(router: Router) -> Router {
    router.layer(CorsLayer::very_permissive())
}
