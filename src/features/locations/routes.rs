use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Create routes for the location queries (public)
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/api/locations", get(handlers::list_nearby_locations))
        .route(
            "/api/locations/recommendations",
            post(handlers::recommend_locations),
        )
        .route("/api/locations/{id}", get(handlers::get_location))
        .with_state(service)
}
