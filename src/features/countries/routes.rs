use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::countries::handlers;
use crate::features::countries::services::CountryService;

/// Create routes for country reference data (public)
pub fn routes(service: Arc<CountryService>) -> Router {
    Router::new()
        .route("/api/countries", get(handlers::list_countries))
        .with_state(service)
}
