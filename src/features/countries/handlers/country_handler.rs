use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::countries::dtos::CountryResponseDto;
use crate::features::countries::services::CountryService;
use crate::shared::types::ApiResponse;

/// List all countries
#[utoipa::path(
    get,
    path = "/api/countries",
    responses(
        (status = 200, description = "Countries ordered by name", body = ApiResponse<Vec<CountryResponseDto>>),
    ),
    tag = "countries"
)]
pub async fn list_countries(
    State(service): State<Arc<CountryService>>,
) -> Result<Json<ApiResponse<Vec<CountryResponseDto>>>> {
    let countries = service.list().await?;
    Ok(Json(ApiResponse::list(
        countries,
        "Countries retrieved successfully",
    )))
}
