use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::locations::dtos::{
    LocationResponseDto, NearbyLocationDto, NearbyQueryParams, RecommendationRequestDto,
};
use crate::features::locations::models::{LocationId, NearbyQuery, RecommendationQuery};
use crate::features::locations::services::{LocationService, Recommendation};
use crate::shared::types::ApiResponse;

/// List locations near a position
///
/// Returns every location within `radius` kilometers (default 2) of
/// `lat`/`lon`, each with its tags. Results are unordered.
#[utoipa::path(
    get,
    path = "/api/locations",
    params(NearbyQueryParams),
    responses(
        (status = 200, description = "Nearby locations", body = ApiResponse<Vec<NearbyLocationDto>>),
        (status = 400, description = "Missing or non-numeric lat/lon/radius")
    ),
    tag = "locations"
)]
pub async fn list_nearby_locations(
    State(service): State<Arc<LocationService>>,
    AppQuery(params): AppQuery<NearbyQueryParams>,
) -> Result<Json<ApiResponse<Vec<NearbyLocationDto>>>> {
    let query = NearbyQuery::try_from(params)?;

    let locations = service.nearby(&query).await?;
    let dtos: Vec<NearbyLocationDto> = locations.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::list(
        dtos,
        "Nearby locations fetched successfully",
    )))
}

/// Recommend locations carrying all requested tags
///
/// A location matches when it lies within `radius` kilometers (default 5) of
/// `userLocation` and is tagged with every name in `tags`. No match is a
/// successful, empty response.
#[utoipa::path(
    post,
    path = "/api/locations/recommendations",
    request_body = RecommendationRequestDto,
    responses(
        (status = 200, description = "Recommended locations (possibly empty)", body = ApiResponse<Vec<LocationResponseDto>>),
        (status = 400, description = "Missing user location, invalid numbers, or empty tag list")
    ),
    tag = "locations"
)]
pub async fn recommend_locations(
    State(service): State<Arc<LocationService>>,
    AppJson(dto): AppJson<RecommendationRequestDto>,
) -> Result<Json<ApiResponse<Vec<LocationResponseDto>>>> {
    let query = RecommendationQuery::try_from(dto)?;

    let response = match service.recommend(&query).await? {
        Recommendation::Found(locations) => ApiResponse::list(
            locations.into_iter().map(Into::into).collect(),
            "Recommended locations fetched successfully",
        ),
        Recommendation::NoMatch => {
            ApiResponse::list(Vec::new(), "No locations found matching all selected tags")
        }
    };

    Ok(Json(response))
}

/// Get a location with all of its tags
#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    params(
        ("id" = i32, Path, description = "Location id")
    ),
    responses(
        (status = 200, description = "Location details", body = ApiResponse<LocationResponseDto>),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn get_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<LocationResponseDto>>> {
    let id: LocationId = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid location id '{}'", id)))?;

    let location = service.get_detail(id).await?;
    Ok(Json(ApiResponse::success(
        Some(location.into()),
        Some("Location details fetched successfully".to_string()),
        None,
    )))
}
