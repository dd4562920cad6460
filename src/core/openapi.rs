use utoipa::{Modify, OpenApi};

use crate::features::countries::{dtos as countries_dtos, handlers as countries_handlers};
use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::features::tags::{dtos as tags_dtos, handlers as tags_handlers};
use crate::shared::geo::GeoPoint;
use crate::shared::input::NumberOrString;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Locations
        locations_handlers::list_nearby_locations,
        locations_handlers::recommend_locations,
        locations_handlers::get_location,
        // Tags
        tags_handlers::list_tags,
        // Countries
        countries_handlers::list_countries,
    ),
    components(
        schemas(
            Meta,
            GeoPoint,
            NumberOrString,
            // Locations
            locations_dtos::UserLocationDto,
            locations_dtos::RecommendationRequestDto,
            locations_dtos::NearbyLocationDto,
            locations_dtos::LocationResponseDto,
            ApiResponse<Vec<locations_dtos::NearbyLocationDto>>,
            ApiResponse<locations_dtos::LocationResponseDto>,
            // Tags
            tags_dtos::TagResponseDto,
            tags_dtos::TagSummaryDto,
            ApiResponse<Vec<tags_dtos::TagResponseDto>>,
            // Countries
            countries_dtos::CountryResponseDto,
            ApiResponse<Vec<countries_dtos::CountryResponseDto>>,
        )
    ),
    tags(
        (name = "locations", description = "Nearby search, tag recommendations and location detail"),
        (name = "tags", description = "Tag catalog used to filter recommendations"),
        (name = "countries", description = "Country reference data"),
    ),
    info(
        title = "Nextplore API",
        version = "0.1.0",
        description = "Location discovery API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
