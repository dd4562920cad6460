use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::error::AppError;
use crate::features::locations::models::{
    LocationId, LocationWithTags, NearbyQuery, RecommendationQuery, RequiredTags,
};
use crate::features::tags::dtos::{marker_icon_url, TagResponseDto, TagSummaryDto};
use crate::shared::constants::{DEFAULT_NEARBY_RADIUS_KM, DEFAULT_RECOMMENDATION_RADIUS_KM};
use crate::shared::geo::{GeoPoint, SearchArea, SearchRadius};
use crate::shared::input::{non_blank, parse_finite, NumberOrString};

const MISSING_COORDINATES: &str = "Latitude and Longitude are required";
const INVALID_NEARBY_INPUT: &str = "Invalid latitude, longitude, or radius provided";
const MISSING_USER_LOCATION: &str = "User location with latitude and longitude is required";
const INVALID_RECOMMENDATION_INPUT: &str = "Invalid user location or radius provided";

// =============================================================================
// REQUESTS
// =============================================================================

/// Query parameters of the nearby search. Values arrive as raw strings and are
/// parsed explicitly so that malformed numbers are reported, not defaulted.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbyQueryParams {
    /// Latitude in degrees (WGS84)
    #[param(example = "40.7128")]
    pub lat: Option<String>,

    /// Longitude in degrees (WGS84)
    #[param(example = "-74.0060")]
    pub lon: Option<String>,

    /// Search radius in kilometers (default: 2)
    #[param(example = "2")]
    pub radius: Option<String>,
}

impl TryFrom<NearbyQueryParams> for NearbyQuery {
    type Error = AppError;

    fn try_from(params: NearbyQueryParams) -> Result<Self, Self::Error> {
        let (Some(lat), Some(lon)) = (
            non_blank(params.lat.as_deref()),
            non_blank(params.lon.as_deref()),
        ) else {
            return Err(AppError::Validation(MISSING_COORDINATES.to_string()));
        };

        let invalid = || AppError::Validation(INVALID_NEARBY_INPUT.to_string());
        let latitude = parse_finite(lat).ok_or_else(invalid)?;
        let longitude = parse_finite(lon).ok_or_else(invalid)?;
        let radius_km = match non_blank(params.radius.as_deref()) {
            Some(raw) => parse_finite(raw).ok_or_else(invalid)?,
            None => DEFAULT_NEARBY_RADIUS_KM,
        };

        Ok(Self {
            area: SearchArea::new(
                GeoPoint::new(latitude, longitude)?,
                SearchRadius::from_km(radius_km)?,
            ),
        })
    }
}

/// The caller's position as sent by the client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserLocationDto {
    #[schema(value_type = f64, example = 40.7128)]
    pub latitude: Option<NumberOrString>,
    #[schema(value_type = f64, example = -74.006)]
    pub longitude: Option<NumberOrString>,
}

/// Request body of the recommendation search
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequestDto {
    /// Tag names; a location must carry all of them
    #[validate(
        required(message = "At least one tag is required for recommendations"),
        length(min = 1, message = "At least one tag is required for recommendations")
    )]
    #[schema(example = json!(["Museum", "Cafe"]))]
    pub tags: Option<Vec<String>>,

    /// Search radius in kilometers (default: 5)
    #[schema(value_type = Option<f64>, example = 5)]
    pub radius: Option<NumberOrString>,

    pub user_location: Option<UserLocationDto>,
}

impl TryFrom<RecommendationRequestDto> for RecommendationQuery {
    type Error = AppError;

    fn try_from(dto: RecommendationRequestDto) -> Result<Self, Self::Error> {
        let (latitude, longitude) = match &dto.user_location {
            Some(UserLocationDto {
                latitude: Some(lat),
                longitude: Some(lon),
            }) if !lat.is_blank() && !lon.is_blank() => (lat.clone(), lon.clone()),
            _ => return Err(AppError::Validation(MISSING_USER_LOCATION.to_string())),
        };

        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let invalid = || AppError::Validation(INVALID_RECOMMENDATION_INPUT.to_string());
        let latitude = latitude.as_finite().ok_or_else(invalid)?;
        let longitude = longitude.as_finite().ok_or_else(invalid)?;
        let radius_km = match dto.radius.as_ref().filter(|r| !r.is_blank()) {
            Some(raw) => raw.as_finite().ok_or_else(invalid)?,
            None => DEFAULT_RECOMMENDATION_RADIUS_KM,
        };

        Ok(Self {
            area: SearchArea::new(
                GeoPoint::new(latitude, longitude)?,
                SearchRadius::from_km(radius_km)?,
            ),
            tags: RequiredTags::new(dto.tags.unwrap_or_default())?,
        })
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Location as returned by the nearby search
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NearbyLocationDto {
    pub location_id: LocationId,
    pub fsq_place_id: String,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub links: Option<Vec<String>>,
    pub location: GeoPoint,
    pub icon_prefix: Option<String>,
    pub icon_suffix: Option<String>,
    pub icon_url: Option<String>,
    pub country_id: i32,
    pub tags: Vec<TagSummaryDto>,
}

impl From<LocationWithTags> for NearbyLocationDto {
    fn from(l: LocationWithTags) -> Self {
        let loc = l.location;
        Self {
            icon_url: marker_icon_url(loc.icon_prefix.as_deref(), loc.icon_suffix.as_deref()),
            location_id: loc.location_id,
            fsq_place_id: loc.fsq_place_id,
            name: loc.name,
            address: loc.address,
            description: loc.description,
            links: loc.links,
            location: loc.position,
            icon_prefix: loc.icon_prefix,
            icon_suffix: loc.icon_suffix,
            country_id: loc.country_id,
            tags: l.tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Location with full tag objects (recommendations and detail)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LocationResponseDto {
    pub location_id: LocationId,
    pub fsq_place_id: String,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub links: Option<Vec<String>>,
    pub location: GeoPoint,
    pub icon_prefix: Option<String>,
    pub icon_suffix: Option<String>,
    pub icon_url: Option<String>,
    pub country_id: i32,
    pub tags: Vec<TagResponseDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LocationWithTags> for LocationResponseDto {
    fn from(l: LocationWithTags) -> Self {
        let loc = l.location;
        Self {
            icon_url: marker_icon_url(loc.icon_prefix.as_deref(), loc.icon_suffix.as_deref()),
            location_id: loc.location_id,
            fsq_place_id: loc.fsq_place_id,
            name: loc.name,
            address: loc.address,
            description: loc.description,
            links: loc.links,
            location: loc.position,
            icon_prefix: loc.icon_prefix,
            icon_suffix: loc.icon_suffix,
            country_id: loc.country_id,
            tags: l.tags.into_iter().map(Into::into).collect(),
            created_at: loc.created_at,
            updated_at: loc.updated_at,
        }
    }
}
