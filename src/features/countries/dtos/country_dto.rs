use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::countries::models::Country;

/// Response DTO for country
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountryResponseDto {
    pub country_id: i32,
    pub country_name: String,
    /// ISO 3166-1 alpha-2, uppercase
    pub country_code: String,
    /// Flag emoji
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl From<Country> for CountryResponseDto {
    fn from(c: Country) -> Self {
        Self {
            country_id: c.country_id,
            country_name: c.country_name,
            country_code: c.country_code,
            flag: c.flag,
        }
    }
}
