use chrono::{DateTime, Utc};

use crate::features::tags::models::Tag;
use crate::shared::geo::GeoPoint;

pub type LocationId = i32;

/// A place record. `fsq_place_id` is the external provenance key.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub location_id: LocationId,
    pub fsq_place_id: String,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub links: Option<Vec<String>>,
    pub position: GeoPoint,
    pub icon_prefix: Option<String>,
    pub icon_suffix: Option<String>,
    pub country_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A location together with every tag associated with it.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationWithTags {
    pub location: Location,
    pub tags: Vec<Tag>,
}

impl LocationWithTags {
    #[cfg(test)]
    pub fn id(&self) -> LocationId {
        self.location.location_id
    }

    #[cfg(test)]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }
}
