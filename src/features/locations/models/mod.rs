mod location;
mod search;

pub use location::{Location, LocationId, LocationWithTags};
pub use search::{NearbyQuery, RecommendationQuery, RequiredTags};
