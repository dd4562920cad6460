/// Radius (km) used by the nearby query when the client omits one
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 2.0;

/// Radius (km) used by the recommendation query when the client omits one
pub const DEFAULT_RECOMMENDATION_RADIUS_KM: f64 = 5.0;

/// Mean earth radius in meters, for haversine distances
#[cfg(test)]
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Size segment inserted between a tag's icon prefix and suffix for map markers
pub const MARKER_ICON_SIZE: &str = "bg_64";
