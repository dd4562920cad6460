//! Geographic primitives shared by the location queries.
//!
//! Positions are WGS84 degrees (SRID 4326). At the HTTP boundary a position is
//! always the named pair `{ latitude, longitude }`; the storage geometry keeps
//! them as an `(x, y)` = `(longitude, latitude)` pair. [`GeoPoint::to_xy`] and
//! [`GeoPoint::from_xy`] are the only places that translate between the two.

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[cfg(test)]
use crate::shared::constants::EARTH_RADIUS_METERS;

/// Spatial reference id for WGS84 longitude/latitude.
pub const SRID_WGS84: i32 = 4326;

const METERS_PER_KILOMETER: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("Latitude must be a finite number")]
    LatitudeNotFinite,

    #[error("Longitude must be a finite number")]
    LongitudeNotFinite,

    #[error("Latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("Radius must be a finite number")]
    RadiusNotFinite,

    #[error("Radius must not be negative, got {0}")]
    NegativeRadius(f64),
}

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite() {
            return Err(GeoError::LatitudeNotFinite);
        }
        if !longitude.is_finite() {
            return Err(GeoError::LongitudeNotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Storage-order coordinates: `(x, y)` = `(longitude, latitude)`.
    pub fn to_xy(self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    /// Rebuild a point from a stored geometry's `(x, y)` pair.
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self {
            latitude: y,
            longitude: x,
        }
    }

    /// Great-circle distance in meters (haversine on a spherical earth).
    #[cfg(test)]
    pub fn distance_meters(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_METERS * c
    }
}

/// Search radius, expressed in kilometers at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRadius(f64);

impl SearchRadius {
    pub fn from_km(km: f64) -> Result<Self, GeoError> {
        if !km.is_finite() {
            return Err(GeoError::RadiusNotFinite);
        }
        if km < 0.0 {
            return Err(GeoError::NegativeRadius(km));
        }
        Ok(Self(km))
    }

    pub fn km(self) -> f64 {
        self.0
    }

    pub fn meters(self) -> f64 {
        self.0 * METERS_PER_KILOMETER
    }
}

/// Circle used by the "within distance" predicate. The boundary is inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    pub center: GeoPoint,
    pub radius: SearchRadius,
}

impl SearchArea {
    pub fn new(center: GeoPoint, radius: SearchRadius) -> Self {
        Self { center, radius }
    }

    /// Haversine containment, boundary inclusive.
    #[cfg(test)]
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.center.distance_meters(point) <= self.radius.meters()
    }
}
