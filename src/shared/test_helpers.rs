#![cfg(test)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::locations::models::{
    Location, LocationId, LocationWithTags, RequiredTags,
};
use crate::features::locations::stores::{InMemoryLocationStore, LocationStore};
use crate::features::locations::LocationService;
use crate::features::tags::models::Tag;
use crate::shared::constants::EARTH_RADIUS_METERS;
use crate::shared::geo::{GeoPoint, SearchArea};

pub fn tag(tag_id: i32, name: &str) -> Tag {
    Tag {
        tag_id,
        name: name.to_string(),
        icon_prefix: Some(format!("https://icons.test/{}_", name.to_lowercase())),
        icon_suffix: Some(".png".to_string()),
    }
}

pub fn museum() -> Tag {
    tag(1, "Museum")
}

pub fn cafe() -> Tag {
    tag(2, "Cafe")
}

pub fn stadium() -> Tag {
    tag(3, "Stadium")
}

pub fn location(id: LocationId, latitude: f64, longitude: f64, tags: Vec<Tag>) -> LocationWithTags {
    let now = Utc::now();
    LocationWithTags {
        location: Location {
            location_id: id,
            fsq_place_id: format!("fsq-{}", id),
            name: format!("Place {}", id),
            address: format!("{} Test Street", id),
            description: Some(format!("Description of place {}", id)),
            links: Some(vec![format!("https://place{}.test", id)]),
            position: GeoPoint::new(latitude, longitude).unwrap(),
            icon_prefix: None,
            icon_suffix: None,
            country_id: 1,
            created_at: now,
            updated_at: now,
        },
        tags,
    }
}

/// Longitude offset (degrees) at the equator that lies `meters` east of 0,0.
pub fn equator_longitude_for(meters: f64) -> f64 {
    meters / (EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0)
}

/// L1 (0,0) [Museum], L2 (0,0.01) [Museum, Cafe], L3 (10,10) [Museum, Cafe].
pub fn scenario_locations() -> Vec<LocationWithTags> {
    vec![
        location(1, 0.0, 0.0, vec![museum()]),
        location(2, 0.0, 0.01, vec![museum(), cafe()]),
        location(3, 10.0, 10.0, vec![museum(), cafe()]),
    ]
}

pub fn scenario_store() -> InMemoryLocationStore {
    InMemoryLocationStore::new(scenario_locations())
}

pub fn service_with(locations: Vec<LocationWithTags>) -> Arc<LocationService> {
    Arc::new(LocationService::new(Arc::new(InMemoryLocationStore::new(
        locations,
    ))))
}

pub fn sorted_ids(locations: &[LocationWithTags]) -> Vec<LocationId> {
    let mut ids: Vec<LocationId> = locations.iter().map(LocationWithTags::id).collect();
    ids.sort_unstable();
    ids
}

/// Wraps a store and counts how many storage calls were issued.
pub struct CountingStore<S> {
    inner: S,
    calls: AtomicUsize,
}

impl<S> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl<S: LocationStore> LocationStore for CountingStore<S> {
    async fn find_within(&self, area: &SearchArea) -> Result<Vec<LocationWithTags>> {
        self.hit();
        self.inner.find_within(area).await
    }

    async fn find_ids_with_all_tags(
        &self,
        area: &SearchArea,
        tags: &RequiredTags,
    ) -> Result<Vec<LocationId>> {
        self.hit();
        self.inner.find_ids_with_all_tags(area, tags).await
    }

    async fn find_by_ids(&self, ids: &[LocationId]) -> Result<Vec<LocationWithTags>> {
        self.hit();
        self.inner.find_by_ids(ids).await
    }

    async fn find_by_id(&self, id: LocationId) -> Result<Option<LocationWithTags>> {
        self.hit();
        self.inner.find_by_id(id).await
    }
}

/// Store whose every call fails like a dropped connection.
pub struct FailingStore;

#[async_trait]
impl LocationStore for FailingStore {
    async fn find_within(&self, _area: &SearchArea) -> Result<Vec<LocationWithTags>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_ids_with_all_tags(
        &self,
        _area: &SearchArea,
        _tags: &RequiredTags,
    ) -> Result<Vec<LocationId>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_ids(&self, _ids: &[LocationId]) -> Result<Vec<LocationWithTags>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: LocationId) -> Result<Option<LocationWithTags>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Pool aimed at a closed port: every acquire fails fast with a database error.
pub fn unreachable_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(250))
        .connect_lazy("postgres://nextplore@127.0.0.1:1/nextplore")
        .unwrap()
}
