//! Storage seam for the location queries.

#[cfg(test)]
mod memory_location_store;
mod pg_location_store;

#[cfg(test)]
pub use memory_location_store::InMemoryLocationStore;
pub use pg_location_store::PgLocationStore;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::locations::models::{LocationId, LocationWithTags, RequiredTags};
use crate::shared::geo::SearchArea;

/// Read-only access to locations and their tag associations.
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Every location within `area` (boundary inclusive), each with its full tag list.
    async fn find_within(&self, area: &SearchArea) -> Result<Vec<LocationWithTags>>;

    /// Ids of locations within `area` that carry every tag in `tags`.
    async fn find_ids_with_all_tags(
        &self,
        area: &SearchArea,
        tags: &RequiredTags,
    ) -> Result<Vec<LocationId>>;

    /// Locations with the given ids, each with its full tag list. No distance filter.
    async fn find_by_ids(&self, ids: &[LocationId]) -> Result<Vec<LocationWithTags>>;

    /// A single location with its full tag list.
    async fn find_by_id(&self, id: LocationId) -> Result<Option<LocationWithTags>>;
}
