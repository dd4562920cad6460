use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::locations::models::{LocationId, LocationWithTags, RequiredTags};
use crate::features::locations::stores::LocationStore;
use crate::shared::geo::SearchArea;

/// Location store evaluated in process with haversine distances.
pub struct InMemoryLocationStore {
    locations: Vec<LocationWithTags>,
}

impl InMemoryLocationStore {
    pub fn new(locations: Vec<LocationWithTags>) -> Self {
        Self { locations }
    }

    fn within<'a>(
        &'a self,
        area: &'a SearchArea,
    ) -> impl Iterator<Item = &'a LocationWithTags> + 'a {
        self.locations
            .iter()
            .filter(move |l| area.contains(&l.location.position))
    }
}

#[async_trait]
impl LocationStore for InMemoryLocationStore {
    async fn find_within(&self, area: &SearchArea) -> Result<Vec<LocationWithTags>> {
        Ok(self.within(area).cloned().collect())
    }

    async fn find_ids_with_all_tags(
        &self,
        area: &SearchArea,
        tags: &RequiredTags,
    ) -> Result<Vec<LocationId>> {
        Ok(self
            .within(area)
            .filter(|l| {
                let mut matched: Vec<&str> = l
                    .tags
                    .iter()
                    .map(|t| t.name.as_str())
                    .filter(|name| tags.contains(name))
                    .collect();
                matched.sort_unstable();
                matched.dedup();
                matched.len() == tags.len()
            })
            .map(LocationWithTags::id)
            .collect())
    }

    async fn find_by_ids(&self, ids: &[LocationId]) -> Result<Vec<LocationWithTags>> {
        Ok(self
            .locations
            .iter()
            .filter(|l| ids.contains(&l.id()))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: LocationId) -> Result<Option<LocationWithTags>> {
        Ok(self.locations.iter().find(|l| l.id() == id).cloned())
    }
}
