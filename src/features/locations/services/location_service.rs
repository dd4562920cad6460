use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::locations::models::{
    LocationId, LocationWithTags, NearbyQuery, RecommendationQuery,
};
use crate::features::locations::stores::LocationStore;

/// Outcome of a recommendation query. An empty match is not an error.
#[derive(Debug)]
pub enum Recommendation {
    Found(Vec<LocationWithTags>),
    NoMatch,
}

/// Nearby, recommendation and detail queries over a [`LocationStore`].
pub struct LocationService {
    store: Arc<dyn LocationStore>,
}

impl LocationService {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    /// All locations within the query radius, each with its tags
    pub async fn nearby(&self, query: &NearbyQuery) -> Result<Vec<LocationWithTags>> {
        tracing::debug!(
            "Nearby query: lat={}, lon={}, radius_km={}",
            query.area.center.latitude,
            query.area.center.longitude,
            query.area.radius.km()
        );

        let locations = self.store.find_within(&query.area).await?;

        tracing::info!("Nearby query matched {} locations", locations.len());
        Ok(locations)
    }

    /// Locations within the radius that carry every requested tag.
    ///
    /// Runs in two reads: first the ids whose distinct matched tag count equals
    /// the requested set size, then the full records (all tags) for those ids.
    pub async fn recommend(&self, query: &RecommendationQuery) -> Result<Recommendation> {
        tracing::debug!(
            "Recommendation query: lat={}, lon={}, radius_km={}, tags={:?}",
            query.area.center.latitude,
            query.area.center.longitude,
            query.area.radius.km(),
            query.tags.names()
        );

        let ids: Vec<LocationId> = self
            .store
            .find_ids_with_all_tags(&query.area, &query.tags)
            .await?;

        if ids.is_empty() {
            tracing::info!("Recommendation query matched no locations");
            return Ok(Recommendation::NoMatch);
        }

        let locations = self.store.find_by_ids(&ids).await?;

        tracing::info!("Recommendation query matched {} locations", locations.len());
        Ok(Recommendation::Found(locations))
    }

    /// One location with its complete tag list
    pub async fn get_detail(&self, id: LocationId) -> Result<LocationWithTags> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Location not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::locations::models::RequiredTags;
    use crate::shared::geo::{GeoPoint, SearchArea, SearchRadius};
    use crate::shared::test_helpers::*;

    fn area(lat: f64, lon: f64, radius_km: f64) -> SearchArea {
        SearchArea::new(
            GeoPoint::new(lat, lon).unwrap(),
            SearchRadius::from_km(radius_km).unwrap(),
        )
    }

    fn recommendation(radius_km: f64, tags: &[&str]) -> RecommendationQuery {
        RecommendationQuery {
            area: area(0.0, 0.0, radius_km),
            tags: RequiredTags::new(tags.iter().map(|t| t.to_string()).collect()).unwrap(),
        }
    }

    fn found_ids(outcome: Recommendation) -> Vec<LocationId> {
        match outcome {
            Recommendation::Found(locations) => sorted_ids(&locations),
            Recommendation::NoMatch => Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_nearby_radius_boundary() {
        let service = service_with(vec![
            location(1, 0.0, equator_longitude_for(1999.0), vec![museum()]),
            location(2, 0.0, equator_longitude_for(2001.0), vec![museum()]),
        ]);

        let found = service
            .nearby(&NearbyQuery {
                area: area(0.0, 0.0, 2.0),
            })
            .await
            .unwrap();

        assert_eq!(sorted_ids(&found), vec![1]);
    }

    #[tokio::test]
    async fn test_nearby_includes_tags() {
        let service = service_with(scenario_locations());

        let found = service
            .nearby(&NearbyQuery {
                area: area(0.0, 0.0, 5.0),
            })
            .await
            .unwrap();

        assert_eq!(sorted_ids(&found), vec![1, 2]);
        let l2 = found.iter().find(|l| l.id() == 2).unwrap();
        assert!(l2.has_tag("Museum") && l2.has_tag("Cafe"));
    }

    #[tokio::test]
    async fn test_nearby_is_idempotent() {
        let service = service_with(scenario_locations());
        let query = NearbyQuery {
            area: area(0.0, 0.0, 5.0),
        };

        let first = service.nearby(&query).await.unwrap();
        let second = service.nearby(&query).await.unwrap();

        assert_eq!(sorted_ids(&first), vec![1, 2]);
        assert_eq!(sorted_ids(&first), sorted_ids(&second));
    }

    #[tokio::test]
    async fn test_recommend_scenario() {
        let service = service_with(scenario_locations());

        let outcome = service
            .recommend(&recommendation(5.0, &["Museum", "Cafe"]))
            .await
            .unwrap();

        assert_eq!(found_ids(outcome), vec![2]);
    }

    #[tokio::test]
    async fn test_recommend_requires_all_tags() {
        let service = service_with(vec![
            location(1, 0.0, 0.0, vec![tag(10, "A")]),
            location(2, 0.0, 0.0, vec![tag(11, "B")]),
            location(3, 0.0, 0.0, vec![tag(10, "A"), tag(11, "B")]),
        ]);

        let outcome = service
            .recommend(&recommendation(5.0, &["A", "B"]))
            .await
            .unwrap();

        assert_eq!(found_ids(outcome), vec![3]);
    }

    #[tokio::test]
    async fn test_recommend_superset_matches_and_keeps_all_tags() {
        let service = service_with(vec![location(
            1,
            0.0,
            0.0,
            vec![tag(10, "A"), tag(11, "B"), tag(12, "C")],
        )]);

        let outcome = service
            .recommend(&recommendation(5.0, &["A", "B"]))
            .await
            .unwrap();

        match outcome {
            Recommendation::Found(locations) => {
                assert_eq!(locations.len(), 1);
                // Assembly returns every tag, not only the matched ones
                assert_eq!(locations[0].tags.len(), 3);
            }
            Recommendation::NoMatch => panic!("expected a match"),
        }
    }

    #[tokio::test]
    async fn test_recommend_no_match_skips_assembly() {
        let store = Arc::new(CountingStore::new(scenario_store()));
        let service = LocationService::new(store.clone());

        let outcome = service
            .recommend(&recommendation(5.0, &["Stadium"]))
            .await
            .unwrap();

        assert!(matches!(outcome, Recommendation::NoMatch));
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn test_recommend_unknown_tag_is_silently_unmatched() {
        // A name absent from the catalog never contributes to a count, so the
        // whole request cannot be satisfied rather than being rejected.
        let service = service_with(scenario_locations());

        let outcome = service
            .recommend(&recommendation(5.0, &["Museum", "NoSuchTag"]))
            .await
            .unwrap();

        assert!(matches!(outcome, Recommendation::NoMatch));
    }

    #[tokio::test]
    async fn test_recommend_duplicate_requested_tags() {
        let service = service_with(scenario_locations());

        let outcome = service
            .recommend(&recommendation(5.0, &["Cafe", "Cafe"]))
            .await
            .unwrap();

        assert_eq!(found_ids(outcome), vec![2]);
    }

    #[tokio::test]
    async fn test_recommend_is_idempotent() {
        let service = service_with(scenario_locations());
        let query = recommendation(2000.0, &["Museum"]);

        let first = found_ids(service.recommend(&query).await.unwrap());
        let second = found_ids(service.recommend(&query).await.unwrap());

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_detail() {
        let service = service_with(scenario_locations());

        let detail = service.get_detail(2).await.unwrap();
        assert_eq!(detail.location.name, "Place 2");
        assert_eq!(detail.tags.len(), 2);

        let missing = service.get_detail(99).await.unwrap_err();
        assert!(matches!(missing, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let service = LocationService::new(Arc::new(FailingStore));

        let err = service
            .nearby(&NearbyQuery {
                area: area(0.0, 0.0, 2.0),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }
}
