use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::locations::models::{
    Location, LocationId, LocationWithTags, RequiredTags,
};
use crate::features::locations::stores::LocationStore;
use crate::features::tags::models::Tag;
use crate::shared::geo::{GeoPoint, SearchArea, SRID_WGS84};

// =============================================================================
// SQL FRAGMENTS
// =============================================================================

/// Location columns plus the full tag list as a JSON array.
/// The geography is unpacked as `x` (longitude) / `y` (latitude).
const LOCATION_COLUMNS: &str = r#"
    l.location_id, l.fsq_place_id, l.name, l.address, l.description, l.links,
    ST_X(l.location::geometry) AS x,
    ST_Y(l.location::geometry) AS y,
    l.icon_prefix, l.icon_suffix, l.country_id, l.created_at, l.updated_at,
    COALESCE(
        (
            SELECT json_agg(
                json_build_object(
                    'tag_id', t.tag_id,
                    'name', t.name,
                    'icon_prefix', t.icon_prefix,
                    'icon_suffix', t.icon_suffix
                )
                ORDER BY t.name
            )
            FROM location_tags lt
            JOIN tags t ON t.tag_id = lt.tag_id
            WHERE lt.location_id = l.location_id
        ),
        '[]'::json
    ) AS tags
"#;

/// Geography distance test on `l.location`.
/// Binds: `$1` x (longitude), `$2` y (latitude), `$3` SRID, `$4` radius in meters.
const WITHIN_RADIUS: &str = r#"
    ST_DWithin(
        l.location,
        ST_SetSRID(ST_MakePoint($1, $2), $3)::geography,
        $4
    )
"#;

#[derive(Debug, FromRow)]
struct LocationRow {
    location_id: LocationId,
    fsq_place_id: String,
    name: String,
    address: String,
    description: Option<String>,
    links: Option<Vec<String>>,
    x: f64,
    y: f64,
    icon_prefix: Option<String>,
    icon_suffix: Option<String>,
    country_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    tags: Json<Vec<Tag>>,
}

impl From<LocationRow> for LocationWithTags {
    fn from(row: LocationRow) -> Self {
        Self {
            location: Location {
                location_id: row.location_id,
                fsq_place_id: row.fsq_place_id,
                name: row.name,
                address: row.address,
                description: row.description,
                links: row.links,
                position: GeoPoint::from_xy(row.x, row.y),
                icon_prefix: row.icon_prefix,
                icon_suffix: row.icon_suffix,
                country_id: row.country_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            tags: row.tags.0,
        }
    }
}

/// PostGIS-backed location store
pub struct PgLocationStore {
    pool: PgPool,
}

impl PgLocationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationStore for PgLocationStore {
    async fn find_within(&self, area: &SearchArea) -> Result<Vec<LocationWithTags>> {
        let (x, y) = area.center.to_xy();
        let sql = format!(
            "SELECT {} FROM locations l WHERE {}",
            LOCATION_COLUMNS, WITHIN_RADIUS
        );

        let rows = sqlx::query_as::<_, LocationRow>(&sql)
            .bind(x)
            .bind(y)
            .bind(SRID_WGS84)
            .bind(area.radius.meters())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch locations within radius: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_ids_with_all_tags(
        &self,
        area: &SearchArea,
        tags: &RequiredTags,
    ) -> Result<Vec<LocationId>> {
        let (x, y) = area.center.to_xy();
        // One row per (location, matched tag); a location qualifies when its
        // distinct matched names cover the whole requested set.
        let sql = format!(
            r#"
            SELECT l.location_id
            FROM locations l
            JOIN location_tags lt ON lt.location_id = l.location_id
            JOIN tags t ON t.tag_id = lt.tag_id
            WHERE t.name = ANY($5)
              AND {}
            GROUP BY l.location_id
            HAVING COUNT(DISTINCT t.name) = $6
            "#,
            WITHIN_RADIUS
        );

        sqlx::query_scalar::<_, LocationId>(&sql)
            .bind(x)
            .bind(y)
            .bind(SRID_WGS84)
            .bind(area.radius.meters())
            .bind(tags.names())
            .bind(tags.len() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to match locations by tags: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_ids(&self, ids: &[LocationId]) -> Result<Vec<LocationWithTags>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {} FROM locations l WHERE l.location_id = ANY($1)",
            LOCATION_COLUMNS
        );

        let rows = sqlx::query_as::<_, LocationRow>(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch locations by ids: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: LocationId) -> Result<Option<LocationWithTags>> {
        let sql = format!(
            "SELECT {} FROM locations l WHERE l.location_id = $1",
            LOCATION_COLUMNS
        );

        let row = sqlx::query_as::<_, LocationRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch location {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(row.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::geo::SearchRadius;

    /// Meters per degree of longitude along the WGS84 equator (semi-major axis arc).
    const WGS84_EQUATOR_METERS_PER_DEGREE: f64 = 6_378_137.0 * std::f64::consts::PI / 180.0;

    fn area(lat: f64, lon: f64, radius_km: f64) -> SearchArea {
        SearchArea::new(
            GeoPoint::new(lat, lon).unwrap(),
            SearchRadius::from_km(radius_km).unwrap(),
        )
    }

    fn required(names: &[&str]) -> RequiredTags {
        RequiredTags::new(names.iter().map(|n| n.to_string()).collect()).unwrap()
    }

    async fn insert_location(pool: &PgPool, id: LocationId, point: GeoPoint, tag_ids: &[i32]) {
        let (x, y) = point.to_xy();
        sqlx::query(
            r#"
            INSERT INTO locations (location_id, fsq_place_id, name, address, location, country_id)
            VALUES ($1, $2, $3, $4, ST_SetSRID(ST_MakePoint($5, $6), 4326)::geography, 1)
            "#,
        )
        .bind(id)
        .bind(format!("fsq-{}", id))
        .bind(format!("Place {}", id))
        .bind(format!("{} Test Street", id))
        .bind(x)
        .bind(y)
        .execute(pool)
        .await
        .unwrap();

        for tag_id in tag_ids {
            sqlx::query("INSERT INTO location_tags (location_id, tag_id) VALUES ($1, $2)")
                .bind(id)
                .bind(tag_id)
                .execute(pool)
                .await
                .unwrap();
        }
    }

    /// Country 1, tags Museum(1) Cafe(2) Stadium(3), and
    /// L1 (0,0) [Museum], L2 (0,0.01) [Museum, Cafe], L3 (10,10) [Museum, Cafe].
    async fn seed_scenario(pool: &PgPool) {
        sqlx::query(
            "INSERT INTO countries (country_id, country_name, country_code) VALUES (1, 'Nowhere', 'NW')",
        )
        .execute(pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO tags (tag_id, name) VALUES (1, 'Museum'), (2, 'Cafe'), (3, 'Stadium')",
        )
        .execute(pool)
        .await
        .unwrap();

        insert_location(pool, 1, GeoPoint::new(0.0, 0.0).unwrap(), &[1]).await;
        insert_location(pool, 2, GeoPoint::new(0.0, 0.01).unwrap(), &[1, 2]).await;
        insert_location(pool, 3, GeoPoint::new(10.0, 10.0).unwrap(), &[1, 2]).await;
    }

    fn sorted(mut ids: Vec<LocationId>) -> Vec<LocationId> {
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_row_unpacks_xy_as_lon_lat() {
        let row = LocationRow {
            location_id: 1,
            fsq_place_id: "fsq-1".to_string(),
            name: "Pier".to_string(),
            address: "1 Harbor Rd".to_string(),
            description: None,
            links: None,
            x: -73.0,
            y: 40.0,
            icon_prefix: None,
            icon_suffix: None,
            country_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            tags: Json(vec![]),
        };

        let location = LocationWithTags::from(row).location;
        assert_eq!(location.position.latitude, 40.0);
        assert_eq!(location.position.longitude, -73.0);
    }

    #[test]
    fn test_tag_json_shape_decodes() {
        let raw = r#"[{"tag_id": 3, "name": "Cafe", "icon_prefix": null, "icon_suffix": null}]"#;
        let tags: Vec<Tag> = serde_json::from_str(raw).unwrap();
        assert_eq!(tags[0].tag_id, 3);
        assert_eq!(tags[0].name, "Cafe");
    }

    #[test]
    fn test_sql_binds_are_positional_only() {
        // User input must only ever reach the statement through bind parameters
        assert!(WITHIN_RADIUS.contains("$1") && WITHIN_RADIUS.contains("$4"));
        assert!(!LOCATION_COLUMNS.contains('$'));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "Requires a PostGIS database at DATABASE_URL"]
    async fn test_candidates_require_every_tag(pool: PgPool) {
        seed_scenario(&pool).await;
        let store = PgLocationStore::new(pool);

        let both = store
            .find_ids_with_all_tags(&area(0.0, 0.0, 5.0), &required(&["Museum", "Cafe"]))
            .await
            .unwrap();
        assert_eq!(sorted(both), vec![2]);

        let subset = store
            .find_ids_with_all_tags(&area(0.0, 0.0, 5.0), &required(&["Museum"]))
            .await
            .unwrap();
        assert_eq!(sorted(subset), vec![1, 2]);

        let none = store
            .find_ids_with_all_tags(&area(0.0, 0.0, 5.0), &required(&["Stadium"]))
            .await
            .unwrap();
        assert!(none.is_empty());

        let unknown = store
            .find_ids_with_all_tags(&area(0.0, 0.0, 5.0), &required(&["Museum", "NoSuchTag"]))
            .await
            .unwrap();
        assert!(unknown.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "Requires a PostGIS database at DATABASE_URL"]
    async fn test_assembly_returns_full_tag_lists(pool: PgPool) {
        seed_scenario(&pool).await;
        let store = PgLocationStore::new(pool);

        // L3 lies far outside any radius; assembly applies no distance filter
        let found = store.find_by_ids(&[2, 3]).await.unwrap();
        assert_eq!(found.len(), 2);
        for location in &found {
            let names: Vec<&str> = location.tags.iter().map(|t| t.name.as_str()).collect();
            assert_eq!(names, vec!["Cafe", "Museum"]);
        }

        assert!(store.find_by_ids(&[]).await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "Requires a PostGIS database at DATABASE_URL"]
    async fn test_equator_boundary_is_inclusive_at_two_km(pool: PgPool) {
        seed_scenario(&pool).await;
        insert_location(
            &pool,
            20,
            GeoPoint::new(0.0, 1999.0 / WGS84_EQUATOR_METERS_PER_DEGREE).unwrap(),
            &[],
        )
        .await;
        insert_location(
            &pool,
            21,
            GeoPoint::new(0.0, 2001.0 / WGS84_EQUATOR_METERS_PER_DEGREE).unwrap(),
            &[],
        )
        .await;
        let store = PgLocationStore::new(pool);

        let found = store.find_within(&area(0.0, 0.0, 2.0)).await.unwrap();
        let ids: Vec<LocationId> = found.iter().map(|l| l.location.location_id).collect();
        // L2 sits about 1.1km east of the origin
        assert_eq!(sorted(ids), vec![1, 2, 20]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "Requires a PostGIS database at DATABASE_URL"]
    async fn test_stored_point_round_trips(pool: PgPool) {
        seed_scenario(&pool).await;
        insert_location(&pool, 30, GeoPoint::new(40.0, -73.0).unwrap(), &[2]).await;
        let store = PgLocationStore::new(pool);

        let found = store.find_by_id(30).await.unwrap().unwrap();
        assert!((found.location.position.latitude - 40.0).abs() < 1e-9);
        assert!((found.location.position.longitude + 73.0).abs() < 1e-9);
        assert_eq!(found.tags.len(), 1);
        assert_eq!(found.tags[0].name, "Cafe");

        assert!(store.find_by_id(99).await.unwrap().is_none());
    }
}
