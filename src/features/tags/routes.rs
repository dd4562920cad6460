use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::tags::handlers;
use crate::features::tags::services::TagService;

/// Create routes for the tag catalog (public)
pub fn routes(service: Arc<TagService>) -> Router {
    Router::new()
        .route("/api/tags", get(handlers::list_tags))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::unreachable_pool;
    use axum_test::TestServer;
    use serde_json::Value;
    use sqlx::PgPool;

    #[tokio::test]
    async fn test_list_tags_storage_failure_is_server_error() {
        let server =
            TestServer::new(routes(Arc::new(TagService::new(unreachable_pool())))).unwrap();

        let response = server.get("/api/tags").await;

        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Database error occurred");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "Requires a PostGIS database at DATABASE_URL"]
    async fn test_list_tags_ordered_by_name(pool: PgPool) {
        sqlx::query(
            r#"
            INSERT INTO tags (name, icon_prefix, icon_suffix)
            VALUES ('Museum', 'https://icons.test/museum_', '.png'),
                   ('Cafe', NULL, NULL),
                   ('Stadium', 'https://icons.test/stadium_', '.png')
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        let server = TestServer::new(routes(Arc::new(TagService::new(pool)))).unwrap();

        let response = server.get("/api/tags").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Tags retrieved successfully");
        assert_eq!(body["meta"]["total"], 3);

        let names: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Cafe", "Museum", "Stadium"]);
        assert!(body["data"][0]["icon_url"].is_null());
        assert_eq!(
            body["data"][1]["icon_url"],
            "https://icons.test/museum_bg_64.png"
        );
    }
}
