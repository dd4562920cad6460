use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::tags::dtos::TagResponseDto;
use crate::features::tags::models::Tag;

/// Service for the tag catalog
pub struct TagService {
    pool: PgPool,
}

impl TagService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every tag, alphabetically
    pub async fn list(&self) -> Result<Vec<TagResponseDto>> {
        let tags = sqlx::query_as::<_, Tag>(
            r#"
            SELECT tag_id, name, icon_prefix, icon_suffix
            FROM tags
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list tags: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(tags.into_iter().map(Into::into).collect())
    }
}
