use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::countries::dtos::CountryResponseDto;
use crate::features::countries::models::Country;

/// Service for country reference data
pub struct CountryService {
    pool: PgPool,
}

impl CountryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all countries ordered by name
    pub async fn list(&self) -> Result<Vec<CountryResponseDto>> {
        let countries = sqlx::query_as::<_, Country>(
            r#"
            SELECT country_id, country_name, country_code, flag
            FROM countries
            ORDER BY country_name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list countries: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(countries.into_iter().map(Into::into).collect())
    }
}
