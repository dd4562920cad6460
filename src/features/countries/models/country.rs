use sqlx::FromRow;

/// Country model
#[derive(Debug, Clone, FromRow)]
pub struct Country {
    pub country_id: i32,
    pub country_name: String,
    pub country_code: String,
    pub flag: Option<String>,
}
