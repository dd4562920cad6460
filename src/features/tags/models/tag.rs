use serde::Deserialize;
use sqlx::FromRow;

/// Tag model. `name` is unique; icon halves compose marker image URLs.
#[derive(Debug, Clone, PartialEq, FromRow, Deserialize)]
pub struct Tag {
    pub tag_id: i32,
    pub name: String,
    pub icon_prefix: Option<String>,
    pub icon_suffix: Option<String>,
}
