use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::tags::models::Tag;
use crate::shared::constants::MARKER_ICON_SIZE;

/// Marker image URL (`{prefix}bg_64{suffix}`), when both icon halves are known.
pub fn marker_icon_url(prefix: Option<&str>, suffix: Option<&str>) -> Option<String> {
    match (prefix, suffix) {
        (Some(prefix), Some(suffix)) if !prefix.is_empty() && !suffix.is_empty() => {
            Some(format!("{}{}{}", prefix, MARKER_ICON_SIZE, suffix))
        }
        _ => None,
    }
}

/// Full tag representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagResponseDto {
    pub tag_id: i32,
    pub name: String,
    pub icon_prefix: Option<String>,
    pub icon_suffix: Option<String>,
    pub icon_url: Option<String>,
}

impl From<Tag> for TagResponseDto {
    fn from(tag: Tag) -> Self {
        let icon_url = marker_icon_url(tag.icon_prefix.as_deref(), tag.icon_suffix.as_deref());
        Self {
            tag_id: tag.tag_id,
            name: tag.name,
            icon_prefix: tag.icon_prefix,
            icon_suffix: tag.icon_suffix,
            icon_url,
        }
    }
}

/// Tag as embedded in nearby results (name and icon only)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagSummaryDto {
    pub name: String,
    pub icon_prefix: Option<String>,
    pub icon_suffix: Option<String>,
    pub icon_url: Option<String>,
}

impl From<Tag> for TagSummaryDto {
    fn from(tag: Tag) -> Self {
        let icon_url = marker_icon_url(tag.icon_prefix.as_deref(), tag.icon_suffix.as_deref());
        Self {
            name: tag.name,
            icon_prefix: tag.icon_prefix,
            icon_suffix: tag.icon_suffix,
            icon_url,
        }
    }
}
