use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::tags::dtos::TagResponseDto;
use crate::features::tags::services::TagService;
use crate::shared::types::ApiResponse;

/// List all tags
///
/// Public; feeds the tag filter picker.
#[utoipa::path(
    get,
    path = "/api/tags",
    responses(
        (status = 200, description = "All tags ordered by name", body = ApiResponse<Vec<TagResponseDto>>),
    ),
    tag = "tags"
)]
pub async fn list_tags(
    State(service): State<Arc<TagService>>,
) -> Result<Json<ApiResponse<Vec<TagResponseDto>>>> {
    let tags = service.list().await?;
    Ok(Json(ApiResponse::list(tags, "Tags retrieved successfully")))
}
