mod tag_dto;

pub use tag_dto::{marker_icon_url, TagResponseDto, TagSummaryDto};
