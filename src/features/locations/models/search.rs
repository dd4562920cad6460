use std::collections::HashSet;

use crate::core::error::AppError;
use crate::shared::geo::SearchArea;

/// Tag names a location must carry, all of them, to be recommended.
///
/// Never empty. Duplicates are dropped so `len()` is the number of distinct
/// names the candidate phase must match.
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredTags(Vec<String>);

impl RequiredTags {
    pub fn new(names: Vec<String>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(names.len());
        let distinct: Vec<String> = names
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect();

        if distinct.is_empty() {
            return Err(AppError::Validation(
                "At least one tag is required for recommendations".to_string(),
            ));
        }

        Ok(Self(distinct))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }
}

/// Validated input of the nearby query.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub area: SearchArea,
}

/// Validated input of the recommendation query.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    pub area: SearchArea,
    pub tags: RequiredTags,
}
