use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Numeric field that clients may send either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    /// The finite value carried by this field, if any.
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            NumberOrString::Number(n) => Some(*n).filter(|n| n.is_finite()),
            NumberOrString::Text(s) => parse_finite(s),
        }
    }

    /// True for an empty or whitespace-only string.
    pub fn is_blank(&self) -> bool {
        matches!(self, NumberOrString::Text(s) if s.trim().is_empty())
    }
}

/// Parse a decimal string into a finite `f64`. Surrounding whitespace is ignored.
pub fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Treat blank query-string values as absent.
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.trim().is_empty())
}
