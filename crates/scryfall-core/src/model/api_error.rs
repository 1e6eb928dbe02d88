use serde::{Deserialize, Serialize};
use std::fmt;

/// The error object the API returns with every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Machine-readable code, e.g. `not_found`.
    pub code: String,
    /// Human-readable explanation.
    pub details: String,
    /// Further classification, e.g. `ambiguous` for fuzzy name lookups.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub warnings: Vec<String>,
}

impl ApiError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == 404 || self.code == "not_found"
    }

    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.kind.as_deref() == Some("ambiguous")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.status, self.code, self.details)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_not_found() {
        let err: ApiError = serde_json::from_str(
            r#"{
                "object": "error",
                "code": "not_found",
                "status": 404,
                "details": "No cards found matching “abcdefgh”"
            }"#,
        )
        .unwrap();
        assert!(err.is_not_found());
        assert!(!err.is_ambiguous());
        assert!(err.warnings.is_empty());
        assert_eq!(
            err.to_string(),
            "404 not_found: No cards found matching \u{201c}abcdefgh\u{201d}"
        );
    }

    #[test]
    fn test_decode_ambiguous() {
        let err: ApiError = serde_json::from_str(
            r#"{
                "object": "error",
                "code": "not_found",
                "status": 404,
                "type": "ambiguous",
                "details": "Too many cards match ambiguous name “bolt”. Add more words to refine your search."
            }"#,
        )
        .unwrap();
        assert!(err.is_ambiguous());
    }
}
