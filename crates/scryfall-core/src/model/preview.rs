use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where and when a card was first previewed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub previewed_at: Option<NaiveDate>,
    pub source: Option<String>,
    pub source_uri: Option<String>,
}
