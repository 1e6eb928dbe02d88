use serde::{Deserialize, Serialize};

/// A list of strings, such as every known creature type or autocomplete
/// suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub uri: Option<String>,
    #[serde(default)]
    pub total_values: usize,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub data: Vec<String>,
}

impl Catalog {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.data.iter().any(|v| v == value)
    }
}
