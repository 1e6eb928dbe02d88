use serde::{Deserialize, Serialize};

/// One page of a paginated result.
///
/// When `has_more` is set, `next_page` links to the following page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScryfallList<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    pub next_page: Option<String>,
    /// Total number of cards across all pages. Only card lists carry it.
    pub total_cards: Option<u32>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub warnings: Vec<String>,
}

impl<T> ScryfallList<T> {
    /// Link to the following page, if the API says there is one.
    #[must_use]
    pub fn next_page_uri(&self) -> Option<&str> {
        if self.has_more {
            self.next_page.as_deref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

impl<T> Default for ScryfallList<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            has_more: false,
            next_page: None,
            total_cards: None,
            warnings: Vec::new(),
        }
    }
}

impl<T> IntoIterator for ScryfallList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ScryfallList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_requires_has_more() {
        let list: ScryfallList<String> = serde_json::from_str(
            r#"{
                "object": "list",
                "has_more": false,
                "next_page": "https://api.scryfall.com/cards/search?page=2",
                "data": ["a"]
            }"#,
        )
        .unwrap();
        assert_eq!(list.next_page_uri(), None);
        assert_eq!(list.total_cards, None);
    }

    #[test]
    fn test_next_page_when_more() {
        let list: ScryfallList<String> = serde_json::from_str(
            r#"{
                "object": "list",
                "total_cards": 410,
                "has_more": true,
                "next_page": "https://api.scryfall.com/cards/search?page=2",
                "data": ["a", "b"],
                "warnings": ["Invalid expression “is:xyz” was ignored."]
            }"#,
        )
        .unwrap();
        assert_eq!(
            list.next_page_uri(),
            Some("https://api.scryfall.com/cards/search?page=2")
        );
        assert_eq!(list.total_cards, Some(410));
        assert_eq!(list.len(), 2);
        assert_eq!(list.warnings.len(), 1);
        assert_eq!(list.into_data(), vec!["a", "b"]);
    }

    #[test]
    fn test_has_more_without_link() {
        let list = ScryfallList::<u8> {
            has_more: true,
            ..ScryfallList::default()
        };
        assert!(list.is_empty());
        assert_eq!(list.next_page_uri(), None);
    }
}
