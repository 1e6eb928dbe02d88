//! Type-line parsing.
//!
//! A type line such as `Legendary Snow Creature — Elf Druid` is split into
//! supertypes, card types and subtypes. Lines of multi-face cards
//! (`Instant // Sorcery`) are parsed per face and merged.

use serde::{Deserialize, Serialize};

/// Words that are supertypes rather than card types.
pub const SUPERTYPES: &[&str] = &[
    "Basic",
    "Legendary",
    "Ongoing",
    "Snow",
    "World",
    "Elite",
    "Host",
];

const FACE_SEPARATOR: &str = " // ";
const SUBTYPE_SEPARATOR: char = '—';

/// The three parts of a type line, each in first-seen order without
/// duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeLine {
    pub supertypes: Vec<String>,
    pub types: Vec<String>,
    pub subtypes: Vec<String>,
}

impl TypeLine {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        line.split(FACE_SEPARATOR)
            .map(Self::parse_face)
            .fold(Self::default(), Self::merge)
    }

    /// Union of two parsed lines, keeping `self`'s order first.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        extend_unique(&mut self.supertypes, other.supertypes);
        extend_unique(&mut self.types, other.types);
        extend_unique(&mut self.subtypes, other.subtypes);
        self
    }

    /// Whether `word` appears as a card type (case-insensitive).
    #[must_use]
    pub fn has_type(&self, word: &str) -> bool {
        self.types.iter().any(|t| t.eq_ignore_ascii_case(word))
    }

    fn parse_face(face: &str) -> Self {
        let (left, right) = match face.split_once(SUBTYPE_SEPARATOR) {
            Some((left, right)) => (left, Some(right)),
            None => (face, None),
        };

        let mut parsed = Self::default();
        for word in left.split_whitespace() {
            let bucket = if SUPERTYPES.contains(&word) {
                &mut parsed.supertypes
            } else {
                &mut parsed.types
            };
            push_unique(bucket, word);
        }
        for word in right.into_iter().flat_map(str::split_whitespace) {
            push_unique(&mut parsed.subtypes, word);
        }
        parsed
    }
}

fn push_unique(bucket: &mut Vec<String>, word: &str) {
    if !bucket.iter().any(|w| w == word) {
        bucket.push(word.to_string());
    }
}

fn extend_unique(bucket: &mut Vec<String>, words: Vec<String>) {
    for word in words {
        if !bucket.contains(&word) {
            bucket.push(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supertypes_types_subtypes() {
        let line = TypeLine::parse("Legendary Snow Creature — Elf Druid");
        assert_eq!(line.supertypes, vec!["Legendary", "Snow"]);
        assert_eq!(line.types, vec!["Creature"]);
        assert_eq!(line.subtypes, vec!["Elf", "Druid"]);
    }

    #[test]
    fn test_no_subtypes_without_dash() {
        let line = TypeLine::parse("Basic Land");
        assert_eq!(line.supertypes, vec!["Basic"]);
        assert_eq!(line.types, vec!["Land"]);
        assert!(line.subtypes.is_empty());
    }

    #[test]
    fn test_multi_face_union_in_order() {
        let line = TypeLine::parse("Artifact Creature — Golem // Artifact — Equipment");
        assert_eq!(line.types, vec!["Artifact", "Creature"]);
        assert_eq!(line.subtypes, vec!["Golem", "Equipment"]);
    }

    #[test]
    fn test_duplicate_words_collapse() {
        let line = TypeLine::parse("Instant — Adventure // Creature — Human Knight // Instant");
        assert_eq!(line.types, vec!["Instant", "Creature"]);
        assert_eq!(line.subtypes, vec!["Adventure", "Human", "Knight"]);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(TypeLine::parse(""), TypeLine::default());
    }

    #[test]
    fn test_has_type() {
        let line = TypeLine::parse("Enchantment Creature — God");
        assert!(line.has_type("creature"));
        assert!(!line.has_type("Land"));
    }
}
