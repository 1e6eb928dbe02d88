use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::vocab::{Format, Legality};

/// A card's legality in each format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Legalities(BTreeMap<Format, Legality>);

impl Legalities {
    /// Legality in `format`. Formats the API did not mention are
    /// [`Legality::NotLegal`].
    #[must_use]
    pub fn get(&self, format: &Format) -> Legality {
        self.0.get(format).cloned().unwrap_or(Legality::NotLegal)
    }

    /// Whether the API reported anything for `format`.
    #[must_use]
    pub fn contains(&self, format: &Format) -> bool {
        self.0.contains_key(format)
    }

    /// Formats where the card is legal or restricted.
    pub fn playable_formats(&self) -> impl Iterator<Item = &Format> {
        self.0
            .iter()
            .filter(|(_, legality)| legality.is_playable())
            .map(|(format, _)| format)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Format, &Legality)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Format, Legality)> for Legalities {
    fn from_iter<I: IntoIterator<Item = (Format, Legality)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
