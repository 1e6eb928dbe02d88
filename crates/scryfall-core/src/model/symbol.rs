use serde::{Deserialize, Serialize};

use crate::vocab::Color;

/// A symbol that can appear in mana costs or rules text, such as `{T}` or
/// `{W/U}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSymbol {
    /// Plaintext form, e.g. `{W/U}`.
    pub symbol: String,
    /// Alternate form without braces, if there is one.
    pub loose_variant: Option<String>,
    /// English description.
    pub english: String,
    /// Whether the symbol may be written backwards (`{U/W}` for `{W/U}`).
    #[serde(default)]
    pub transposable: bool,
    #[serde(default)]
    pub represents_mana: bool,
    pub mana_value: Option<f64>,
    /// Older name of `mana_value`, still sent by the API.
    pub cmc: Option<f64>,
    #[serde(default)]
    pub appears_in_mana_costs: bool,
    #[serde(default)]
    pub funny: bool,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub hybrid: bool,
    #[serde(default)]
    pub phyrexian: bool,
    /// Other ways Gatherer has written this symbol.
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub gatherer_alternates: Vec<String>,
    pub svg_uri: Option<String>,
}

impl CardSymbol {
    /// Mana value, falling back to the older `cmc` field.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.mana_value.or(self.cmc)
    }
}

/// A mana cost normalized by the `symbology/parse-mana` route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManaCost {
    /// Normalized cost, e.g. `{X}{2}{W}{U}`.
    pub cost: String,
    pub cmc: f64,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub colorless: bool,
    #[serde(default)]
    pub monocolored: bool,
    #[serde(default)]
    pub multicolored: bool,
}
