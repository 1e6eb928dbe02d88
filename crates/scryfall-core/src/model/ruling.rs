use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::OracleId;
use crate::vocab::RulingSource;

/// An Oracle ruling or Scryfall note attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruling {
    pub oracle_id: OracleId,
    pub source: RulingSource,
    pub published_at: NaiveDate,
    pub comment: String,
}
