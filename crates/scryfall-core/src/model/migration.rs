use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ids::ScryfallId;
use crate::vocab::MigrationStrategy;

/// A record of a card object being merged into another or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMigration {
    pub id: Uuid,
    #[serde(default)]
    pub uri: String,
    pub performed_at: NaiveDate,
    pub migration_strategy: MigrationStrategy,
    pub old_scryfall_id: ScryfallId,
    /// Replacement card, present for merges.
    pub new_scryfall_id: Option<ScryfallId>,
    pub note: Option<String>,
}
