use serde::{Deserialize, Serialize};

use crate::ids::ScryfallId;
use crate::vocab::Component;

/// A card closely related to another: a token it makes, a meld partner,
/// or a combo piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedCard {
    pub id: ScryfallId,
    pub component: Component,
    pub name: String,
    pub type_line: String,
    /// API link to the related card.
    pub uri: String,
}
