open_vocab! {
    /// Who published a ruling.
    pub enum RulingSource {
        Wotc => "wotc",
        Scryfall => "scryfall",
    }
}

open_vocab! {
    /// How downstream data should reconcile a card migration.
    pub enum MigrationStrategy {
        /// The old card was replaced by `new_scryfall_id`; update references.
        Merge => "merge",
        /// The old card was removed and has no replacement.
        Delete => "delete",
    }
}

open_vocab! {
    /// The kind of file a bulk-data item describes.
    pub enum BulkDataKind {
        /// One card object per Oracle ID.
        OracleCards => "oracle_cards",
        /// One card object per unique illustration.
        UniqueArtwork => "unique_artwork",
        /// Every card object in English or its only printed language.
        DefaultCards => "default_cards",
        /// Every card object in every language.
        AllCards => "all_cards",
        /// Every ruling.
        Rulings => "rulings",
    }
}

impl BulkDataKind {
    /// Whether the file holds card objects (as opposed to rulings).
    pub const fn holds_cards(&self) -> bool {
        matches!(
            self,
            Self::OracleCards | Self::UniqueArtwork | Self::DefaultCards | Self::AllCards
        )
    }
}
