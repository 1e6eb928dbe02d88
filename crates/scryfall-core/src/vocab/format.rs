open_vocab! {
    /// A play format Scryfall tracks legality for.
    pub enum Format {
        Standard => "standard",
        Future => "future",
        Historic => "historic",
        Timeless => "timeless",
        Gladiator => "gladiator",
        Pioneer => "pioneer",
        Explorer => "explorer",
        Modern => "modern",
        Legacy => "legacy",
        Pauper => "pauper",
        Vintage => "vintage",
        Penny => "penny",
        Commander => "commander",
        Oathbreaker => "oathbreaker",
        StandardBrawl => "standardbrawl",
        Brawl => "brawl",
        HistoricBrawl => "historicbrawl",
        Alchemy => "alchemy",
        PauperCommander => "paupercommander",
        Duel => "duel",
        Oldschool => "oldschool",
        Premodern => "premodern",
        Predh => "predh",
    }
}

open_vocab! {
    /// A card's status in a format.
    pub enum Legality {
        Legal => "legal",
        NotLegal => "not_legal",
        Restricted => "restricted",
        Banned => "banned",
    }
}

impl Legality {
    /// Whether at least one copy may be played.
    pub const fn is_playable(&self) -> bool {
        matches!(self, Self::Legal | Self::Restricted)
    }
}
