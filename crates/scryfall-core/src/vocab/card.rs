open_vocab! {
    /// How a card's faces and parts are physically arranged.
    pub enum Layout {
        Normal => "normal",
        Split => "split",
        Flip => "flip",
        Transform => "transform",
        ModalDfc => "modal_dfc",
        Meld => "meld",
        Leveler => "leveler",
        Class => "class",
        Case => "case",
        Saga => "saga",
        Adventure => "adventure",
        Mutate => "mutate",
        Prototype => "prototype",
        Battle => "battle",
        Planar => "planar",
        Scheme => "scheme",
        Vanguard => "vanguard",
        Token => "token",
        DoubleFacedToken => "double_faced_token",
        Emblem => "emblem",
        Augment => "augment",
        Host => "host",
        ArtSeries => "art_series",
        ReversibleCard => "reversible_card",
    }
}

impl Layout {
    /// Layouts whose faces are printed on opposite sides of the card.
    pub const fn is_double_sided(&self) -> bool {
        matches!(
            self,
            Self::Transform
                | Self::ModalDfc
                | Self::Meld
                | Self::DoubleFacedToken
                | Self::ArtSeries
                | Self::ReversibleCard
        )
    }
}

open_vocab! {
    /// The frame design generation a card was printed with.
    pub enum Frame {
        /// The original 1993 frame.
        Original => "1993",
        /// The updated 1997 frame.
        Old => "1997",
        /// The 2003 "modern" frame.
        Modern => "2003",
        /// The 2015 frame with the holofoil stamp.
        M15 => "2015",
        /// The frame used on future-sight cards.
        Future => "future",
    }
}

open_vocab! {
    /// Special treatments applied on top of a card's frame.
    pub enum FrameEffect {
        Legendary => "legendary",
        Miracle => "miracle",
        Enchantment => "enchantment",
        Nyxtouched => "nyxtouched",
        Draft => "draft",
        Devoid => "devoid",
        Tombstone => "tombstone",
        Colorshifted => "colorshifted",
        Inverted => "inverted",
        SunMoonDfc => "sunmoondfc",
        CompassLandDfc => "compasslanddfc",
        OriginPwDfc => "originpwdfc",
        MoonEldraziDfc => "mooneldrazidfc",
        WaxingAndWaningMoonDfc => "waxingandwaningmoondfc",
        Showcase => "showcase",
        ExtendedArt => "extendedart",
        Companion => "companion",
        Etched => "etched",
        Snow => "snow",
        Lesson => "lesson",
        ShatteredGlass => "shatteredglass",
        ConvertDfc => "convertdfc",
        FanDfc => "fandfc",
        UpsideDownDfc => "upsidedowndfc",
        Spree => "spree",
        FullArt => "fullart",
    }
}

open_vocab! {
    /// A game a printing is available in.
    pub enum Game {
        Paper => "paper",
        Arena => "arena",
        Mtgo => "mtgo",
        Astral => "astral",
        Sega => "sega",
    }
}

open_vocab! {
    pub enum Rarity {
        Common => "common",
        Uncommon => "uncommon",
        Rare => "rare",
        Special => "special",
        Mythic => "mythic",
        Bonus => "bonus",
    }
}

open_vocab! {
    pub enum BorderColor {
        Black => "black",
        White => "white",
        Borderless => "borderless",
        Yellow => "yellow",
        Silver => "silver",
        Gold => "gold",
    }
}

open_vocab! {
    /// A finish a printing is available in.
    pub enum Finish {
        Foil => "foil",
        Nonfoil => "nonfoil",
        Etched => "etched",
        Glossy => "glossy",
    }
}

open_vocab! {
    /// The security stamp printed on a card, if any.
    pub enum SecurityStamp {
        Oval => "oval",
        Triangle => "triangle",
        Acorn => "acorn",
        Circle => "circle",
        Arena => "arena",
        Heart => "heart",
    }
}

open_vocab! {
    /// Quality of the image Scryfall holds for a printing.
    pub enum ImageStatus {
        Missing => "missing",
        Placeholder => "placeholder",
        Lowres => "lowres",
        HighresScan => "highres_scan",
    }
}

open_vocab! {
    /// The relation between a card and one of its related parts.
    pub enum Component {
        Token => "token",
        MeldPart => "meld_part",
        MeldResult => "meld_result",
        ComboPiece => "combo_piece",
    }
}

open_vocab! {
    /// Classification of a set.
    pub enum SetType {
        /// A yearly core set (Tenth Edition, etc).
        Core => "core",
        /// A rotational expansion set in a block (Zendikar, etc).
        Expansion => "expansion",
        /// A reprint set that contains no new cards (Modern Masters, etc).
        Masters => "masters",
        /// An Arena set designed for Alchemy.
        Alchemy => "alchemy",
        /// Masterpiece Series premium foil cards.
        Masterpiece => "masterpiece",
        /// A Commander-oriented gift set.
        Arsenal => "arsenal",
        /// From the Vault gift sets.
        FromTheVault => "from_the_vault",
        /// Spellbook series gift sets.
        Spellbook => "spellbook",
        /// Premium Deck Series decks.
        PremiumDeck => "premium_deck",
        /// Duel Decks.
        DuelDeck => "duel_deck",
        /// Special draft sets, like Conspiracy and Battlebond.
        DraftInnovation => "draft_innovation",
        /// Magic Online treasure chest prize sets.
        TreasureChest => "treasure_chest",
        /// Commander preconstructed decks.
        Commander => "commander",
        Planechase => "planechase",
        Archenemy => "archenemy",
        Vanguard => "vanguard",
        /// An un-set or a set with funny promos (Unglued, Happy Holidays, etc).
        Funny => "funny",
        /// A starter/introductory set (Portal, etc).
        Starter => "starter",
        /// A gift box set.
        Box => "box",
        /// A set that contains purely promotional cards.
        Promo => "promo",
        /// A set made up of tokens and emblems.
        Token => "token",
        /// Gold-bordered, oversize, or trophy cards that are not legal.
        Memorabilia => "memorabilia",
        /// A set of mini-games.
        Minigame => "minigame",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_round_trip_known() {
        for wire in [
            "normal",
            "split",
            "flip",
            "transform",
            "modal_dfc",
            "meld",
            "leveler",
            "class",
            "saga",
            "adventure",
            "planar",
            "battle",
            "scheme",
            "vanguard",
            "token",
            "double_faced_token",
            "emblem",
            "augment",
            "host",
            "art_series",
            "reversible_card",
        ] {
            let layout = Layout::from(wire);
            assert!(layout.is_known(), "{wire} should be a known layout");
            assert_eq!(layout.as_str(), wire);
        }
    }

    #[test]
    fn test_unknown_value_is_preserved() {
        let layout = Layout::from("hologram");
        assert_eq!(layout, Layout::Other("hologram".to_string()));
        assert!(!layout.is_known());
        assert_eq!(layout.to_string(), "hologram");
    }

    #[test]
    fn test_frame_uses_year_strings() {
        assert_eq!(Frame::from("1993"), Frame::Original);
        assert_eq!(Frame::from("1997"), Frame::Old);
        assert_eq!(Frame::from("2003"), Frame::Modern);
        assert_eq!(Frame::from("2015"), Frame::M15);
        assert_eq!(Frame::from("future"), Frame::Future);
    }

    #[test]
    fn test_frame_effect_compound_names() {
        assert_eq!(
            FrameEffect::from("waxingandwaningmoondfc"),
            FrameEffect::WaxingAndWaningMoonDfc
        );
        assert_eq!(FrameEffect::from("sunmoondfc"), FrameEffect::SunMoonDfc);
        assert_eq!(FrameEffect::ExtendedArt.as_str(), "extendedart");
    }

    #[test]
    fn test_set_type_deserialize() {
        let value: SetType = serde_json::from_str(r#""from_the_vault""#).unwrap();
        assert_eq!(value, SetType::FromTheVault);
        let value: SetType = serde_json::from_str(r#""eternal""#).unwrap();
        assert_eq!(value, SetType::Other("eternal".to_string()));
    }

    #[test]
    fn test_serialize_writes_wire_value() {
        let json = serde_json::to_string(&vec![Game::Paper, Game::Mtgo]).unwrap();
        assert_eq!(json, r#"["paper","mtgo"]"#);
        let json = serde_json::to_string(&Component::Other("spare".into())).unwrap();
        assert_eq!(json, r#""spare""#);
    }

    #[test]
    fn test_double_sided_layouts() {
        assert!(Layout::Transform.is_double_sided());
        assert!(Layout::ModalDfc.is_double_sided());
        assert!(!Layout::Split.is_double_sided());
        assert!(!Layout::Adventure.is_double_sided());
    }
}
