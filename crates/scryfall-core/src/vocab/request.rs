closed_vocab! {
    /// Image versions Scryfall serves for a card.
    pub enum ImageSize ("image size") {
        /// 146 x 204 JPG.
        Small => "small",
        /// 488 x 680 JPG.
        Normal => "normal",
        /// 672 x 936 JPG.
        Large => "large",
        /// 745 x 1040 transparent PNG.
        Png => "png",
        /// Rectangular crop of the art only.
        ArtCrop => "art_crop",
        /// Full card with the border cropped off.
        BorderCrop => "border_crop",
    }
}

closed_vocab! {
    /// Catalogs available under `catalog/`.
    pub enum CatalogName ("catalog") {
        CardNames => "card-names",
        ArtistNames => "artist-names",
        WordBank => "word-bank",
        Supertypes => "supertypes",
        CardTypes => "card-types",
        ArtifactTypes => "artifact-types",
        BattleTypes => "battle-types",
        CreatureTypes => "creature-types",
        EnchantmentTypes => "enchantment-types",
        LandTypes => "land-types",
        PlaneswalkerTypes => "planeswalker-types",
        SpellTypes => "spell-types",
        Powers => "powers",
        Toughnesses => "toughnesses",
        Loyalties => "loyalties",
        Watermarks => "watermarks",
        KeywordAbilities => "keyword-abilities",
        KeywordActions => "keyword-actions",
        AbilityWords => "ability-words",
        FlavorWords => "flavor-words",
    }
}

closed_vocab! {
    /// Strategy for omitting similar cards from search results.
    pub enum UniqueMode ("unique mode") {
        /// Remove duplicate gameplay objects.
        Cards => "cards",
        /// One result per unique artwork.
        Art => "art",
        /// Every printing.
        Prints => "prints",
    }
}

closed_vocab! {
    /// Field search results are sorted by.
    pub enum SortOrder ("sort order") {
        Name => "name",
        Set => "set",
        Released => "released",
        Rarity => "rarity",
        Color => "color",
        Usd => "usd",
        Tix => "tix",
        Eur => "eur",
        Cmc => "cmc",
        Power => "power",
        Toughness => "toughness",
        Edhrec => "edhrec",
        Penny => "penny",
        Artist => "artist",
        Review => "review",
    }
}

closed_vocab! {
    pub enum SortDirection ("sort direction") {
        Auto => "auto",
        Ascending => "asc",
        Descending => "desc",
    }
}

closed_vocab! {
    /// How `cards/named` matches the requested name.
    pub enum NameMatch ("name match") {
        Exact => "exact",
        Fuzzy => "fuzzy",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("PNG".parse::<ImageSize>().unwrap(), ImageSize::Png);
        assert_eq!(" art_crop ".parse::<ImageSize>().unwrap(), ImageSize::ArtCrop);
    }

    #[test]
    fn test_parse_unknown_lists_expected_values() {
        let err = "huge".parse::<ImageSize>().unwrap_err();
        match err {
            Error::UnknownValue {
                kind,
                value,
                expected,
            } => {
                assert_eq!(kind, "image size");
                assert_eq!(value, "huge");
                assert!(expected.starts_with("small, normal, large"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_catalog_names_use_hyphens() {
        assert_eq!(CatalogName::CreatureTypes.as_str(), "creature-types");
        assert_eq!(
            "keyword-abilities".parse::<CatalogName>().unwrap(),
            CatalogName::KeywordAbilities
        );
        assert_eq!(CatalogName::ALL.len(), 20);
    }

    #[test]
    fn test_direction_short_forms() {
        assert_eq!(SortDirection::Ascending.as_str(), "asc");
        assert_eq!(SortDirection::Descending.to_string(), "desc");
    }

    #[test]
    fn test_closed_vocab_deserialize_rejects_unknown() {
        assert!(serde_json::from_str::<UniqueMode>(r#""prints""#).is_ok());
        assert!(serde_json::from_str::<UniqueMode>(r#""everything""#).is_err());
    }
}
