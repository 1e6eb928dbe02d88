open_vocab! {
    /// A Magic color, written with its single-letter abbreviation.
    pub enum Color {
        White => "W",
        Blue => "U",
        Black => "B",
        Red => "R",
        Green => "G",
        /// Colorless mana, as found in `produced_mana` and symbol colors.
        Colorless => "C",
    }
}

impl Color {
    /// English name of the color.
    pub fn name(&self) -> &str {
        match self {
            Self::White => "White",
            Self::Blue => "Blue",
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Colorless => "Colorless",
            Self::Other(value) => value.as_str(),
        }
    }

    /// Render a color list the way Scryfall abbreviates it (`WUBRG` order).
    pub fn abbreviate(colors: &[Self]) -> String {
        let mut sorted: Vec<&Self> = colors.iter().collect();
        sorted.sort_by_key(|&color| (color.wubrg_rank(), color.as_str()));
        sorted.dedup();
        sorted.iter().map(|color| color.as_str()).collect()
    }

    fn wubrg_rank(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Blue => 1,
            Self::Black => 2,
            Self::Red => 3,
            Self::Green => 4,
            Self::Colorless => 5,
            Self::Other(_) => 6,
        }
    }
}
