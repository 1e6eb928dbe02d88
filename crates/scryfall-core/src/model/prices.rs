use serde::{Deserialize, Serialize};

/// Daily price estimates. The API sends decimal strings, or `null` when a
/// price is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub usd_etched: Option<String>,
    pub eur: Option<String>,
    pub eur_foil: Option<String>,
    pub tix: Option<String>,
}

impl Prices {
    #[must_use]
    pub fn usd_value(&self) -> Option<f64> {
        parse_price(self.usd.as_deref())
    }

    #[must_use]
    pub fn eur_value(&self) -> Option<f64> {
        parse_price(self.eur.as_deref())
    }

    #[must_use]
    pub fn tix_value(&self) -> Option<f64> {
        parse_price(self.tix.as_deref())
    }
}

fn parse_price(value: Option<&str>) -> Option<f64> {
    value.and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prices() {
        let prices: Prices = serde_json::from_str(
            r#"{"usd": "0.25", "usd_foil": null, "eur": "0.18", "tix": "0.03"}"#,
        )
        .unwrap();
        assert_eq!(prices.usd_value(), Some(0.25));
        assert_eq!(prices.eur_value(), Some(0.18));
        assert_eq!(prices.tix_value(), Some(0.03));
        assert_eq!(prices.usd_foil, None);
    }

    #[test]
    fn test_unparseable_price_is_none() {
        let prices = Prices {
            usd: Some("n/a".to_string()),
            ..Prices::default()
        };
        assert_eq!(prices.usd_value(), None);
        assert_eq!(prices.eur_value(), None);
    }
}
