use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::vocab::BulkDataKind;

/// Descriptor of a downloadable bulk-data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkData {
    pub id: Uuid,
    /// API link to this descriptor.
    #[serde(default)]
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: BulkDataKind,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Link to the file itself. Changes every time the file is regenerated.
    pub download_uri: String,
    pub updated_at: DateTime<Utc>,
    /// Size of the file in bytes.
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub content_encoding: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_decode_bulk_data() {
        let bulk: BulkData = serde_json::from_str(
            r#"{
                "object": "bulk_data",
                "id": "27bf3214-1271-490b-bdfe-c0be6c23d02e",
                "type": "oracle_cards",
                "updated_at": "2024-05-01T09:02:17.386+00:00",
                "uri": "https://api.scryfall.com/bulk-data/27bf3214-1271-490b-bdfe-c0be6c23d02e",
                "name": "Oracle Cards",
                "description": "A JSON file containing one Scryfall card object for each Oracle ID.",
                "size": 161306342,
                "download_uri": "https://data.scryfall.io/oracle-cards/oracle-cards-20240501090217.json",
                "content_type": "application/json",
                "content_encoding": "gzip"
            }"#,
        )
        .unwrap();
        assert_eq!(bulk.kind, BulkDataKind::OracleCards);
        assert!(bulk.kind.holds_cards());
        assert_eq!(bulk.size, 161_306_342);
        assert_eq!(
            bulk.updated_at.date_naive(),
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap().date_naive()
        );
    }
}
