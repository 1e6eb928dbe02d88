use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Error;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|source| Error::InvalidId {
                        value: s.to_string(),
                        source,
                    })
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl AsRef<Uuid> for $name {
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }
    };
}

define_id!(ScryfallId, "Scryfall's identifier for a single card printing.");
define_id!(
    OracleId,
    "Identifier shared by every printing of the same card (its Oracle identity)."
);
define_id!(
    IllustrationId,
    "Identifier for a piece of card artwork, stable across reprints."
);
define_id!(SetId, "Scryfall's identifier for a set.");

#[cfg(test)]
mod tests {
    use super::*;

    const DELVER: &str = "11bf83bb-c95b-4b4f-9a56-ce7a1816307a";

    #[test]
    fn test_id_from_str() {
        let id: ScryfallId = DELVER.parse().unwrap();
        assert_eq!(id.to_string(), DELVER);
    }

    #[test]
    fn test_id_from_str_trims_whitespace() {
        let id: ScryfallId = format!("  {DELVER}\n").parse().unwrap();
        assert_eq!(id.to_string(), DELVER);
    }

    #[test]
    fn test_id_from_str_rejects_garbage() {
        let err = "not-a-uuid".parse::<OracleId>().unwrap_err();
        assert!(matches!(err, Error::InvalidId { ref value, .. } if value == "not-a-uuid"));
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let id: SetId = DELVER.parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{DELVER}\""));
        let back: SetId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::parse_str(DELVER).unwrap();
        let id = IllustrationId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }
}
