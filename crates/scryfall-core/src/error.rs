use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid identifier {value:?}: {source}")]
    InvalidId {
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("unknown {kind} {value:?} (expected one of: {expected})")]
    UnknownValue {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
