//! Error types for the Scryfall client.

use scryfall_core::ApiError;
use thiserror::Error;

/// Errors that can occur while talking to the API.
#[derive(Debug, Error)]
pub enum ScryfallError {
    /// The API answered with its own error object.
    #[error("Scryfall API error: {0}")]
    Api(ApiError),

    /// The API returned HTTP 429.
    #[error("rate limited by Scryfall ({url})")]
    RateLimited { url: String },

    /// A non-success response that did not carry an API error object.
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        status: u16,
        url: String,
        message: String,
    },

    /// An error propagated from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A response body could not be decoded.
    #[error("parse error from {url}: {message}")]
    Parse { url: String, message: String },

    /// A configured or returned URL is unusable.
    #[error("invalid URL {url:?}: {message}")]
    InvalidUrl { url: String, message: String },

    /// A required request parameter was missing or blank.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The request was rejected before being sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A collection request named more cards than the API accepts.
    #[error("too many identifiers: {count} (at most {max} per request)")]
    TooManyIdentifiers { count: usize, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error propagated from the data model.
    #[error("data error: {0}")]
    Core(#[from] scryfall_core::Error),
}

impl ScryfallError {
    /// Returns `true` when the error is transient and the request may
    /// succeed if retried.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RateLimited { .. } => true,
            Self::Http { status, .. } => *status >= 500,
            Self::Api(err) => err.status == 429 || err.status >= 500,
            Self::Request(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` when the requested object does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api(err) => err.is_not_found(),
            Self::Http { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// The API error object, if the API sent one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ApiError> for ScryfallError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

/// Convenience alias for client results.
pub type ScryfallResult<T> = std::result::Result<T, ScryfallError>;
