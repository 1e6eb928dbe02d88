//! HTTP transport shared by every route.
//!
//! All requests go through [`ScryfallClient::execute`], which applies the
//! rate limit, turns error responses into [`ScryfallError`]s and retries
//! transient failures with exponential backoff.

use std::collections::BTreeMap;
use std::time::Duration;

use backon::Retryable;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use scryfall_core::ApiError;

use crate::config::ClientConfig;
use crate::error::{ScryfallError, ScryfallResult};
use crate::resilience::{backoff, RateLimiter};

/// Query parameters of a request, kept sorted so requests are reproducible.
pub type Params = BTreeMap<&'static str, String>;

/// Longest slice of an unexpected response body kept in an error message.
const MAX_ERROR_BODY: usize = 200;

/// Scryfall API client.
///
/// Wraps a [`reqwest::Client`] pre-configured with the user-agent, accept
/// header and timeout from [`ClientConfig`]. Clones share the connection
/// pool and the rate limit.
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    http: Client,
    base_url: String,
    rate_limiter: RateLimiter,
    max_retries: usize,
    download_timeout: Duration,
}

impl ScryfallClient {
    /// Create a client with the built-in defaults.
    pub fn new() -> ScryfallResult<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Create a client from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> ScryfallResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            rate_limiter: RateLimiter::new(config.requests_per_second),
            max_retries: config.max_retries,
            download_timeout: Duration::from_secs(config.download_timeout_secs),
        })
    }

    /// The API root, always ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a route relative to the API root.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a route and decode its JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
    ) -> ScryfallResult<T> {
        self.get_json_url(&self.url(path), params).await
    }

    /// GET an absolute URL (such as a `next_page` link) and decode its JSON
    /// body.
    pub async fn get_json_url<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &Params,
    ) -> ScryfallResult<T> {
        let response = self.execute(&Method::GET, url, params, None).await?;
        decode_json(url, response).await
    }

    /// POST a JSON body to a route and decode the JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ScryfallResult<T> {
        let url = self.url(path);
        let body = serde_json::to_value(body)
            .map_err(|e| ScryfallError::InvalidRequest(e.to_string()))?;
        let response = self
            .execute(&Method::POST, &url, &Params::new(), Some(&body))
            .await?;
        decode_json(&url, response).await
    }

    /// GET a route as plain text (`format=text` for card routes).
    pub async fn get_text(&self, path: &str, params: &Params) -> ScryfallResult<String> {
        let url = self.url(path);
        let response = self.execute(&Method::GET, &url, params, None).await?;
        Ok(response.text().await?)
    }

    /// GET a route as raw bytes (`format=image` for card routes).
    pub async fn get_bytes(&self, path: &str, params: &Params) -> ScryfallResult<Vec<u8>> {
        let url = self.url(path);
        self.get_bytes_url(&url, params).await
    }

    /// GET an absolute URL as raw bytes.
    pub async fn get_bytes_url(&self, url: &str, params: &Params) -> ScryfallResult<Vec<u8>> {
        let response = self.execute(&Method::GET, url, params, None).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Start a long download. The response body is left for the caller to
    /// stream.
    pub(crate) async fn start_download(&self, url: &str) -> ScryfallResult<Response> {
        let (method, params) = (Method::GET, Params::new());
        let (method, params) = (&method, &params);
        let timeout = Some(self.download_timeout);
        let attempt = move || self.send_once(method, url, params, None, timeout);
        attempt
            .retry(backoff(self.max_retries))
            .when(ScryfallError::is_transient)
            .notify(|err, delay| log::warn!("retrying download of {url} in {delay:?}: {err}"))
            .await
    }

    /// Send a request, retrying transient failures.
    async fn execute(
        &self,
        method: &Method,
        url: &str,
        params: &Params,
        body: Option<&serde_json::Value>,
    ) -> ScryfallResult<Response> {
        let attempt = move || self.send_once(method, url, params, body, None);
        attempt
            .retry(backoff(self.max_retries))
            .when(ScryfallError::is_transient)
            .notify(|err, delay| log::warn!("retrying {method} {url} in {delay:?}: {err}"))
            .await
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        params: &Params,
        body: Option<&serde_json::Value>,
        timeout: Option<Duration>,
    ) -> ScryfallResult<Response> {
        self.rate_limiter.acquire().await;

        log::debug!("{method} {url} {params:?}");
        let mut request = self.http.request(method.clone(), url);
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        log::debug!("{method} {url} -> {status}");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_from_response(status, url, &body))
    }
}

/// Map a failed response to an error. The body is used when it is an API
/// error object.
pub(crate) fn error_from_response(status: StatusCode, url: &str, body: &str) -> ScryfallError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return ScryfallError::RateLimited {
            url: url.to_string(),
        };
    }
    match serde_json::from_str::<ApiError>(body) {
        Ok(err) => ScryfallError::Api(err),
        Err(_) => ScryfallError::Http {
            status: status.as_u16(),
            url: url.to_string(),
            message: truncate(body.trim(), MAX_ERROR_BODY).to_string(),
        },
    }
}

async fn decode_json<T: DeserializeOwned>(url: &str, response: Response) -> ScryfallResult<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ScryfallError::Parse {
        url: url.to_string(),
        message: e.to_string(),
    })
}

fn normalize_base_url(base_url: &str) -> ScryfallResult<String> {
    let trimmed = base_url.trim();
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(ScryfallError::InvalidUrl {
            url: base_url.to_string(),
            message: "base URL must start with http:// or https://".to_string(),
        });
    }
    reqwest::Url::parse(trimmed).map_err(|e| ScryfallError::InvalidUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;
    if trimmed.ends_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}/"))
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://localhost:9000/api".to_string(),
            ..ClientConfig::default()
        };
        let client = ScryfallClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000/api/");
        assert_eq!(
            client.url("/cards/random"),
            "http://localhost:9000/api/cards/random"
        );
    }

    #[test]
    fn test_default_client_url() {
        let client = ScryfallClient::new().unwrap();
        assert_eq!(
            client.url("sets/mh2"),
            "https://api.scryfall.com/sets/mh2"
        );
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let config = ClientConfig {
            base_url: "ftp://api.scryfall.com/".to_string(),
            ..ClientConfig::default()
        };
        let err = ScryfallClient::from_config(&config).unwrap_err();
        assert!(matches!(err, ScryfallError::InvalidUrl { .. }));
    }

    #[test]
    fn test_error_body_becomes_api_error() {
        let body = r#"{"object":"error","code":"not_found","status":404,"details":"No card found with the given ID or set code and collector number."}"#;
        let err = error_from_response(StatusCode::NOT_FOUND, "https://api.scryfall.com/cards/xyz/1", body);
        let api = err.api_error().unwrap();
        assert_eq!(api.status, 404);
        assert_eq!(api.code, "not_found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_too_many_requests_is_rate_limited() {
        let err = error_from_response(StatusCode::TOO_MANY_REQUESTS, "https://api.scryfall.com/cards/random", "");
        assert!(matches!(err, ScryfallError::RateLimited { .. }));
        assert!(err.is_transient());
    }

    #[test]
    fn test_non_json_error_body_is_http_error() {
        let body = "<html>".to_string() + &"x".repeat(500);
        let err = error_from_response(StatusCode::BAD_GATEWAY, "https://api.scryfall.com/sets", &body);
        match err {
            ScryfallError::Http {
                status, message, ..
            } => {
                assert_eq!(status, 502);
                assert_eq!(message.chars().count(), MAX_ERROR_BODY);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("hi", 10), "hi");
    }
}
