//! HTTP transport shared by every resource service.
//!
//! [`Transport`] wraps a `reqwest::Client` with the Reevit base URL, the
//! bearer credentials, and the request timeout. It builds the full URL,
//! attaches the default headers, dispatches the request, and parses the JSON
//! response. All four services hold the same instance behind an `Arc`.

use crate::errors::{ReevitError, Result};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;

/// Client identifier sent in the `User-Agent` and `X-Reevit-Client` headers.
pub const SDK_CLIENT: &str = "reevit-rs";

/// SDK version sent in the `X-Reevit-Client-Version` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Executes HTTP requests against the Reevit API.
///
/// Immutable after construction, so it is safe to share across concurrent
/// calls without locking. The SDK imposes no serialization of requests.
#[derive(Debug)]
pub struct Transport {
    http: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl Transport {
    pub(crate) fn new(
        http: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// The resolved base URL this transport targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Make a GET request.
    pub(crate) async fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, &[], None, &[]).await
    }

    /// Make a GET request with query parameters, passed through unvalidated.
    pub(crate) async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value> {
        self.request(Method::GET, path, query, None, &[]).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::POST, path, &[], Some(body), &[]).await
    }

    /// Make a POST request with a JSON body and extra per-request headers.
    ///
    /// The extra headers apply to this request only; they are never persisted
    /// on the transport.
    pub(crate) async fn post_with_headers(
        &self,
        path: &str,
        body: &Value,
        headers: &[(&str, &str)],
    ) -> Result<Value> {
        self.request(Method::POST, path, &[], Some(body), headers)
            .await
    }

    /// Dispatch a single request and parse the JSON response.
    ///
    /// Exactly one round trip: no retries, no backoff. A non-2xx status maps
    /// to [`ReevitError::Api`] carrying the status code and the response body
    /// (parsed as JSON when possible, raw text otherwise).
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
        extra_headers: &[(&str, &str)],
    ) -> Result<Value> {
        let url = self.url(path);

        #[cfg(feature = "tracing")]
        tracing::debug!(method = %method, url = %url, "dispatching request");

        let mut request = self
            .http
            .request(method, &url)
            .timeout(self.timeout)
            .header("Content-Type", "application/json")
            .header("User-Agent", format!("{}/{}", SDK_CLIENT, SDK_VERSION))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("X-Reevit-Client", SDK_CLIENT)
            .header("X-Reevit-Client-Version", SDK_VERSION);

        if !query.is_empty() {
            request = request.query(query);
        }

        for (name, value) in extra_headers {
            request = request.header(*name, *value);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Error bodies are usually JSON, but never count on it.
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(ReevitError::Api {
                status: status.as_u16(),
                body,
            });
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base_url: &str) -> Transport {
        Transport::new(Client::new(), base_url, "pk_test_abc", 30)
    }

    #[test]
    fn test_url_building() {
        let t = transport("https://api.reevit.io");
        assert_eq!(t.url("/v1/payments"), "https://api.reevit.io/v1/payments");
    }

    #[test]
    fn test_url_building_trailing_slash() {
        let t = transport("https://api.reevit.io/");
        assert_eq!(
            t.url("/v1/policies/fraud"),
            "https://api.reevit.io/v1/policies/fraud"
        );
    }

    #[test]
    fn test_sdk_identifiers() {
        assert_eq!(SDK_CLIENT, "reevit-rs");
        assert_eq!(SDK_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
