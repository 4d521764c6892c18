//! Upstream HTTP plumbing shared by the tools.
//!
//! Every outbound call goes through [`fetch_json`], which turns transport,
//! timeout, status and decoding failures into an explicit [`FetchError`].
//! Callers decide how a failure degrades; nothing here retries.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::core::config::ApiConfig;

/// Why an upstream call produced no data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("upstream returned HTTP {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}

/// Build the HTTP client used for NWS calls.
pub fn build_client(apis: &ApiConfig) -> Result<Client, FetchError> {
    client_with_agent(apis, &apis.user_agent)
}

/// Build the HTTP client used for quote calls.
pub fn build_quote_client(apis: &ApiConfig) -> Result<Client, FetchError> {
    client_with_agent(apis, &apis.quote_user_agent)
}

fn client_with_agent(apis: &ApiConfig, user_agent: &str) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(apis.request_timeout())
        .user_agent(user_agent)
        .build()
        .map_err(FetchError::from)
}

/// Send a request and decode a 2xx JSON body into `T`.
pub async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, FetchError> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    debug!("Upstream response received: {} bytes", body.len());

    serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(timeout_ms: u64) -> Client {
        let mut apis = Config::default().apis;
        apis.request_timeout_ms = timeout_ms;
        build_client(&apis).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_json_success_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .and(header("user-agent", "weather-app/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let value: serde_json::Value =
            fetch_json(client(2_000).get(format!("{}/data", server.uri())))
                .await
                .unwrap();
        assert_eq!(value["ok"], 1);
    }

    #[tokio::test]
    async fn test_fetch_json_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result: Result<serde_json::Value, _> =
            fetch_json(client(2_000).get(server.uri())).await;
        assert!(matches!(result, Err(FetchError::Status(503))));
    }

    #[tokio::test]
    async fn test_fetch_json_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let result: Result<serde_json::Value, _> =
            fetch_json(client(2_000).get(server.uri())).await;
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_json_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let result: Result<serde_json::Value, _> =
            fetch_json(client(200).get(server.uri())).await;
        assert!(matches!(result, Err(FetchError::Timeout)));
    }
}
