//! Registry transport
//!
//! One GET per lookup against `{base_url}/{business_id}`. The service only
//! cares whether it got a body back, so every failure mode here is folded
//! into `TransportError` and later reported as "company not found".

use crate::domain::business_id::BusinessId;
use crate::infra::config::Config;
use async_trait::async_trait;
use bytes::Bytes;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error};

/// Log request failure (cold path)
#[cold]
fn log_fetch_failed(url: &str, e: &TransportError) {
    error!(url = %url, error = %e, "registry_fetch_failed");
}

#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, timeout, TLS or body read failure
    #[error("registry request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Registry answered with a non-2xx status
    #[error("registry responded with status {0}")]
    Status(reqwest::StatusCode),
}

/// Fetches the raw registry document for a business ID
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, business_id: &BusinessId) -> Result<Bytes, TransportError>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        // Built once so connections are reused across lookups
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms()))
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self { client, base_url: config.base_url().trim_end_matches('/').to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, business_id: &BusinessId) -> String {
        format!("{}/{}", self.base_url, business_id)
    }

    async fn get(&self, url: &str) -> Result<Bytes, TransportError> {
        let response =
            self.client.get(url).header("Accept", "application/json").send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        Ok(response.bytes().await?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, business_id: &BusinessId) -> Result<Bytes, TransportError> {
        let url = self.url_for(business_id);
        let start = Instant::now();

        match self.get(&url).await {
            Ok(body) => {
                debug!(
                    url = %url,
                    bytes = body.len(),
                    latency_ms = start.elapsed().as_millis() as u64,
                    "registry_fetch_completed"
                );
                Ok(body)
            }
            Err(e) => {
                log_fetch_failed(&url, &e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::business_id::validate_business_id;

    #[test]
    fn test_url_for_default_base() {
        let transport = HttpTransport::new(&Config::default()).unwrap();
        let id = validate_business_id("1234567-8").unwrap();
        assert_eq!(transport.url_for(&id), "https://avoindata.prh.fi/bis/v1/1234567-8");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config::default().with_base_url("http://127.0.0.1:9999/bis/v1/");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url(), "http://127.0.0.1:9999/bis/v1");

        let id = validate_business_id("123456-7").unwrap();
        assert_eq!(transport.url_for(&id), "http://127.0.0.1:9999/bis/v1/123456-7");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let config = Config::default().with_base_url("http://127.0.0.1:9").with_timeout_ms(500);
        let transport = HttpTransport::new(&config).unwrap();
        let id = validate_business_id("1234567-8").unwrap();

        let err = transport.fetch(&id).await.unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
    }
}
