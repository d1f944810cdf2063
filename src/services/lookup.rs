//! Company lookup: validate, fetch once, map

use crate::domain::business_id::validate_business_id;
use crate::domain::company::CompanyInfo;
use crate::domain::error::CompanyInfoError;
use crate::infra::config::Config;
use crate::io::transport::{HttpTransport, Transport, TransportError};
use crate::services::mapper::map_company_info;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Registry client
///
/// Stateless apart from the transport, so one instance can be shared between
/// callers. Each lookup issues at most one request; nothing is retried or cached.
pub struct CompanyInfoService<T: Transport = HttpTransport> {
    transport: T,
}

impl CompanyInfoService<HttpTransport> {
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> CompanyInfoService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Look up a company by business ID.
    ///
    /// Fails with `InvalidBusinessId` before any request, `CompanyNotFound` when
    /// the request fails, and `UnexpectedClientData` when the response cannot be
    /// mapped.
    pub async fn get_company_information(
        &self,
        business_id: &str,
    ) -> Result<CompanyInfo, CompanyInfoError> {
        let business_id = validate_business_id(business_id)?;
        let start = Instant::now();
        debug!(business_id = %business_id, "company_lookup_started");

        let body = self.transport.fetch(&business_id).await.map_err(|e| {
            warn!(business_id = %business_id, error = %e, "company_fetch_failed");
            CompanyInfoError::not_found(business_id.as_str())
        })?;

        let info = map_company_info(&business_id, &body)?;

        info!(
            business_id = %business_id,
            name = %info.name(),
            has_website = info.website().is_some(),
            business_lines = info.business_lines().len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "company_lookup_completed"
        );

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::business_id::BusinessId;
    use async_trait::async_trait;
    use bytes::Bytes;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records requested IDs and replays a canned outcome
    struct MockTransport {
        response: Option<Bytes>,
        requests: Mutex<Vec<String>>,
    }

    impl MockTransport {
        fn ok(body: serde_json::Value) -> Self {
            Self {
                response: Some(Bytes::from(serde_json::to_vec(&body).unwrap())),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self { response: None, requests: Mutex::new(Vec::new()) }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn fetch(&self, business_id: &BusinessId) -> Result<Bytes, TransportError> {
            self.requests.lock().unwrap().push(business_id.to_string());
            self.response
                .clone()
                .ok_or(TransportError::Status(reqwest::StatusCode::NOT_FOUND))
        }
    }

    fn registry_body() -> serde_json::Value {
        json!({
            "results": [{
                "businessId": "1234567-8",
                "name": "Example Oy",
                "addresses": [
                    { "registrationDate": "2023-04-04", "street": "A", "city": "ESPOO", "postCode": "02100" },
                    { "registrationDate": "2023-05-04", "street": "B", "city": "HELSINKI", "postCode": "00100" }
                ],
                "contactDetails": [
                    { "registrationDate": "2023-01-01", "value": "not a url" },
                    { "registrationDate": "2023-02-01", "value": "www.example.com" }
                ],
                "businessLines": [
                    { "registrationDate": "2020-01-01", "code": "62010", "name": "Software", "language": "EN" },
                    { "registrationDate": "2020-01-01", "code": "62010", "name": "Ohjelmistot" }
                ]
            }]
        })
    }

    #[tokio::test]
    async fn test_successful_lookup() {
        let service = CompanyInfoService::new(MockTransport::ok(registry_body()));

        let info = service.get_company_information("1234567-8").await.unwrap();

        assert_eq!(service.transport().requests(), vec!["1234567-8".to_string()]);
        assert_eq!(info.name(), "Example Oy");
        assert_eq!(info.website(), Some("www.example.com"));
        assert_eq!(info.current_address().street(), "B");
        assert_eq!(info.current_address().postal_code(), "00100");
        assert_eq!(info.business_lines().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_business_id_never_fetches() {
        let service = CompanyInfoService::new(MockTransport::ok(registry_body()));

        for id in ["111-1", "11111111-1", "123456a-b", "         "] {
            let err = service.get_company_information(id).await.unwrap_err();
            assert_eq!(err, CompanyInfoError::invalid_business_id(id));
        }

        assert!(service.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_found() {
        let service = CompanyInfoService::new(MockTransport::failing());

        let err = service.get_company_information("1234567-8").await.unwrap_err();

        assert_eq!(err, CompanyInfoError::not_found("1234567-8"));
        assert_eq!(service.transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_response_without_results_is_unexpected_data() {
        let service = CompanyInfoService::new(MockTransport::ok(json!({ "foo": "bar" })));

        let err = service.get_company_information("1234567-8").await.unwrap_err();

        assert_eq!(err, CompanyInfoError::unexpected_data("1234567-8"));
    }

    #[tokio::test]
    async fn test_empty_addresses_is_unexpected_data() {
        let mut body = registry_body();
        body["results"][0]["addresses"] = json!([]);
        let service = CompanyInfoService::new(MockTransport::ok(body));

        let err = service.get_company_information("1234567-8").await.unwrap_err();

        assert!(matches!(err, CompanyInfoError::UnexpectedClientData { .. }));
    }
}
