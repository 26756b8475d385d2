use std::sync::Arc;

use crate::config::{DefaultConfiguration, RequestConfig};
use crate::http_client::{HttpClient, HttpResponse, ReqwestHttpClient};
use crate::request::{EffectiveRequest, RequestBuilder};
use crate::{NewsError, ResponseData};

/// Stateless news API client.
///
/// Each call merges, validates and serializes its own config and performs one
/// GET. Responses are returned as-is: no retry, and no interpretation of the
/// HTTP status.
#[derive(Clone)]
pub struct NewsClient {
    http_client: Arc<dyn HttpClient>,
    defaults: DefaultConfiguration,
    timeout_ms: Option<u64>,
}

impl NewsClient {
    pub fn new(http_client: Arc<dyn HttpClient>, defaults: DefaultConfiguration) -> Self {
        Self {
            http_client,
            defaults,
            timeout_ms: None,
        }
    }

    /// reqwest transport with the process-wide defaults.
    pub fn from_env() -> Self {
        Self::new(
            Arc::new(ReqwestHttpClient::new()),
            DefaultConfiguration::global().clone(),
        )
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn defaults(&self) -> &DefaultConfiguration {
        &self.defaults
    }

    /// Build the request without sending it.
    pub fn prepare(&self, config: RequestConfig) -> Result<EffectiveRequest, NewsError> {
        Ok(RequestBuilder::new(&self.defaults).build(config)?)
    }

    /// Validate, serialize and send one GET; return the raw response.
    pub async fn make_request(&self, config: RequestConfig) -> Result<HttpResponse, NewsError> {
        let request = self.prepare(config)?;

        let mut http_request = request.to_http_request();
        if let Some(timeout_ms) = self.timeout_ms {
            http_request = http_request.with_timeout_ms(timeout_ms);
        }

        tracing::debug!(url = %request.redacted_url(), "dispatching news request");
        let response = self.http_client.execute(http_request).await?;
        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "news response received"
        );

        Ok(response)
    }

    /// [`make_request`](Self::make_request) plus decoding of the body.
    ///
    /// An upstream `status: "error"` body decodes successfully; check
    /// [`ResponseData::upstream_error`].
    pub async fn fetch(&self, config: RequestConfig) -> Result<ResponseData, NewsError> {
        let response = self.make_request(config).await?;
        Ok(ResponseData::from_response(&response)?)
    }
}

impl std::fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsClient")
            .field("base_url", &self.defaults.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}
