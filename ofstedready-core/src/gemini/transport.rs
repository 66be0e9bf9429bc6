//! HTTP seam between the generation client and the network

use super::client::ClientConfig;
use super::error::TransportError;
use super::models::GenerateContentRequest;
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use reqwest::redirect::Policy;

/// Status and raw body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a JSON POST and hands back whatever the server said.
///
/// Implementations return `Err` only when no response was received; any HTTP
/// status, success or not, is an `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        request: &GenerateContentRequest,
    ) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by `reqwest` with rustls and certificate
/// verification left on
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: ReqwestClient,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let http = ReqwestClient::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(config.pool_idle_timeout)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(Policy::limited(config.max_redirects))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| TransportError::new(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        request: &GenerateContentRequest,
    ) -> Result<HttpResponse, TransportError> {
        let response = self.http.post(url).json(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
