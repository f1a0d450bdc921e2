//! HTTP client for the prediction service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::traits::PredictionTransport;
use crate::types::{RequestPayload, ServiceInfo};
use crate::{PredictError, Result};

/// Default prediction endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/predict";

/// Client for a prediction endpoint.
///
/// No request timeout is set unless one is configured; a request runs until
/// the network stack resolves it.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: Client,
    endpoint: Url,
}

impl PredictionClient {
    /// Create a client for the given endpoint URL.
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_timeout(endpoint, None)
    }

    /// Create a client with an optional per-request timeout.
    pub fn with_timeout(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            PredictError::Configuration(format!("invalid endpoint URL {endpoint:?}: {e}"))
        })?;

        let mut builder = Client::builder().user_agent(crate::version::user_agent());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| PredictError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST a payload and parse the response body as JSON.
    ///
    /// The HTTP status is not inspected: an error status with a JSON body
    /// is returned like any other body, so the caller routes it by its
    /// `status` field.
    pub async fn predict(&self, payload: &RequestPayload) -> Result<Value> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        debug!(status = %response.status(), "prediction endpoint responded");

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the service's description from `GET /` on the endpoint's origin.
    pub async fn service_info(&self) -> Result<ServiceInfo> {
        let url = self.endpoint.join("/").map_err(|e| {
            PredictError::Configuration(format!("failed to derive service root URL: {e}"))
        })?;

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Api {
                status: status.as_u16(),
                message: format!("service info request failed: {status}"),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PredictionTransport for PredictionClient {
    async fn predict(&self, payload: &RequestPayload) -> Result<Value> {
        PredictionClient::predict(self, payload).await
    }
}
