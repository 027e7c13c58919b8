use crate::domain::payment::{PayRequest, PayResponse, RefreshResponse, TransactionId};
use crate::domain::ports::PaymentBackend;
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// HTTP client for the checkout backend.
///
/// Each call issues exactly one request. There is no retry, timeout or
/// caching; those decisions belong to the caller.
#[derive(Clone)]
pub struct HttpPaymentBackend {
    client: Client,
    base_url: String,
}

impl HttpPaymentBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            CheckoutError::Configuration(format!("Invalid backend URL {}: {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                CheckoutError::Configuration(format!("Invalid backend URL {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Decodes the body as JSON, then fails with the raw body on a non-2xx status.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await?;
    let body: Value = serde_json::from_slice(&bytes)?;

    if !status.is_success() {
        warn!(status = status.as_u16(), %body, "Backend rejected request");
        return Err(CheckoutError::Backend {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_value(body)?)
}

#[async_trait]
impl PaymentBackend for HttpPaymentBackend {
    async fn submit_payment(&self, request: &PayRequest) -> Result<PayResponse> {
        let url = self.endpoint(&["payments", "wompi"])?;
        debug!(%url, transaction_id = %request.transaction_id, "Submitting payment");

        let response = self.client.post(url).json(request).send().await?;
        decode(response).await
    }

    async fn refresh_status(&self, transaction_id: &TransactionId) -> Result<RefreshResponse> {
        let url = self.endpoint(&["transactions", transaction_id.as_str(), "refresh"])?;
        debug!(%url, "Refreshing transaction");

        let response = self.client.get(url).send().await?;
        decode(response).await
    }
}
