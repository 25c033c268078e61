use std::time::Duration;

use async_trait::async_trait;
use kapu_core::{DeliveryOption, PaymentSummary};

/// Client-side failures against the order service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid order service base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Read-only view of the order service backing the checkout page.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Fetch the available delivery options with expanded estimated
    /// delivery times.
    async fn delivery_options(&self) -> Result<Vec<DeliveryOption>, ClientError>;

    /// Fetch the aggregate payment summary for the current order.
    async fn payment_summary(&self) -> Result<PaymentSummary, ClientError>;
}

/// HTTP implementation of [`OrderService`]. Single-shot reads: no retry,
/// no auth, no pagination; the per-request timeout is the only resilience
/// feature.
pub struct OrderServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl OrderServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl OrderService for OrderServiceClient {
    async fn delivery_options(&self) -> Result<Vec<DeliveryOption>, ClientError> {
        let url = format!("{}/api/delivery-options", self.base_url);
        tracing::debug!(%url, "Fetching delivery options");

        let options = self
            .http
            .get(&url)
            .query(&[("expand", "estimatedDeliveryTime")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(options)
    }

    async fn payment_summary(&self) -> Result<PaymentSummary, ClientError> {
        let url = format!("{}/api/payment-summary", self.base_url);
        tracing::debug!(%url, "Fetching payment summary");

        let summary = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(summary)
    }
}
