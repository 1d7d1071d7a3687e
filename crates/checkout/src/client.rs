//! HTTP client for the order/payment service.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CheckoutError;
use crate::types::{
    CreateOrderRequest, CreateOrderResponse, OrderItem, OrderRef, PaymentConfirmation,
    ProcessPaymentRequest,
};

/// Environment variable naming the payment service base URL.
pub const PAYMENT_URL_ENV: &str = "FORGESTORE_PAYMENT_URL";

const DEFAULT_PAYMENT_URL: &str = "http://localhost:8000";

/// Client for the external order/payment collaborator.
///
/// Stateless: holds only the base URL and a connection pool. Failures
/// propagate unchanged as [`CheckoutError`]; the caller owns retries and
/// user-facing messaging.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    base_url: String,
    client: reqwest::Client,
}

impl PaymentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Build the client from `FORGESTORE_PAYMENT_URL`.
    pub fn from_env() -> Self {
        let base_url = std::env::var(PAYMENT_URL_ENV).unwrap_or_else(|_| {
            tracing::warn!("{PAYMENT_URL_ENV} not set; using local dev default");
            DEFAULT_PAYMENT_URL.to_string()
        });
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create an order for the given items and return the payment-intent
    /// reference to charge against.
    pub async fn create_order(&self, items: &[OrderItem]) -> Result<OrderRef, CheckoutError> {
        let body = CreateOrderRequest {
            items: items.to_vec(),
        };
        let response: CreateOrderResponse = self.post_json("/api/orders/create/", &body).await?;
        Ok(response.payment_intent_id)
    }

    /// Charge a previously created order intent with a payment method.
    pub async fn process_payment(
        &self,
        payment_intent_id: &OrderRef,
        payment_method_id: &str,
    ) -> Result<PaymentConfirmation, CheckoutError> {
        let body = ProcessPaymentRequest {
            payment_intent_id: payment_intent_id.clone(),
            payment_method_id: payment_method_id.to_string(),
        };
        self.post_json("/api/process/", &body).await
    }

    async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, CheckoutError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "posting to payment service");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CheckoutError::Api(status.as_u16(), body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CheckoutError::InvalidResponse(e.to_string()))
    }
}
