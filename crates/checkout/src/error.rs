//! Checkout transport error model.

use thiserror::Error;

/// Failure talking to the external order/payment service.
///
/// These are surfaced unchanged to the caller, which owns user-facing
/// messaging; nothing here is retried or recovered locally.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("payment API error (status {0}): {1}")]
    Api(u16, String),

    /// The service answered 2xx but the payload did not parse.
    #[error("invalid response payload: {0}")]
    InvalidResponse(String),
}
