//! Checkout module.
//!
//! Thin HTTP client for the external order/payment service. This core does
//! not own the payment flow: it forwards `create_order` and
//! `process_payment` calls and surfaces the collaborator's failures
//! unchanged (no retries, no local recovery).

pub mod client;
pub mod error;
pub mod types;

pub use client::PaymentClient;
pub use error::CheckoutError;
pub use types::{OrderItem, OrderRef, PaymentConfirmation, order_items};
