//! Cart domain module.
//!
//! Client-side cart state: ordered lines over catalog products, with the
//! quantity and total arithmetic the storefront UI renders. No IO, no
//! persistence; a cart lives for one browsing session.

pub mod cart;

pub use cart::{Cart, CartLine};
