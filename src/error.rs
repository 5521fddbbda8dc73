//! Checkout error types.

use crate::money::Money;
use thiserror::Error;

/// Errors that can occur while building a cart or running a checkout.
///
/// All variants are synchronous, recoverable failures. Every validation
/// failure aborts the enclosing operation immediately with no side effects
/// applied; when several violations hold at once, only the first one found
/// (in the operation's fixed check order) is reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckoutError {
    /// Unknown product reference or non-positive quantity.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested quantity exceeds available stock, at add time or at
    /// checkout time.
    #[error("Insufficient stock for {name}. Available: {available}, Requested: {requested}")]
    OutOfStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Perishable product past its expiration date.
    #[error("Product {name} has expired")]
    Expired { name: String },

    /// Checkout attempted on a cart with no items.
    #[error("Cart is empty")]
    EmptyCart,

    /// Charge exceeds the customer's balance.
    #[error("Insufficient balance. Available: ${available}, Required: ${required}")]
    InsufficientBalance { available: Money, required: Money },
}
