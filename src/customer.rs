//! Customer account.

use crate::error::CheckoutError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer with a spendable balance.
///
/// The balance is private so it can only move through the guarded
/// [`deduct_balance`](Customer::deduct_balance) and
/// [`add_balance`](Customer::add_balance); it never goes negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    name: String,
    email: String,
    address: String,
    balance: Money,
}

impl Customer {
    /// Create a customer with an opening balance.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        balance: Money,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
            balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Shipping destination address.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Debit `amount` from the balance. Either fully succeeds or fails
    /// with [`CheckoutError::InsufficientBalance`] leaving the balance
    /// unchanged.
    pub fn deduct_balance(&mut self, amount: Money) -> Result<(), CheckoutError> {
        if amount > self.balance {
            return Err(CheckoutError::InsufficientBalance {
                available: self.balance,
                required: amount,
            });
        }
        self.balance = self.balance - amount;
        Ok(())
    }

    /// Credit `amount` to the balance (top-up or refund).
    pub fn add_balance(&mut self, amount: Money) {
        self.balance = self.balance + amount;
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer: {} ({}) - Balance: ${}\nAddress: {}",
            self.name, self.email, self.balance, self.address
        )
    }
}
