//! Checkout receipts.

use crate::checkout::ShipmentNotice;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptLine {
    /// Units purchased.
    pub quantity: i64,
    /// Product name.
    pub name: String,
    /// Line total (quantity times unit price).
    pub line_total: Money,
}

/// Structured record of a completed checkout.
///
/// The core returns this value; presentation is the caller's concern.
/// `Display` renders the console form, with line totals truncated to whole
/// currency units and the money summary at two decimals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    /// Name of the paying customer.
    pub customer_name: String,
    /// One line per cart entry, in cart order.
    pub lines: Vec<ReceiptLine>,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping fee charged.
    pub shipping_fee: Money,
    /// Amount charged: subtotal plus shipping.
    pub total: Money,
    /// Customer balance after payment.
    pub balance_after: Money,
    /// Shipment notice, when anything shipped.
    pub shipment: Option<ShipmentNotice>,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Checkout receipt **")?;
        for line in &self.lines {
            writeln!(
                f,
                "{}x {}  {}",
                line.quantity,
                line.name,
                line.line_total.whole_units()
            )?;
        }
        writeln!(f, "----------------------")?;
        writeln!(f, "Subtotal {}", self.subtotal)?;
        writeln!(f, "Shipping {}", self.shipping_fee)?;
        writeln!(f, "Amount   {}", self.total)?;
        write!(
            f,
            "{}'s balance after payment: ${}",
            self.customer_name, self.balance_after
        )
    }
}
