//! Checkout module.
//!
//! Contains the shipping calculator, receipt types, and the orchestrator
//! that runs a cart through validation, pricing, charging, and commit.

mod orchestrator;
mod receipt;
mod shipping;

pub use orchestrator::CheckoutService;
pub use receipt::{Receipt, ReceiptLine};
pub use shipping::{
    ShipmentLine, ShipmentNotice, ShippingCalculator, ShippingRates, ShippingResult,
};
