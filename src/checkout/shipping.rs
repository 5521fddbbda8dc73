//! Shipping fee computation and shipment notices.

use crate::catalog::Shippable;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Rate card for shipping fees.
///
/// The default carries the standard flat base fee plus per-kilogram rate;
/// deployments can deserialize different rates from configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShippingRates {
    /// Flat fee charged whenever anything ships.
    pub base_fee: Money,
    /// Fee per kilogram of total package weight.
    pub rate_per_kg: Money,
}

impl Default for ShippingRates {
    fn default() -> Self {
        Self {
            base_fee: Money::new(500),
            rate_per_kg: Money::new(1000),
        }
    }
}

/// Outcome of a shipping computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShippingResult {
    /// Total shipping fee.
    pub fee: Money,
    /// Total package weight in kilograms.
    pub total_weight_kg: f64,
}

impl ShippingResult {
    /// The result for a cart with nothing to ship: no fee, no weight.
    pub fn none() -> Self {
        Self {
            fee: Money::zero(),
            total_weight_kg: 0.0,
        }
    }
}

/// One line of a shipment notice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShipmentLine {
    /// Units being shipped.
    pub quantity: i64,
    /// Product name.
    pub name: String,
    /// Line weight in whole grams, fraction truncated.
    pub weight_grams: i64,
}

/// Structured shipment notice.
///
/// A side-channel value, not part of the fee contract; the caller decides
/// the sink. `Display` renders the console form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShipmentNotice {
    /// Destination address.
    pub destination: String,
    /// Per-item lines, in shippable-list order.
    pub lines: Vec<ShipmentLine>,
    /// Total package weight in kilograms.
    pub total_weight_kg: f64,
}

impl fmt::Display for ShipmentNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Shipment notice **")?;
        writeln!(f, "Shipping to: {}", self.destination)?;
        for line in &self.lines {
            writeln!(f, "{}x {} {}g", line.quantity, line.name, line.weight_grams)?;
        }
        write!(f, "Total package weight {:.1}kg", self.total_weight_kg)
    }
}

/// Computes shipping fees and shipment notices for the shippable subset
/// of a cart.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShippingCalculator {
    rates: ShippingRates,
}

impl ShippingCalculator {
    /// Create a calculator with the given rate card.
    pub fn new(rates: ShippingRates) -> Self {
        Self { rates }
    }

    /// The rate card in use.
    pub fn rates(&self) -> ShippingRates {
        self.rates
    }

    /// Compute the fee and notice for a shipment.
    ///
    /// An empty shippable list short-circuits to a zero-fee, zero-weight
    /// result with no notice. Otherwise each item contributes
    /// `unit weight * quantity` to the total, and
    /// `fee = base_fee + total_weight * rate_per_kg`.
    pub fn process_shipment(
        &self,
        items: &[Box<dyn Shippable + '_>],
        quantities: &HashMap<String, i64>,
        destination: &str,
    ) -> (ShippingResult, Option<ShipmentNotice>) {
        if items.is_empty() {
            return (ShippingResult::none(), None);
        }

        let mut total_weight_kg = 0.0;
        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            // Correct orchestration supplies a quantity for every shippable
            // item; the fallback guards against a caller that does not.
            debug_assert!(
                quantities.contains_key(item.name()),
                "shippable item missing from quantity map: {}",
                item.name()
            );
            let quantity = quantities.get(item.name()).copied().unwrap_or(1);
            let line_weight_kg = item.weight_kg() * quantity as f64;
            total_weight_kg += line_weight_kg;
            lines.push(ShipmentLine {
                quantity,
                name: item.name().to_string(),
                // truncation, not rounding
                weight_grams: (line_weight_kg * 1000.0) as i64,
            });
        }

        let fee = self.rates.base_fee + self.rates.rate_per_kg.multiply_decimal(total_weight_kg);
        let notice = ShipmentNotice {
            destination: destination.to_string(),
            lines,
            total_weight_kg,
        };
        tracing::info!(
            destination,
            total_weight_kg,
            fee = %fee,
            items = notice.lines.len(),
            "shipment prepared"
        );

        (
            ShippingResult {
                fee,
                total_weight_kg,
            },
            Some(notice),
        )
    }
}
