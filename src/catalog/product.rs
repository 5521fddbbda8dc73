//! Product variants and the shipping capability.

use crate::ids::ProductId;
use crate::money::Money;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability exposed by anything the shipping calculator can handle:
/// a display name and a per-unit weight.
pub trait Shippable {
    /// Name printed on the shipment notice.
    fn name(&self) -> &str;

    /// Per-unit weight in kilograms.
    fn weight_kg(&self) -> f64;
}

impl<S: Shippable + ?Sized> Shippable for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn weight_kg(&self) -> f64 {
        (**self).weight_kg()
    }
}

/// A perishable catalog item. Always requires shipping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerishableProduct {
    /// Product name (unique catalog key).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Last sellable day; the product is expired strictly after this date.
    pub expires_on: NaiveDate,
    /// Per-unit weight in kilograms.
    pub weight_kg: f64,
}

impl Shippable for PerishableProduct {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// A non-perishable catalog item. Never expires; whether it ships is an
/// explicit flag (false for digital goods).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NonPerishableProduct {
    /// Product name (unique catalog key).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Whether the item ships at all.
    pub needs_shipping: bool,
    /// Per-unit weight in kilograms. Only meaningful when `needs_shipping`
    /// is set; non-shipping items are filtered out before weight is read.
    pub weight_kg: f64,
}

/// Borrowing adapter that gives a shipping-flagged non-perishable product
/// the [`Shippable`] capability without changing the product's own type.
#[derive(Debug, Clone, Copy)]
pub struct NonPerishableShippableAdapter<'a> {
    product: &'a NonPerishableProduct,
}

impl<'a> NonPerishableShippableAdapter<'a> {
    pub fn new(product: &'a NonPerishableProduct) -> Self {
        Self { product }
    }
}

impl Shippable for NonPerishableShippableAdapter<'_> {
    fn name(&self) -> &str {
        &self.product.name
    }

    fn weight_kg(&self) -> f64 {
        self.product.weight_kg
    }
}

/// A catalog product.
///
/// Dispatch is by variant tag or through the [`Shippable`] capability view,
/// never by runtime type inspection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Product {
    Perishable(PerishableProduct),
    NonPerishable(NonPerishableProduct),
}

impl Product {
    /// Create a perishable product.
    pub fn perishable(
        name: impl Into<String>,
        price: Money,
        expires_on: NaiveDate,
        weight_kg: f64,
    ) -> Self {
        Product::Perishable(PerishableProduct {
            name: name.into(),
            price,
            expires_on,
            weight_kg,
        })
    }

    /// Create a non-perishable product.
    pub fn non_perishable(
        name: impl Into<String>,
        price: Money,
        needs_shipping: bool,
        weight_kg: f64,
    ) -> Self {
        Product::NonPerishable(NonPerishableProduct {
            name: name.into(),
            price,
            needs_shipping,
            weight_kg,
        })
    }

    /// Create a digital product: non-perishable, nothing to ship.
    pub fn digital(name: impl Into<String>, price: Money) -> Self {
        Self::non_perishable(name, price, false, 0.0)
    }

    /// Product name (unique catalog key).
    pub fn name(&self) -> &str {
        match self {
            Product::Perishable(p) => &p.name,
            Product::NonPerishable(p) => &p.name,
        }
    }

    /// Catalog handle for this product.
    pub fn id(&self) -> ProductId {
        ProductId::new(self.name())
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        match self {
            Product::Perishable(p) => p.price,
            Product::NonPerishable(p) => p.price,
        }
    }

    /// Whether the product has passed its expiration date as of `date`.
    /// Expiry is strict: a product expiring today is still sellable today.
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        match self {
            Product::Perishable(p) => date > p.expires_on,
            Product::NonPerishable(_) => false,
        }
    }

    /// Whether the product has expired as of today.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Utc::now().date_naive())
    }

    /// Whether the product must be shipped.
    pub fn requires_shipping(&self) -> bool {
        match self {
            Product::Perishable(_) => true,
            Product::NonPerishable(p) => p.needs_shipping,
        }
    }

    /// Shipping capability view: perishables directly, shipping-flagged
    /// non-perishables through the adapter, `None` for everything else.
    pub fn as_shippable(&self) -> Option<Box<dyn Shippable + '_>> {
        match self {
            Product::Perishable(p) => Some(Box::new(p)),
            Product::NonPerishable(p) if p.needs_shipping => {
                Some(Box::new(NonPerishableShippableAdapter::new(p)))
            }
            Product::NonPerishable(_) => None,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::Perishable(p) => write!(
                f,
                "{} - ${} (Expires: {}, Weight: {}kg)",
                p.name, p.price, p.expires_on, p.weight_kg
            ),
            Product::NonPerishable(p) if p.needs_shipping => write!(
                f,
                "{} - ${} (Shippable, Weight: {}kg)",
                p.name, p.price, p.weight_kg
            ),
            Product::NonPerishable(p) => {
                write!(f, "{} - ${} (Digital/No shipping)", p.name, p.price)
            }
        }
    }
}
