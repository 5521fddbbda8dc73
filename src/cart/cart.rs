//! Cart and cart item types.

use crate::catalog::Catalog;
use crate::error::CheckoutError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A line in the cart: a catalog handle plus the requested quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Handle of the catalog product.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at the time the item was added.
    pub unit_price: Money,
    /// Requested units; always positive, independent of catalog stock.
    pub quantity: i64,
}

impl CartItem {
    /// Line total: unit price times quantity.
    pub fn total_price(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// A shopping cart: an ordered sequence of items, unique by product.
///
/// Adding a product already in the cart merges quantities instead of
/// appending a duplicate entry. The cart never mutates catalog stock;
/// stock is only checked here and decremented by the checkout
/// orchestrator after a successful charge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// Checks run in a fixed, significant order: product existence,
    /// quantity positivity, stock, expiry, then the merge re-check. When a
    /// merge would exceed stock the error reports the combined requested
    /// total and the existing entry is left untouched.
    pub fn add(
        &mut self,
        catalog: &Catalog,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), CheckoutError> {
        let product = catalog
            .get(product_id)
            .ok_or_else(|| CheckoutError::InvalidInput(format!("unknown product: {product_id}")))?;

        if quantity <= 0 {
            return Err(CheckoutError::InvalidInput(format!(
                "quantity must be positive, got {quantity}"
            )));
        }

        let available = catalog.stock_of(product_id).unwrap_or(0);
        if !catalog.is_available(product_id, quantity) {
            return Err(CheckoutError::OutOfStock {
                name: product.name().to_string(),
                available,
                requested: quantity,
            });
        }

        if product.is_expired() {
            return Err(CheckoutError::Expired {
                name: product.name().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            let combined = existing.quantity + quantity;
            if !catalog.is_available(product_id, combined) {
                return Err(CheckoutError::OutOfStock {
                    name: product.name().to_string(),
                    available,
                    requested: combined,
                });
            }
            existing.quantity = combined;
            return Ok(());
        }

        self.items.push(CartItem {
            product_id: product_id.clone(),
            name: product.name().to_string(),
            unit_price: product.price(),
            quantity,
        });
        Ok(())
    }

    /// Remove every entry for a product. Absent products are a no-op.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|i| &i.product_id != product_id);
    }

    /// Sum of all line totals; zero for an empty cart.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.total_price()).sum()
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether the cart holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cart entries, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total units across all entries.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Cart is empty");
        }
        writeln!(f, "Cart contents:")?;
        for item in &self.items {
            writeln!(
                f,
                "- {}x {} (${})",
                item.quantity,
                item.name,
                item.total_price()
            )?;
        }
        write!(f, "Subtotal: ${}", self.subtotal())
    }
}
