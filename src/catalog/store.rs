//! Keyed product store owning stock counters.

use crate::catalog::Product;
use crate::error::CheckoutError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct StockedProduct {
    product: Product,
    stock: i64,
}

/// The product catalog.
///
/// Owns every product and its stock counter. Carts hold [`ProductId`]
/// handles into the catalog rather than product references, and all stock
/// mutation goes through [`Catalog::commit_sale`] / [`Catalog::restock`],
/// keeping `stock >= 0` at all times. Entries iterate in name order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<ProductId, StockedProduct>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product with an initial stock level, returning its handle.
    /// Re-inserting under the same name replaces the existing entry.
    /// Negative initial stock is clamped to zero.
    pub fn insert(&mut self, product: Product, stock: i64) -> ProductId {
        let id = product.id();
        self.entries.insert(
            id.clone(),
            StockedProduct {
                product,
                stock: stock.max(0),
            },
        );
        id
    }

    /// Look up a product.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.entries.get(id).map(|e| &e.product)
    }

    /// Current stock for a product.
    pub fn stock_of(&self, id: &ProductId) -> Option<i64> {
        self.entries.get(id).map(|e| e.stock)
    }

    /// Whether `quantity` units can currently be fulfilled. This is the
    /// quantity-versus-stock check only; quantity positivity is the
    /// caller's validation.
    pub fn is_available(&self, id: &ProductId, quantity: i64) -> bool {
        self.stock_of(id).map(|s| quantity <= s).unwrap_or(false)
    }

    /// Decrement stock after a successful charge. The sole decrement point;
    /// fails rather than letting stock go negative.
    pub fn commit_sale(&mut self, id: &ProductId, quantity: i64) -> Result<(), CheckoutError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| CheckoutError::InvalidInput(format!("unknown product: {id}")))?;
        if quantity > entry.stock {
            return Err(CheckoutError::OutOfStock {
                name: entry.product.name().to_string(),
                available: entry.stock,
                requested: quantity,
            });
        }
        entry.stock -= quantity;
        Ok(())
    }

    /// Add stock back (restock or return).
    pub fn restock(&mut self, id: &ProductId, quantity: i64) -> Result<(), CheckoutError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| CheckoutError::InvalidInput(format!("unknown product: {id}")))?;
        entry.stock += quantity.max(0);
        Ok(())
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate products with their stock, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, &Product, i64)> {
        self.entries.iter().map(|(id, e)| (id, &e.product, e.stock))
    }
}
