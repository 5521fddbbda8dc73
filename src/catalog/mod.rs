//! Product catalog module.
//!
//! Contains the product variants, the shipping capability view, and the
//! keyed store that owns all stock counters.

mod product;
mod store;

pub use product::{
    NonPerishableProduct, NonPerishableShippableAdapter, PerishableProduct, Product, Shippable,
};
pub use store::Catalog;
