//! Cart and checkout orchestration core for a storefront.
//!
//! In-memory, single-process domain logic for running a shopping cart
//! through checkout:
//!
//! - **Catalog**: perishable and non-perishable products, the `Shippable`
//!   capability view, and a keyed store that owns all stock counters
//! - **Cart**: line items, merge-on-add, subtotal
//! - **Checkout**: validation, shipping fees, guarded balance charge,
//!   inventory commit, structured receipts and shipment notices
//! - **Customer**: account with a guarded debit
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_checkout::prelude::*;
//!
//! let mut catalog = Catalog::new();
//! let widget = catalog.insert(
//!     Product::non_perishable("Widget", Money::from_decimal(10.0), true, 1.0),
//!     5,
//! );
//!
//! let mut customer = Customer::new("Alice", "alice@example.com", "12 Main St",
//!     Money::from_decimal(100.0));
//! let mut cart = Cart::new();
//! cart.add(&catalog, &widget, 2)?;
//!
//! let service = CheckoutService::default();
//! let receipt = service.checkout(&mut catalog, &mut customer, &mut cart)?;
//! println!("{receipt}");
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod customer;
pub mod error;
pub mod ids;
pub mod money;

pub use error::CheckoutError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CheckoutError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    pub use crate::catalog::{
        Catalog, NonPerishableProduct, NonPerishableShippableAdapter, PerishableProduct, Product,
        Shippable,
    };

    pub use crate::cart::{Cart, CartItem};

    pub use crate::checkout::{
        CheckoutService, Receipt, ReceiptLine, ShipmentLine, ShipmentNotice, ShippingCalculator,
        ShippingRates, ShippingResult,
    };

    pub use crate::customer::Customer;
}
