//! Checkout orchestration.
//!
//! A checkout runs a linear sequence: validate, price, ship, charge,
//! commit. Any failure aborts the whole run; no mutation of balance,
//! stock, or cart happens before the charge succeeds.

use crate::cart::Cart;
use crate::catalog::{Catalog, Shippable};
use crate::checkout::{Receipt, ReceiptLine, ShippingCalculator};
use crate::customer::Customer;
use crate::error::CheckoutError;
use std::collections::HashMap;

/// Orchestrates cart validation, shipping, payment, and inventory commit.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutService {
    shipping: ShippingCalculator,
}

impl CheckoutService {
    /// Create a service using the given shipping calculator.
    pub fn new(shipping: ShippingCalculator) -> Self {
        Self { shipping }
    }

    /// Run a checkout for `customer` against `cart`.
    ///
    /// On success the customer has been charged subtotal plus shipping,
    /// stock has been decremented per entry, the cart is empty, and the
    /// returned [`Receipt`] records the transaction. On any error nothing
    /// has been mutated: a customer who cannot pay sees unchanged stock
    /// and an unchanged cart.
    pub fn checkout(
        &self,
        catalog: &mut Catalog,
        customer: &mut Customer,
        cart: &mut Cart,
    ) -> Result<Receipt, CheckoutError> {
        self.validate(catalog, cart)?;

        let subtotal = cart.subtotal();

        let (shipping, notice) = {
            // Partition the shippable subset and build the name -> quantity
            // map in one pass. Perishables carry the capability themselves;
            // flagged non-perishables go through the adapter.
            let mut shippables: Vec<Box<dyn Shippable + '_>> = Vec::new();
            let mut quantities = HashMap::new();
            for item in cart.items() {
                // Presence was checked by validate
                let Some(product) = catalog.get(&item.product_id) else {
                    continue;
                };
                if let Some(shippable) = product.as_shippable() {
                    quantities.insert(shippable.name().to_string(), item.quantity);
                    shippables.push(shippable);
                }
            }
            self.shipping
                .process_shipment(&shippables, &quantities, customer.address())
        };

        let total = subtotal + shipping.fee;
        customer.deduct_balance(total)?;

        // Post-charge commit: validation already guaranteed stock suffices.
        for item in cart.items() {
            catalog.commit_sale(&item.product_id, item.quantity)?;
        }

        let receipt = Receipt {
            customer_name: customer.name().to_string(),
            lines: cart
                .items()
                .iter()
                .map(|item| ReceiptLine {
                    quantity: item.quantity,
                    name: item.name.clone(),
                    line_total: item.total_price(),
                })
                .collect(),
            subtotal,
            shipping_fee: shipping.fee,
            total,
            balance_after: customer.balance(),
            shipment: notice,
        };
        cart.clear();

        tracing::info!(
            customer = customer.name(),
            total = %total,
            items = receipt.lines.len(),
            "checkout committed"
        );
        Ok(receipt)
    }

    /// Fail-fast validation pass, in cart order: emptiness, then per entry
    /// expiry and current stock (stock may have changed since `add`).
    fn validate(&self, catalog: &Catalog, cart: &Cart) -> Result<(), CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        for item in cart.items() {
            let product = catalog.get(&item.product_id).ok_or_else(|| {
                CheckoutError::InvalidInput(format!(
                    "product no longer in catalog: {}",
                    item.product_id
                ))
            })?;
            if product.is_expired() {
                return Err(CheckoutError::Expired {
                    name: product.name().to_string(),
                });
            }
            if !catalog.is_available(&item.product_id, item.quantity) {
                return Err(CheckoutError::OutOfStock {
                    name: product.name().to_string(),
                    available: catalog.stock_of(&item.product_id).unwrap_or(0),
                    requested: item.quantity,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;
    use chrono::{Duration, Utc};

    fn service() -> CheckoutService {
        CheckoutService::default()
    }

    fn customer(balance_cents: i64) -> Customer {
        Customer::new(
            "Alice",
            "alice@example.com",
            "12 Main St",
            Money::new(balance_cents),
        )
    }

    #[test]
    fn test_empty_cart_rejected() {
        let mut catalog = Catalog::new();
        let mut cust = customer(10_000);
        let mut cart = Cart::new();

        let err = service()
            .checkout(&mut catalog, &mut cust, &mut cart)
            .unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
    }

    #[test]
    fn test_checkout_charges_and_commits() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(
            Product::non_perishable("Widget", Money::new(1000), true, 1.0),
            5,
        );
        let mut cust = customer(10_000);
        let mut cart = Cart::new();
        cart.add(&catalog, &id, 2).unwrap();

        let receipt = service()
            .checkout(&mut catalog, &mut cust, &mut cart)
            .unwrap();

        // 10*2 + (5 + 2*1.0*10) = 45.00
        assert_eq!(receipt.subtotal, Money::new(2000));
        assert_eq!(receipt.shipping_fee, Money::new(2500));
        assert_eq!(receipt.total, Money::new(4500));
        assert_eq!(receipt.balance_after, Money::new(5500));
        assert_eq!(cust.balance(), Money::new(5500));
        assert_eq!(catalog.stock_of(&id), Some(3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_digital_only_checkout_has_no_shipping() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(Product::digital("Gift Card", Money::new(2500)), 10);
        let mut cust = customer(10_000);
        let mut cart = Cart::new();
        cart.add(&catalog, &id, 1).unwrap();

        let receipt = service()
            .checkout(&mut catalog, &mut cust, &mut cart)
            .unwrap();
        assert_eq!(receipt.shipping_fee, Money::zero());
        assert!(receipt.shipment.is_none());
        assert_eq!(receipt.total, Money::new(2500));
    }

    #[test]
    fn test_insufficient_balance_leaves_state_untouched() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(
            Product::non_perishable("Widget", Money::new(1000), true, 1.0),
            5,
        );
        let mut cust = customer(1000); // less than 45.00
        let mut cart = Cart::new();
        cart.add(&catalog, &id, 2).unwrap();

        let err = service()
            .checkout(&mut catalog, &mut cust, &mut cart)
            .unwrap_err();
        assert_eq!(
            err,
            CheckoutError::InsufficientBalance {
                available: Money::new(1000),
                required: Money::new(4500),
            }
        );
        // Charge failed before any mutation
        assert_eq!(cust.balance(), Money::new(1000));
        assert_eq!(catalog.stock_of(&id), Some(5));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_stock_rechecked_at_checkout_time() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(
            Product::non_perishable("Widget", Money::new(1000), true, 1.0),
            5,
        );
        let mut cust = customer(10_000);
        let mut cart = Cart::new();
        cart.add(&catalog, &id, 3).unwrap();

        // Stock drained after add (e.g., by another sale)
        catalog.commit_sale(&id, 4).unwrap();

        let err = service()
            .checkout(&mut catalog, &mut cust, &mut cart)
            .unwrap_err();
        assert_eq!(
            err,
            CheckoutError::OutOfStock {
                name: "Widget".to_string(),
                available: 1,
                requested: 3,
            }
        );
        assert_eq!(cust.balance(), Money::new(10_000));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_expiry_rechecked_at_checkout_time() {
        let mut catalog = Catalog::new();
        // Expires today: add succeeds now, and the checkout-time re-check
        // also passes; a product already expired would have failed add.
        let today = Utc::now().date_naive();
        let yesterday = today - Duration::days(1);
        let fresh = catalog.insert(
            Product::perishable("Cheese", Money::new(550), today, 0.2),
            5,
        );
        let mut cust = customer(10_000);
        let mut cart = Cart::new();
        cart.add(&catalog, &fresh, 1).unwrap();

        // Swap the catalog entry for one that expired yesterday, keeping the
        // same handle, to model time passing between add and checkout.
        catalog.insert(
            Product::perishable("Cheese", Money::new(550), yesterday, 0.2),
            5,
        );

        let err = service()
            .checkout(&mut catalog, &mut cust, &mut cart)
            .unwrap_err();
        assert_eq!(
            err,
            CheckoutError::Expired {
                name: "Cheese".to_string()
            }
        );
        assert_eq!(cust.balance(), Money::new(10_000));
    }

    #[test]
    fn test_shipment_notice_content_and_order() {
        let mut catalog = Catalog::new();
        let tomorrow = Utc::now().date_naive() + Duration::days(1);
        let cheese = catalog.insert(
            Product::perishable("Cheese", Money::new(550), tomorrow, 0.2),
            10,
        );
        let tv = catalog.insert(
            Product::non_perishable("TV", Money::new(30000), true, 8.0),
            3,
        );
        let card = catalog.insert(Product::digital("Gift Card", Money::new(2500)), 10);
        let mut cust = customer(100_000);
        let mut cart = Cart::new();
        cart.add(&catalog, &cheese, 2).unwrap();
        cart.add(&catalog, &tv, 1).unwrap();
        cart.add(&catalog, &card, 1).unwrap();

        let receipt = service()
            .checkout(&mut catalog, &mut cust, &mut cart)
            .unwrap();
        let notice = receipt.shipment.unwrap();

        // Digital item filtered out; cart order preserved
        assert_eq!(notice.lines.len(), 2);
        assert_eq!(notice.lines[0].name, "Cheese");
        assert_eq!(notice.lines[0].quantity, 2);
        assert_eq!(notice.lines[0].weight_grams, 400);
        assert_eq!(notice.lines[1].name, "TV");
        assert_eq!(notice.lines[1].weight_grams, 8000);
        assert_eq!(notice.destination, "12 Main St");
        assert!((notice.total_weight_kg - 8.4).abs() < 1e-9);
    }

    #[test]
    fn test_quantity_map_covers_every_shippable() {
        // The shipping calculator's default-to-1 fallback must be
        // unreachable: the partition pass records a quantity for every
        // shippable entry, including merged ones.
        let mut catalog = Catalog::new();
        let id = catalog.insert(
            Product::non_perishable("Widget", Money::new(100), true, 1.0),
            10,
        );
        let mut cust = customer(100_000);
        let mut cart = Cart::new();
        cart.add(&catalog, &id, 2).unwrap();
        cart.add(&catalog, &id, 3).unwrap();

        let receipt = service()
            .checkout(&mut catalog, &mut cust, &mut cart)
            .unwrap();
        let notice = receipt.shipment.unwrap();
        assert_eq!(notice.lines.len(), 1);
        // Quantity came from the map, not the fallback
        assert_eq!(notice.lines[0].quantity, 5);
        assert_eq!(notice.total_weight_kg, 5.0);
    }

    #[test]
    fn test_exact_balance_succeeds() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(
            Product::non_perishable("Widget", Money::new(1000), true, 1.0),
            5,
        );
        let mut cust = customer(4500);
        let mut cart = Cart::new();
        cart.add(&catalog, &id, 2).unwrap();

        let receipt = service()
            .checkout(&mut catalog, &mut cust, &mut cart)
            .unwrap();
        assert_eq!(receipt.balance_after, Money::zero());
    }
}
