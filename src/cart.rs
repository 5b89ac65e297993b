//! Cart and fare math for the delivery flow.

use std::collections::BTreeMap;

use crate::common::types::Product;

/// Fixed delivery fee added to every order.
pub const DELIVERY_FEE: f64 = 3.50;

const BASE_FARE: f64 = 2.50;
const FARE_PER_KM: f64 = 1.20;

#[derive(Debug, Clone)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.product.precio * f64::from(self.quantity)
    }
}

/// Quantity-keyed cart; one line per product id.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: BTreeMap<u32, CartLine>,
}

impl Cart {
    pub fn add(&mut self, product: &Product) {
        self.lines
            .entry(product.id)
            .and_modify(|line| line.quantity += 1)
            .or_insert_with(|| CartLine {
                product: product.clone(),
                quantity: 1,
            });
    }

    /// Decrement one unit; the line disappears at zero.
    pub fn remove_one(&mut self, product_id: u32) {
        if let Some(line) = self.lines.get_mut(&product_id) {
            if line.quantity <= 1 {
                self.lines.remove(&product_id);
            } else {
                line.quantity -= 1;
            }
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total_items(&self) -> u32 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    /// One product id per unit, as the delivery backend expects.
    pub fn product_ids(&self) -> Vec<u32> {
        let mut ids = Vec::new();
        for line in self.lines.values() {
            for _ in 0..line.quantity {
                ids.push(line.product.id);
            }
        }
        ids
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.values().map(CartLine::subtotal).sum()
    }

    pub fn total(&self) -> f64 {
        self.subtotal() + DELIVERY_FEE
    }
}

/// Render a money amount with exactly two decimals.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Deterministic fare estimate from the two typed locations. The mock
/// distance stands in for a routing service.
pub fn estimate_fare(origin: &str, destination: &str) -> f64 {
    let mock_km = ((origin.chars().count() + destination.chars().count()) % 12 + 3) as f64;
    let fare = BASE_FARE + FARE_PER_KM * mock_km;
    (fare * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, nombre: &str, precio: f64) -> Product {
        Product {
            id,
            nombre: nombre.to_string(),
            precio,
            descripcion: String::new(),
        }
    }

    #[test]
    fn two_line_cart_totals_31_50() {
        let mut cart = Cart::default();
        cart.add(&product(1, "Pizza Margarita", 12.0));
        let burger = product(2, "Hamburguesa Pro", 8.0);
        cart.add(&burger);
        cart.add(&burger);

        assert_eq!(cart.subtotal(), 28.0);
        assert_eq!(format_money(cart.total()), "$31.50");
    }

    #[test]
    fn remove_one_decrements_then_drops() {
        let mut cart = Cart::default();
        let soda = product(3, "Refresco", 3.0);
        cart.add(&soda);
        cart.add(&soda);
        cart.remove_one(3);
        assert_eq!(cart.total_items(), 1);
        cart.remove_one(3);
        assert!(cart.is_empty());
    }

    #[test]
    fn product_ids_repeat_per_unit() {
        let mut cart = Cart::default();
        cart.add(&product(1, "Pizza", 12.0));
        let burger = product(2, "Burger", 8.0);
        cart.add(&burger);
        cart.add(&burger);
        assert_eq!(cart.product_ids(), vec![1, 2, 2]);
    }

    #[test]
    fn fare_estimate_is_deterministic() {
        let a = estimate_fare("Calle 1", "Avenida 9");
        let b = estimate_fare("Calle 1", "Avenida 9");
        assert_eq!(a, b);
        assert!(a >= BASE_FARE);
    }
}
