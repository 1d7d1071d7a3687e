use serde::{Deserialize, Serialize};

use forgestore_catalog::Product;
use forgestore_core::{CartId, DomainError, DomainResult, Entity, ProductId};

/// Cart line: product, captured display data, quantity.
///
/// Name and price are captured at add time so the cart renders without going
/// back to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}

/// A shopping cart.
///
/// Lines keep insertion order; a product appears in at most one line, and
/// stored quantities are always >= 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::with_id(CartId::new())
    }

    /// Prefer passing the id explicitly in tests for determinism.
    pub fn with_id(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of line subtotals, in the smallest currency unit.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Add one unit of `product`.
    ///
    /// A product already in the cart gets its quantity incremented; a new
    /// product is appended as a fresh line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        });
    }

    /// Remove the line for `product_id` entirely. Removing a product that is
    /// not in the cart is a no-op.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Set the quantity of an existing line. `quantity == 0` removes the
    /// line; a product not in the cart is a not-found error.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            self.remove(product_id);
            return Ok(());
        }
        match self.line_mut(product_id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(())
            }
            None => Err(DomainError::not_found()),
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgestore_catalog::Subcategory;

    fn test_product(id: u64, name: &str, price: u64) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            description: String::new(),
            price,
            category: "electronics".to_string(),
            subcategory: Subcategory {
                slug: "misc".to_string(),
                name: "Misc".to_string(),
            },
            is_featured: false,
            image_url: None,
            additional_images: Vec::new(),
            rating: 0.0,
        }
    }

    #[test]
    fn adding_a_new_product_appends_a_line_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, "Phone", 49_999));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[0].name, "Phone");
        assert_eq!(cart.lines()[0].unit_price, 49_999);
    }

    #[test]
    fn adding_the_same_product_twice_increments_the_existing_line() {
        let mut cart = Cart::new();
        let phone = test_product(1, "Phone", 49_999);
        cart.add(&phone);
        cart.add(&phone);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&test_product(2, "Tv", 1));
        cart.add(&test_product(1, "Phone", 1));
        cart.add(&test_product(3, "Cable", 1));

        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Tv", "Phone", "Cable"]);
    }

    #[test]
    fn remove_deletes_the_whole_line() {
        let mut cart = Cart::new();
        let phone = test_product(1, "Phone", 1);
        cart.add(&phone);
        cart.add(&phone);
        cart.remove(phone.id);
        assert!(cart.is_empty());
    }

    #[test]
    fn removing_an_absent_product_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, "Phone", 1));
        cart.remove(ProductId(99));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn set_quantity_updates_an_existing_line() {
        let mut cart = Cart::new();
        let phone = test_product(1, "Phone", 1);
        cart.add(&phone);
        cart.set_quantity(phone.id, 5).unwrap();
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn set_quantity_zero_removes_the_line() {
        let mut cart = Cart::new();
        let phone = test_product(1, "Phone", 1);
        cart.add(&phone);
        cart.set_quantity(phone.id, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_rejects_an_absent_product() {
        let mut cart = Cart::new();
        let err = cart.set_quantity(ProductId(1), 3).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn totals_sum_line_subtotals_and_quantities() {
        let mut cart = Cart::new();
        let phone = test_product(1, "Phone", 49_999);
        let apple = test_product(2, "Apple", 120);
        cart.add(&phone);
        cart.add(&phone);
        cart.add(&apple);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), 2 * 49_999 + 120);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, "Phone", 1));
        cart.add(&test_product(2, "Apple", 1));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }
}
