use crate::models::{Category, Product};

/// Client-side cache of the latest fetched snapshot. Replaced wholesale on
/// every load; the backend remains the only owner of entity lifecycles.
#[derive(Debug, Default, Clone)]
pub struct ClientState {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn low_stock_count(&self) -> usize {
        self.products.iter().filter(|p| p.is_low_stock()).count()
    }

    /// Σ price × current stock over the cached products.
    pub fn inventory_value(&self) -> f64 {
        self.products
            .iter()
            .map(|p| p.price * f64::from(p.stock))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, stock: i32, min_stock: i32) -> Product {
        Product {
            id,
            code: format!("P-{id}"),
            name: format!("Producto {id}"),
            description: None,
            price,
            stock,
            min_stock,
            category_id: None,
            category_name: None,
            image_url: None,
        }
    }

    #[test]
    fn low_stock_counts_threshold_and_zero() {
        let mut state = ClientState::new();
        state.set_products(vec![
            product(1, 10.0, 3, 5),
            product(2, 5.0, 0, 1),
            product(3, 2.0, 9, 5),
        ]);
        assert_eq!(state.low_stock_count(), 2);
    }

    #[test]
    fn inventory_value_sums_price_times_stock() {
        let mut state = ClientState::new();
        state.set_products(vec![product(1, 10.0, 3, 5), product(2, 5.0, 0, 1)]);
        assert_eq!(state.inventory_value(), 30.0);
    }

    #[test]
    fn product_lookup_by_id() {
        let mut state = ClientState::new();
        state.set_products(vec![product(7, 1.0, 1, 1)]);
        assert_eq!(state.product(7).map(|p| p.code.as_str()), Some("P-7"));
        assert!(state.product(8).is_none());
    }
}
