//! In-memory catalog store.

use crate::catalog::Product;

/// Ordered product sequence for one session.
///
/// The store is only ever replaced wholesale; there is no per-item mutation.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all products, returning the previous set.
    pub fn replace(&mut self, products: Vec<Product>) -> Vec<Product> {
        tracing::debug!(count = products.len(), "replacing catalog");
        std::mem::replace(&mut self.products, products)
    }

    /// Products in feed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct store names, in first-seen order.
    pub fn stores(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        let mut keys: Vec<String> = Vec::new();
        for product in &self.products {
            let key = product.store.to_lowercase();
            if !keys.contains(&key) {
                keys.push(key);
                seen.push(product.store.clone());
            }
        }
        seen
    }

    /// Distinct categories, in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from(vec![
            Product::new(1, "A", 1.0).with_store("Acme").with_category("casa"),
            Product::new(2, "B", 2.0).with_store("ACME").with_category("jardim"),
            Product::new(3, "C", 3.0).with_store("Other").with_category("casa"),
        ])
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut catalog = sample();
        let previous = catalog.replace(vec![Product::new(9, "Z", 9.0)]);
        assert_eq!(previous.len(), 3);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].title, "Z");
    }

    #[test]
    fn test_distinct_stores_case_insensitive() {
        assert_eq!(sample().stores(), vec!["Acme", "Other"]);
    }

    #[test]
    fn test_distinct_stores_unicode_case() {
        let catalog = Catalog::from(vec![
            Product::new(1, "A", 1.0).with_store("LOJA Á"),
            Product::new(2, "B", 2.0).with_store("Loja á"),
            Product::new(3, "C", 3.0).with_store("Ótica"),
            Product::new(4, "D", 4.0).with_store("ÓTICA"),
        ]);
        assert_eq!(catalog.stores(), vec!["LOJA Á", "Ótica"]);
    }

    #[test]
    fn test_distinct_categories() {
        assert_eq!(sample().categories(), vec!["casa", "jardim"]);
    }

    #[test]
    fn test_new_is_empty() {
        assert!(Catalog::new().is_empty());
    }
}
