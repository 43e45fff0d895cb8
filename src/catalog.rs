/// Product catalog: the fixed list of things that can be put in the cart
use serde::{Deserialize, Serialize};

/// A purchasable product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: f64) -> Product {
        Product {
            id,
            name: name.into(),
            price,
        }
    }

    /// Text shown for the product in the catalog list, e.g. "Product 1 - $10.00"
    pub fn label(&self, currency: &str) -> String {
        format!("{} - {}", self.name, format_price(self.price, currency))
    }
}

/// Read-only ordered sequence of products
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The five stock products, ids 1 through 5
    pub fn standard() -> Catalog {
        let products = (1..=5)
            .map(|id| Product::new(id, format!("Product {}", id), f64::from(id * 10)))
            .collect();
        Catalog { products }
    }

    /// Linear scan by id
    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Format a price with two decimal places behind the currency symbol
pub fn format_price(price: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, price)
}

pub(crate) fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.products().len(), 5);
        assert_eq!(catalog.products()[0], Product::new(1, "Product 1", 10.0));
        assert_eq!(catalog.products()[4], Product::new(5, "Product 5", 50.0));
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.find(3).map(|p| p.name.as_str()), Some("Product 3"));
        assert!(catalog.find(0).is_none());
        assert!(catalog.find(6).is_none());
    }

    #[test]
    fn test_standard_catalog_is_well_formed() {
        let catalog = Catalog::standard();
        let ids: Vec<u32> = catalog.products().iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(catalog.products().iter().all(|p| is_valid_price(p.price)));
    }

    #[test]
    fn test_is_valid_price() {
        assert!(is_valid_price(0.0));
        assert!(is_valid_price(19.99));
        assert!(!is_valid_price(-0.01));
        assert!(!is_valid_price(f64::NAN));
        assert!(!is_valid_price(f64::INFINITY));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.0, "$"), "$10.00");
        assert_eq!(format_price(2.5, "€"), "€2.50");
        assert_eq!(format_price(0.0, "$"), "$0.00");
    }

    #[test]
    fn test_product_label() {
        let product = Product::new(2, "Product 2", 20.0);
        assert_eq!(product.label("$"), "Product 2 - $20.00");
    }
}
