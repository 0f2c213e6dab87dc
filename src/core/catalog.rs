//! Catalog business logic - the fixed set of purchasable products grouped by category.
//!
//! The catalog is built once at startup (from the built-in data or a config file) and
//! is read-only afterwards. Menu lookups take the 1-based numbers the shopper types.

use crate::{
    core::report::format_rupees,
    errors::{Error, Result},
};

/// A purchasable item with a fixed unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: f64,
    category: String,
}

impl Product {
    /// Creates a product, trimming the name and label.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The name or category label is empty or whitespace-only
    /// - The price is zero, negative, or not finite (NaN, infinity)
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Result<Self> {
        let name = name.into().trim().to_string();
        let category = category.into().trim().to_string();

        if name.is_empty() {
            return Err(Error::EmptyField {
                field: "Product name",
            });
        }
        if category.is_empty() {
            return Err(Error::EmptyField {
                field: "Product category",
            });
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(Error::InvalidPrice { name, price });
        }

        Ok(Self {
            name,
            price,
            category,
        })
    }

    /// Product name, e.g. "Potato".
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price in rupees.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Category label shown next to the product, e.g. "Vegetable".
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Menu rendering: `Vegetable: Potato - ₹20.0`.
    #[must_use]
    pub fn listing(&self) -> String {
        format!(
            "{}: {} - {}",
            self.category,
            self.name,
            format_rupees(self.price)
        )
    }
}

/// A named group of products shown as one menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    products: Vec<Product>,
}

impl Category {
    /// Creates a category.
    ///
    /// # Errors
    /// Returns an error if the name is blank or the category has no products.
    pub fn new(name: impl Into<String>, products: Vec<Product>) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(Error::EmptyField {
                field: "Category name",
            });
        }
        if products.is_empty() {
            return Err(Error::Config {
                message: format!("Category '{name}' has no products"),
            });
        }
        Ok(Self { name, products })
    }

    /// Display name, e.g. "Vegetables".
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Products in menu order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by its 1-based menu number.
    #[must_use]
    pub fn product(&self, choice: usize) -> Option<&Product> {
        choice.checked_sub(1).and_then(|i| self.products.get(i))
    }
}

/// The full, immutable product catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

/// Built-in data: (category name, product label, [(product, price)]).
const BUILTIN: &[(&str, &str, &[(&str, f64)])] = &[
    (
        "Vegetables",
        "Vegetable",
        &[
            ("Potato", 20.0),
            ("Cabbage", 30.0),
            ("Bhendi", 40.0),
            ("Palak", 15.0),
        ],
    ),
    (
        "Fruits",
        "Fruit",
        &[
            ("Coconut", 60.0),
            ("Strawberries", 60.0),
            ("Chikoo", 120.0),
            ("Watermelon", 90.0),
        ],
    ),
    (
        "Dairy Products",
        "Dairy",
        &[
            ("Milk(AMUL)", 50.0),
            ("Cheese(AMUL)", 120.0),
            ("Yogurt(MILKYMIST)", 40.0),
            ("Butter(AMUL)", 80.0),
        ],
    ),
    (
        "Bakery",
        "Bakery",
        &[
            ("Bread (MAIDA)", 30.0),
            ("Cake(100GM)", 150.0),
            ("Cookies(BRITANIA)", 60.0),
        ],
    ),
    (
        "Snacks",
        "Snack",
        &[
            ("Chips(LAYS)", 20.0),
            ("Namkeen(BIKAJI)", 50.0),
            ("Popcorn", 30.0),
        ],
    ),
    (
        "Tea and Coffee",
        "Beverage",
        &[("Tea(WAGHBAKRI)", 40.0), ("Coffee(NESCAFE)", 80.0)],
    ),
];

impl Catalog {
    /// Creates a catalog from already-validated categories.
    ///
    /// # Errors
    /// Returns an error if no categories are given.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::Config {
                message: "Catalog must contain at least one category".to_string(),
            });
        }
        Ok(Self { categories })
    }

    /// The compiled-in grocery catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(name, label, items)| Category {
                name: (*name).to_string(),
                products: items
                    .iter()
                    .map(|(product, price)| Product {
                        name: (*product).to_string(),
                        price: *price,
                        category: (*label).to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    /// Categories in menu order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by its 1-based menu number.
    #[must_use]
    pub fn category(&self, choice: usize) -> Option<&Category> {
        choice.checked_sub(1).and_then(|i| self.categories.get(i))
    }
}
