//! Catalog configuration loaded from the `[[categories]]` tables of the config file.
//!
//! Each table names a menu category, the label printed beside its products, and the
//! products themselves. The parsed tables are validated into a [`Catalog`].

use crate::{
    core::catalog::{Catalog, Category, Product},
    errors::{Error, Result},
};
use serde::Deserialize;

/// Configuration for one menu category
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct CategoryConfig {
    /// Menu name (e.g., "Vegetables")
    pub name: String,
    /// Label printed beside each product (e.g., "Vegetable")
    pub label: String,
    /// Products listed under this category
    pub products: Vec<ProductConfig>,
}

/// Configuration for a single product
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProductConfig {
    /// Product name
    pub name: String,
    /// Unit price in rupees
    pub price: f64,
}

/// Builds a validated catalog from category tables.
///
/// # Errors
/// Returns `Error::Config` naming the offending category if any product or
/// category is invalid, or if no categories are given.
pub fn build_catalog(categories: &[CategoryConfig]) -> Result<Catalog> {
    let categories = categories
        .iter()
        .map(|category| {
            let products = category
                .products
                .iter()
                .map(|p| Product::new(p.name.as_str(), p.price, category.label.as_str()))
                .collect::<Result<Vec<_>>>()?;
            Category::new(category.name.as_str(), products)
        })
        .collect::<Result<Vec<_>>>()
        .map_err(|e| match e {
            Error::Config { .. } => e,
            other => Error::Config {
                message: format!("Invalid catalog entry: {other}"),
            },
        })?;

    Catalog::new(categories)
}
