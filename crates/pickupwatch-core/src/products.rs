use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One SKU watched at the configured store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedProduct {
    /// Display name used in notifications, e.g. `"iPhone 17 256GB Sage"`.
    pub name: String,
    /// Retailer part number, e.g. `"MG6N4HN/A"`.
    pub sku: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductsFile {
    pub products: Vec<TrackedProduct>,
}

impl ProductsFile {
    /// SKUs in configured order.
    #[must_use]
    pub fn skus(&self) -> Vec<String> {
        self.products.iter().map(|p| p.sku.clone()).collect()
    }
}

/// Load and validate the tracked products from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_products(path: &Path) -> Result<ProductsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProductsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_products(&content)
}

/// Parse and validate tracked products from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_products(yaml: &str) -> Result<ProductsFile, ConfigError> {
    let products_file: ProductsFile = serde_yaml::from_str(yaml)?;
    validate_products(&products_file)?;
    Ok(products_file)
}

fn validate_products(products_file: &ProductsFile) -> Result<(), ConfigError> {
    if products_file.products.is_empty() {
        return Err(ConfigError::Validation(
            "at least one product must be tracked".to_string(),
        ));
    }

    let mut seen_skus = HashSet::new();

    for product in &products_file.products {
        if product.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product with sku '{}' has an empty name",
                product.sku
            )));
        }

        if product.sku.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' has an empty sku",
                product.name
            )));
        }

        if !seen_skus.insert(product.sku.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate sku: '{}' (from product '{}')",
                product.sku, product.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
