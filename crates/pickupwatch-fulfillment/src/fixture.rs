//! Canned inventory responses for dry runs and demos.

use std::path::Path;

use serde_json::{json, Map, Value};

use crate::error::FulfillmentError;

/// Serves the same response body on every fetch.
#[derive(Debug, Clone)]
pub struct FixtureInventory {
    body: String,
}

impl FixtureInventory {
    #[must_use]
    pub fn from_body(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Loads a response body captured from the live endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FulfillmentError::FixtureIo`] if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, FulfillmentError> {
        let body = std::fs::read_to_string(path).map_err(|e| FulfillmentError::FixtureIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self { body })
    }

    /// Built-in sample: the first SKU is available today, the second ships to
    /// the store for pickup tomorrow, and any others are absent.
    #[must_use]
    pub fn sample(store_id: &str, skus: &[String]) -> Self {
        let mut parts = Map::new();
        if let Some(sku) = skus.first() {
            parts.insert(
                sku.clone(),
                json!({ "pickupDisplay": "available", "pickupSearchQuote": "Today" }),
            );
        }
        if let Some(sku) = skus.get(1) {
            parts.insert(
                sku.clone(),
                json!({ "pickupDisplay": "ships-to-store", "pickupSearchQuote": "Tomorrow" }),
            );
        }

        let body = json!({
            "body": {
                "content": {
                    "pickupMessage": {
                        "stores": [{
                            "storeNumber": store_id,
                            "partsAvailability": Value::Object(parts),
                        }]
                    }
                }
            }
        });
        Self {
            body: body.to_string(),
        }
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
