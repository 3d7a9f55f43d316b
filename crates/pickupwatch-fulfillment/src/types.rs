//! Response types for the retailer's `fulfillment-messages` endpoint.
//!
//! ## Observed shape
//!
//! ```text
//! body.content.pickupMessage.stores[] = {
//!     storeNumber: "R756",
//!     storeName: "Saket",
//!     partsAvailability: {
//!         "MG6K4HN/A": { pickupDisplay: "available", pickupSearchQuote: "Today", ... },
//!         ...
//!     },
//!     ...
//! }
//! ```
//!
//! `pickupDisplay` is `"available"` when the part can be collected today and
//! values such as `"unavailable"` or `"ships-to-store"` otherwise.
//! `pickupSearchQuote` is free text ("Today", "Tomorrow", "Ships in 2-3 weeks").
//! SKUs the store does not stock are simply absent from `partsAvailability`.
//! Only the fields we read are modelled; everything else is ignored.
//!
//! Part entries are decoded leniently: a `null` or non-object entry is
//! dropped (the part reads as absent) and a non-string field reads as `None`.
//! One odd entry never hides the rest of the store.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Pickup status for one part at one store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FulfillmentRecord {
    pub pickup_display: Option<String>,
    pub pickup_search_quote: Option<String>,
}

impl FulfillmentRecord {
    /// Reads a part entry, or `None` when the entry is not an object.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let text = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_owned);
        Some(Self {
            pickup_display: text("pickupDisplay"),
            pickup_search_quote: text("pickupSearchQuote"),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    pub store_number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub store_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_parts")]
    pub parts_availability: HashMap<String, FulfillmentRecord>,
}

impl StoreRecord {
    #[must_use]
    pub fn part(&self, sku: &str) -> Option<&FulfillmentRecord> {
        self.parts_availability.get(sku)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

fn lenient_parts<'de, D>(deserializer: D) -> Result<HashMap<String, FulfillmentRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(entries) = value else {
        return Ok(HashMap::new());
    };

    Ok(entries
        .iter()
        .filter_map(|(sku, entry)| Some((sku.clone(), FulfillmentRecord::from_value(entry)?)))
        .collect())
}
