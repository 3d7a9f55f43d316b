//! Locating the watched store inside a fulfillment response.

use serde_json::Value;

use crate::error::FulfillmentError;
use crate::types::StoreRecord;

const STORES_POINTER: &str = "/body/content/pickupMessage/stores";

/// A decoded fulfillment response.
///
/// Only a body that is not JSON at all is rejected. Missing or oddly-typed
/// intermediate keys are treated as "no stores".
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    raw: Value,
}

impl ProviderResponse {
    /// Decodes a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`FulfillmentError::Deserialize`] if `body` is not valid JSON.
    pub fn parse(body: &str) -> Result<Self, FulfillmentError> {
        let raw = serde_json::from_str(body).map_err(|e| FulfillmentError::Deserialize {
            context: "fulfillment response".to_string(),
            source: e,
        })?;
        Ok(Self { raw })
    }

    #[must_use]
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// Every store entry with a string `storeNumber`, in response order.
    /// Part entries inside a store are decoded leniently, so only entries
    /// without a usable store number are skipped.
    #[must_use]
    pub fn stores(&self) -> Vec<StoreRecord> {
        self.store_values()
            .iter()
            .filter_map(|v| serde_json::from_value::<StoreRecord>(v.clone()).ok())
            .collect()
    }

    /// The first store whose `storeNumber` equals `store_id` exactly.
    #[must_use]
    pub fn find_store(&self, store_id: &str) -> Option<StoreRecord> {
        self.stores()
            .into_iter()
            .find(|store| store.store_number == store_id)
    }

    fn store_values(&self) -> &[Value] {
        self.raw
            .pointer(STORES_POINTER)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response_with_stores(stores: Value) -> ProviderResponse {
        ProviderResponse::from_value(json!({
            "body": { "content": { "pickupMessage": { "stores": stores } } }
        }))
    }

    #[test]
    fn parse_rejects_non_json_body() {
        let err = ProviderResponse::parse("<html>oops</html>").unwrap_err();
        assert!(matches!(err, FulfillmentError::Deserialize { .. }));
    }

    #[test]
    fn missing_intermediate_keys_yield_no_stores() {
        for raw in [
            json!({}),
            json!({ "body": {} }),
            json!({ "body": { "content": {} } }),
            json!({ "body": { "content": { "pickupMessage": {} } } }),
            json!({ "body": { "content": { "pickupMessage": { "stores": "nope" } } } }),
        ] {
            let response = ProviderResponse::from_value(raw);
            assert!(response.stores().is_empty());
            assert!(response.find_store("R756").is_none());
        }
    }

    #[test]
    fn find_store_matches_exact_store_number() {
        let response = response_with_stores(json!([
            { "storeNumber": "R7560", "partsAvailability": {} },
            { "storeNumber": "R756", "storeName": "Saket", "partsAvailability": {
                "MG6K4HN/A": { "pickupDisplay": "available", "pickupSearchQuote": "Today" }
            } },
        ]));

        let store = response.find_store("R756").expect("store present");
        assert_eq!(store.store_number, "R756");
        assert_eq!(store.store_name.as_deref(), Some("Saket"));
        assert_eq!(
            store.part("MG6K4HN/A").and_then(|r| r.pickup_display.as_deref()),
            Some("available")
        );
        assert!(store.part("MG6J4HN/A").is_none());
    }

    #[test]
    fn find_store_returns_first_match() {
        let response = response_with_stores(json!([
            { "storeNumber": "R756", "storeName": "First" },
            { "storeNumber": "R756", "storeName": "Second" },
        ]));
        let store = response.find_store("R756").unwrap();
        assert_eq!(store.store_name.as_deref(), Some("First"));
    }

    #[test]
    fn find_store_is_case_sensitive() {
        let response = response_with_stores(json!([{ "storeNumber": "r756" }]));
        assert!(response.find_store("R756").is_none());
    }

    #[test]
    fn malformed_store_entries_are_skipped() {
        let response = response_with_stores(json!([
            { "storeName": "No number" },
            42,
            { "storeNumber": "R001" },
        ]));
        let stores = response.stores();
        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].store_number, "R001");
        assert!(stores[0].parts_availability.is_empty());
    }

    #[test]
    fn null_part_does_not_hide_store() {
        let response = response_with_stores(json!([{
            "storeNumber": "R756",
            "partsAvailability": {
                "MG6K4HN/A": { "pickupDisplay": "available", "pickupSearchQuote": "Today" },
                "MG6J4HN/A": null
            }
        }]));

        let store = response.find_store("R756").expect("store still found");
        assert_eq!(
            store.part("MG6K4HN/A").and_then(|r| r.pickup_display.as_deref()),
            Some("available")
        );
        assert!(store.part("MG6J4HN/A").is_none());
    }

    #[test]
    fn mistyped_part_fields_read_as_none() {
        let response = response_with_stores(json!([{
            "storeNumber": "R756",
            "storeName": 17,
            "partsAvailability": {
                "MG6K4HN/A": { "pickupDisplay": false, "pickupSearchQuote": "Tomorrow" },
                "MG6J4HN/A": { "pickupDisplay": "unavailable", "pickupSearchQuote": ["x"] },
                "MG6L4HN/A": "available"
            }
        }]));

        let store = response.find_store("R756").expect("store still found");
        assert_eq!(store.store_name, None);

        let white = store.part("MG6K4HN/A").expect("object entry kept");
        assert_eq!(white.pickup_display, None);
        assert_eq!(white.pickup_search_quote.as_deref(), Some("Tomorrow"));

        let black = store.part("MG6J4HN/A").expect("object entry kept");
        assert_eq!(black.pickup_display.as_deref(), Some("unavailable"));
        assert_eq!(black.pickup_search_quote, None);

        assert!(store.part("MG6L4HN/A").is_none());
    }

    #[test]
    fn non_object_parts_availability_is_empty() {
        let response = response_with_stores(json!([
            { "storeNumber": "R756", "partsAvailability": null },
        ]));
        let store = response.find_store("R756").expect("store still found");
        assert!(store.parts_availability.is_empty());
    }
}
