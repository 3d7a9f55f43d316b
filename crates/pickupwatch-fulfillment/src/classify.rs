//! Pickup availability classifier.
//!
//! A part is *urgent* when it can be collected today (`pickupDisplay ==
//! "available"`) or when the pickup quote mentions "tomorrow" in any case.
//! The tomorrow check is a plain substring match, so a quote such as
//! "no pickup until tomorrow afternoon" also counts.

use pickupwatch_core::{PickupStatus, ProductAvailability, TrackedProduct};

use crate::types::{FulfillmentRecord, StoreRecord};

pub const AVAILABLE_TODAY: &str = "Available Today";
pub const AVAILABLE_TOMORROW: &str = "Available Tomorrow";
pub const DATA_MISSING: &str = "Data Missing";

/// Outcome of classifying a single fulfillment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: PickupStatus,
    pub status_text: String,
}

impl Classification {
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.status.is_urgent()
    }

    #[must_use]
    pub fn is_data_missing(&self) -> bool {
        self.status == PickupStatus::DataMissing
    }

    #[must_use]
    pub fn into_availability(self, product: &TrackedProduct) -> ProductAvailability {
        ProductAvailability {
            name: product.name.clone(),
            sku: product.sku.clone(),
            is_urgent: self.is_urgent(),
            status: self.status,
            status_text: self.status_text,
        }
    }
}

/// Classifies one part. Never fails; `None` means the store had no entry.
#[must_use]
pub fn classify(record: Option<&FulfillmentRecord>) -> Classification {
    let Some(record) = record else {
        return Classification {
            status: PickupStatus::DataMissing,
            status_text: DATA_MISSING.to_string(),
        };
    };

    let quote = record.pickup_search_quote.as_deref().unwrap_or_default();
    let is_today = record.pickup_display.as_deref() == Some("available");
    let is_tomorrow = !is_today && quote.to_lowercase().contains("tomorrow");

    if is_today {
        Classification {
            status: PickupStatus::Today,
            status_text: AVAILABLE_TODAY.to_string(),
        }
    } else if is_tomorrow {
        Classification {
            status: PickupStatus::Tomorrow,
            status_text: AVAILABLE_TOMORROW.to_string(),
        }
    } else {
        Classification {
            status: PickupStatus::Unavailable,
            status_text: quote.to_string(),
        }
    }
}

/// One result per tracked product, in the order given.
#[must_use]
pub fn classify_store(store: &StoreRecord, products: &[TrackedProduct]) -> Vec<ProductAvailability> {
    products
        .iter()
        .map(|product| {
            let classification = classify(store.part(&product.sku));
            if classification.is_data_missing() {
                tracing::warn!(
                    store_id = %store.store_number,
                    sku = %product.sku,
                    "no usable fulfillment record for tracked part"
                );
            }
            classification.into_availability(product)
        })
        .collect()
}
