//! Per-cycle availability results.
//!
//! Everything here is created at the start of a check cycle and dropped at its
//! end; nothing is persisted between cycles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pickup outlook for one SKU at the watched store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupStatus {
    Today,
    Tomorrow,
    Unavailable,
    /// The store record carried no entry for this SKU.
    DataMissing,
}

impl PickupStatus {
    /// Today or tomorrow.
    #[must_use]
    pub fn is_urgent(self) -> bool {
        matches!(self, PickupStatus::Today | PickupStatus::Tomorrow)
    }
}

impl std::fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickupStatus::Today => write!(f, "today"),
            PickupStatus::Tomorrow => write!(f, "tomorrow"),
            PickupStatus::Unavailable => write!(f, "unavailable"),
            PickupStatus::DataMissing => write!(f, "data_missing"),
        }
    }
}

/// Classification of one tracked product in one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAvailability {
    pub name: String,
    pub sku: String,
    pub status: PickupStatus,
    pub is_urgent: bool,
    /// `"Available Today"`, `"Available Tomorrow"`, `"Data Missing"`, or the
    /// retailer's raw pickup quote (possibly empty).
    pub status_text: String,
}

/// Results for every tracked product at the watched store, in configured order.
#[derive(Debug, Clone, Serialize)]
pub struct CycleSummary {
    /// Human-readable store name.
    pub store: String,
    pub store_id: String,
    pub results: Vec<ProductAvailability>,
    pub checked_at: DateTime<Utc>,
}

impl CycleSummary {
    #[must_use]
    pub fn urgent_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_urgent).count()
    }

    pub fn urgent_products(&self) -> impl Iterator<Item = &ProductAvailability> {
        self.results.iter().filter(|r| r.is_urgent)
    }
}
