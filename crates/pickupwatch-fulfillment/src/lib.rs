//! Retailer fulfillment-messages client, response parsing, and the pickup
//! availability classifier.

pub mod auth;
pub mod classify;
pub mod client;
pub mod error;
pub mod fixture;
pub mod parse;
pub mod source;
pub mod types;

pub use auth::AuthSignal;
pub use classify::{classify, classify_store, Classification};
pub use client::FulfillmentClient;
pub use error::{FailureClass, FulfillmentError};
pub use fixture::FixtureInventory;
pub use parse::ProviderResponse;
pub use source::{InventoryBackend, InventorySource};
pub use types::{FulfillmentRecord, StoreRecord};
