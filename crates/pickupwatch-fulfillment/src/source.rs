//! Where a check cycle gets its inventory response from.

use std::future::Future;

use pickupwatch_core::AppConfig;

use crate::client::FulfillmentClient;
use crate::error::FulfillmentError;
use crate::fixture::FixtureInventory;

/// Produces the raw fulfillment response body for a list of SKUs.
pub trait InventorySource: Send + Sync {
    fn fetch_inventory(
        &self,
        skus: &[String],
    ) -> impl Future<Output = Result<String, FulfillmentError>> + Send;

    /// Short label for logs and the health endpoint.
    fn mode(&self) -> &'static str;
}

impl InventorySource for FulfillmentClient {
    async fn fetch_inventory(&self, skus: &[String]) -> Result<String, FulfillmentError> {
        FulfillmentClient::fetch_inventory(self, skus).await
    }

    fn mode(&self) -> &'static str {
        "live"
    }
}

impl InventorySource for FixtureInventory {
    async fn fetch_inventory(&self, skus: &[String]) -> Result<String, FulfillmentError> {
        tracing::info!(items = skus.len(), "serving fixture inventory response");
        Ok(self.body().to_owned())
    }

    fn mode(&self) -> &'static str {
        "fixture"
    }
}

/// Live or fixture-backed inventory, chosen once at startup.
pub enum InventoryBackend {
    Live(FulfillmentClient),
    Fixture(FixtureInventory),
}

impl InventoryBackend {
    /// Picks the fixture backend when `mock_mode` is set, otherwise the live
    /// client. `skus` seeds the built-in sample when no fixture file is given.
    ///
    /// # Errors
    ///
    /// Returns [`FulfillmentError::InvalidUrl`] or [`FulfillmentError::Http`]
    /// for a bad live configuration, or [`FulfillmentError::FixtureIo`] if the
    /// fixture file cannot be read.
    pub fn from_app_config(config: &AppConfig, skus: &[String]) -> Result<Self, FulfillmentError> {
        if !config.mock_mode {
            return Ok(Self::Live(FulfillmentClient::from_app_config(config)?));
        }

        let fixture = match &config.fixture_path {
            Some(path) => FixtureInventory::from_file(path)?,
            None => FixtureInventory::sample(&config.store_id, skus),
        };
        Ok(Self::Fixture(fixture))
    }
}

impl InventorySource for InventoryBackend {
    async fn fetch_inventory(&self, skus: &[String]) -> Result<String, FulfillmentError> {
        match self {
            InventoryBackend::Live(client) => client.fetch_inventory(skus).await,
            InventoryBackend::Fixture(fixture) => {
                InventorySource::fetch_inventory(fixture, skus).await
            }
        }
    }

    fn mode(&self) -> &'static str {
        match self {
            InventoryBackend::Live(client) => client.mode(),
            InventoryBackend::Fixture(fixture) => fixture.mode(),
        }
    }
}
