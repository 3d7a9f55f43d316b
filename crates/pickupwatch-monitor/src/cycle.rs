//! Check-cycle orchestration.
//!
//! A cycle runs strictly in sequence: fetch the inventory response, find the
//! watched store, classify every tracked product, compose the summary, and
//! notify the general channel when something can be picked up today or
//! tomorrow. Every failure is converted into a [`CycleOutcome`]; nothing is
//! retried and nothing is kept between cycles.

use chrono::Utc;

use pickupwatch_core::{AppConfig, CycleSummary, TrackedProduct};
use pickupwatch_fulfillment::{
    classify_store, FailureClass, FulfillmentError, InventorySource, ProviderResponse, StoreRecord,
};
use pickupwatch_notify::compose::{
    auth_expired_alert, config_error_alert, missing_credential_alert, store_not_found_notice,
};
use pickupwatch_notify::{compose, Channel, Notifier};

/// Store and product list a cycle checks.
#[derive(Debug, Clone)]
pub struct CycleConfig {
    pub store_id: String,
    /// Overrides the store name reported by the retailer.
    pub store_label: Option<String>,
    pub products: Vec<TrackedProduct>,
}

impl CycleConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig, products: Vec<TrackedProduct>) -> Self {
        Self {
            store_id: config.store_id.clone(),
            store_label: config.store_label.clone(),
            products,
        }
    }

    #[must_use]
    pub fn skus(&self) -> Vec<String> {
        self.products.iter().map(|p| p.sku.clone()).collect()
    }
}

/// A cycle that found the store and classified every product.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub summary: CycleSummary,
    pub message: String,
    /// Whether the summary was delivered to the general channel.
    pub notified: bool,
}

#[derive(Debug, Clone)]
pub struct CycleFailure {
    pub class: FailureClass,
    pub message: String,
    pub operator_alerted: bool,
    /// Upstream 401/403 behind an authentication failure.
    pub upstream_status: Option<u16>,
}

#[derive(Debug, Clone)]
pub enum CycleOutcome {
    Completed(CycleReport),
    StoreNotFound { store_id: String, notice: String },
    Failed(CycleFailure),
}

impl CycleOutcome {
    /// `ok`, `not_found`, or the failure class code.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CycleOutcome::Completed(_) => "ok",
            CycleOutcome::StoreNotFound { .. } => "not_found",
            CycleOutcome::Failed(failure) => failure.class.code(),
        }
    }
}

/// Runs check cycles against one inventory source and one notifier.
pub struct Monitor<S, N> {
    source: S,
    notifier: N,
    config: CycleConfig,
}

impl<S, N> Monitor<S, N>
where
    S: InventorySource,
    N: Notifier,
{
    pub fn new(source: S, notifier: N, config: CycleConfig) -> Self {
        Self {
            source,
            notifier,
            config,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Runs one full cycle. Never panics and never returns an error; the
    /// outcome describes what happened.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let store_id = self.config.store_id.as_str();
        let skus = self.config.skus();
        tracing::info!(
            store_id,
            products = skus.len(),
            mode = self.source.mode(),
            "starting availability check"
        );

        let body = match self.source.fetch_inventory(&skus).await {
            Ok(body) => body,
            Err(err) => return self.fail(err).await,
        };

        let response = match ProviderResponse::parse(&body) {
            Ok(response) => response,
            Err(err) => return self.fail(err).await,
        };

        let Some(store) = response.find_store(store_id) else {
            let notice = store_not_found_notice(store_id);
            tracing::warn!(store_id, "store not found in fulfillment response");
            self.deliver(Channel::General, &notice).await;
            return CycleOutcome::StoreNotFound {
                store_id: store_id.to_owned(),
                notice,
            };
        };

        let summary = CycleSummary {
            store: self.store_display_name(&store),
            store_id: store_id.to_owned(),
            results: classify_store(&store, &self.config.products),
            checked_at: Utc::now(),
        };
        let message = compose(&summary);
        let urgent = summary.urgent_count();
        let urgent_skus: Vec<&str> = summary.urgent_products().map(|p| p.sku.as_str()).collect();
        tracing::info!(
            store_id,
            urgent,
            ?urgent_skus,
            "availability check complete\n{message}"
        );

        let notified = if urgent > 0 {
            self.deliver(Channel::General, &message).await
        } else {
            false
        };

        CycleOutcome::Completed(CycleReport {
            summary,
            message,
            notified,
        })
    }

    async fn fail(&self, err: FulfillmentError) -> CycleOutcome {
        let class = err.class();
        let store_id = self.config.store_id.as_str();
        let message = err.to_string();
        tracing::error!(store_id, code = class.code(), error = %err, "availability check failed");

        let alert = match (&err, class) {
            (FulfillmentError::MissingCredential, _) => Some(missing_credential_alert(store_id)),
            (_, FailureClass::Authentication) => Some(auth_expired_alert(store_id, &message)),
            (_, FailureClass::Configuration) => Some(config_error_alert(store_id, &message)),
            _ => None,
        };

        let operator_alerted = match alert {
            Some(alert) => self.deliver(Channel::Operator, &alert).await,
            None => false,
        };

        CycleOutcome::Failed(CycleFailure {
            class,
            message,
            operator_alerted,
            upstream_status: err.auth_status(),
        })
    }

    /// Best-effort send; failures are logged and reported as `false`.
    async fn deliver(&self, channel: Channel, text: &str) -> bool {
        match self.notifier.send(channel, text).await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(%channel, error = %err, "failed to send notification");
                false
            }
        }
    }

    fn store_display_name(&self, store: &StoreRecord) -> String {
        self.config
            .store_label
            .clone()
            .or_else(|| store.store_name.clone())
            .unwrap_or_else(|| store.store_number.clone())
    }
}

#[cfg(test)]
#[path = "cycle_test.rs"]
mod tests;
