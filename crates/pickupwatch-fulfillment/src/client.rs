//! HTTP client for the retailer's `fulfillment-messages` endpoint.
//!
//! Sends the browser-like headers the endpoint expects along with the
//! hand-maintained session cookie, and separates "the session has expired"
//! from ordinary transport failures so the caller can alert a human.

use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, COOKIE, REFERER};
use reqwest::{Client, Url};

use pickupwatch_core::AppConfig;

use crate::auth;
use crate::error::FulfillmentError;

/// Fixed query options sent with every availability request.
const FIXED_PARAMS: &[(&str, &str)] = &[
    ("fae", "true"),
    ("little", "false"),
    ("mts.0", "regular"),
    ("mts.1", "sticky"),
    ("fts", "true"),
];

/// Client for the live fulfillment endpoint.
///
/// The session cookie is optional at construction so the service can start
/// without one; [`FulfillmentClient::fetch_inventory`] reports
/// [`FulfillmentError::MissingCredential`] until it is configured.
pub struct FulfillmentClient {
    client: Client,
    base_url: Url,
    referer: String,
    session_cookie: Option<String>,
}

impl FulfillmentClient {
    /// Creates a client for `base_url` with the given timeout and headers.
    ///
    /// # Errors
    ///
    /// Returns [`FulfillmentError::InvalidUrl`] if `base_url` does not parse,
    /// or [`FulfillmentError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout_secs: u64,
        referer: &str,
        session_cookie: Option<String>,
    ) -> Result<Self, FulfillmentError> {
        let base_url = Url::parse(base_url).map_err(|e| FulfillmentError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            referer: referer.to_owned(),
            session_cookie,
        })
    }

    /// Builds a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`FulfillmentClient::new`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FulfillmentError> {
        Self::new(
            &config.fulfillment_url,
            &config.user_agent,
            config.fetch_timeout_secs,
            &config.referer,
            config.session_cookie.clone(),
        )
    }

    /// Builds the availability query URL for `skus`.
    ///
    /// Parts are numbered in the order given: `parts.0`, `parts.1`, ...
    #[must_use]
    pub fn build_url(&self, skus: &[String]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in FIXED_PARAMS {
                pairs.append_pair(k, v);
            }
            for (i, sku) in skus.iter().enumerate() {
                pairs.append_pair(&format!("parts.{i}"), sku);
            }
        }
        url
    }

    /// Fetches the raw availability response for `skus`.
    ///
    /// # Errors
    ///
    /// - [`FulfillmentError::MissingCredential`] if no session cookie is set.
    /// - [`FulfillmentError::AuthExpired`] on 401/403, a redirect to a sign-in
    ///   page, or a sign-in page served in place of JSON.
    /// - [`FulfillmentError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`FulfillmentError::Http`] on network failure or timeout.
    pub async fn fetch_inventory(&self, skus: &[String]) -> Result<String, FulfillmentError> {
        let Some(cookie) = self.session_cookie.as_deref() else {
            return Err(FulfillmentError::MissingCredential);
        };

        let url = self.build_url(skus);
        tracing::info!(items = skus.len(), "fetching fulfillment messages");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "*/*")
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.5")
            .header("x-skip-redirect", "true")
            .header("sec-fetch-dest", "empty")
            .header("sec-fetch-mode", "cors")
            .header("sec-fetch-site", "same-origin")
            .header(REFERER, &self.referer)
            .header(COOKIE, cookie)
            .send()
            .await?;

        let status = response.status();

        if let Some(signal) = auth::status_signal(status.as_u16()) {
            tracing::warn!(%signal, "fulfillment endpoint rejected session");
            return Err(FulfillmentError::AuthExpired { signal });
        }

        if let Some(signal) = auth::redirect_signal(response.url()) {
            tracing::warn!(%signal, "fulfillment request redirected to sign-in");
            return Err(FulfillmentError::AuthExpired { signal });
        }

        if !status.is_success() {
            return Err(FulfillmentError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;

        if let Some(signal) = auth::body_signal(&body) {
            tracing::warn!(%signal, "fulfillment endpoint served a sign-in page");
            return Err(FulfillmentError::AuthExpired { signal });
        }

        Ok(body)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
