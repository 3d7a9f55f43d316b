//! Telegram Bot API `sendMessage` client.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use pickupwatch_core::TelegramConfig;

use crate::error::NotifyError;

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Posts plain-text messages to the general and operator chats.
pub struct TelegramNotifier {
    client: Client,
    send_url: Url,
    chat_id: String,
    operator_chat_id: String,
}

impl TelegramNotifier {
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidUrl`] if `api_url` is not a valid base URL,
    /// or [`NotifyError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(config: &TelegramConfig, timeout_secs: u64) -> Result<Self, NotifyError> {
        let api_url = config.api_url.trim_end_matches('/');
        let send_url = Url::parse(&format!("{api_url}/bot{}/sendMessage", config.bot_token))
            .map_err(|e| NotifyError::InvalidUrl {
                url: api_url.to_owned(),
                reason: e.to_string(),
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            client,
            send_url,
            chat_id: config.chat_id.clone(),
            operator_chat_id: config.operator_chat_id.clone(),
        })
    }

    #[must_use]
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    #[must_use]
    pub fn operator_chat_id(&self) -> &str {
        &self.operator_chat_id
    }

    /// Sends `text` to `chat_id`.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::Http`] on network failure or timeout.
    /// - [`NotifyError::Api`] if Telegram rejects the message.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.send_url.clone())
            .json(&SendMessage { chat_id, text })
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;
        let reply = serde_json::from_str::<BotApiReply>(&body).ok();

        match reply {
            Some(reply) if status.is_success() && reply.ok => Ok(()),
            Some(reply) => Err(NotifyError::Api {
                status: status.as_u16(),
                description: reply.description.unwrap_or_else(|| "no description".to_string()),
            }),
            None if status.is_success() => Ok(()),
            None => Err(NotifyError::Api {
                status: status.as_u16(),
                description: body,
            }),
        }
    }
}
