use std::future::Future;

use pickupwatch_core::AppConfig;

use crate::error::NotifyError;
use crate::telegram::TelegramNotifier;

/// Notification destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Availability summaries and store notices.
    General,
    /// Credential and configuration alerts for whoever maintains the cookie.
    Operator,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::General => write!(f, "general"),
            Channel::Operator => write!(f, "operator"),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn send(
        &self,
        channel: Channel,
        text: &str,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

impl Notifier for TelegramNotifier {
    async fn send(&self, channel: Channel, text: &str) -> Result<(), NotifyError> {
        let chat_id = match channel {
            Channel::General => self.chat_id(),
            Channel::Operator => self.operator_chat_id(),
        };
        self.send_message(chat_id, text).await
    }
}

/// Telegram when a bot token is configured, otherwise log-only.
pub enum NotifierBackend {
    Telegram(TelegramNotifier),
    Disabled,
}

impl NotifierBackend {
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the Telegram client cannot be constructed.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, NotifyError> {
        match &config.telegram {
            Some(telegram) => Ok(Self::Telegram(TelegramNotifier::new(
                telegram,
                config.notify_timeout_secs,
            )?)),
            None => {
                tracing::warn!("TELEGRAM_BOT_TOKEN not set; notifications will only be logged");
                Ok(Self::Disabled)
            }
        }
    }
}

impl Notifier for NotifierBackend {
    async fn send(&self, channel: Channel, text: &str) -> Result<(), NotifyError> {
        match self {
            NotifierBackend::Telegram(telegram) => telegram.send(channel, text).await,
            NotifierBackend::Disabled => {
                tracing::info!(%channel, "notifications disabled; skipping send");
                Ok(())
            }
        }
    }
}
