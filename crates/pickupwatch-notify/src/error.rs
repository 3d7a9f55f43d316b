use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// Network or TLS failure. The URL is stripped because it embeds the bot token.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Telegram answered with a non-2xx status or `"ok": false`.
    #[error("Telegram API error (HTTP {status}): {description}")]
    Api { status: u16, description: String },

    #[error("invalid Telegram API URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
