use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Telegram bot credentials and the two destination chats.
///
/// `chat_id` receives availability summaries and store notices;
/// `operator_chat_id` receives credential and configuration alerts only.
#[derive(Clone)]
pub struct TelegramConfig {
    pub api_url: String,
    pub bot_token: String,
    pub chat_id: String,
    pub operator_chat_id: String,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("api_url", &self.api_url)
            .field("bot_token", &"[redacted]")
            .field("chat_id", &self.chat_id)
            .field("operator_chat_id", &self.operator_chat_id)
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub products_path: PathBuf,
    pub store_id: String,
    pub store_label: Option<String>,
    pub fulfillment_url: String,
    pub referer: String,
    pub session_cookie: Option<String>,
    pub user_agent: String,
    pub fetch_timeout_secs: u64,
    pub notify_timeout_secs: u64,
    pub mock_mode: bool,
    pub fixture_path: Option<PathBuf>,
    pub check_cron: Option<String>,
    pub telegram: Option<TelegramConfig>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("products_path", &self.products_path)
            .field("store_id", &self.store_id)
            .field("store_label", &self.store_label)
            .field("fulfillment_url", &self.fulfillment_url)
            .field("referer", &self.referer)
            .field(
                "session_cookie",
                &self.session_cookie.as_ref().map(|_| "[redacted]"),
            )
            .field("user_agent", &self.user_agent)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("notify_timeout_secs", &self.notify_timeout_secs)
            .field("mock_mode", &self.mock_mode)
            .field("fixture_path", &self.fixture_path)
            .field("check_cron", &self.check_cron)
            .field("telegram", &self.telegram)
            .finish()
    }
}
