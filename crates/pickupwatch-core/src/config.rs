use std::env::VarError;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment, TelegramConfig};
use crate::ConfigError;

const DEFAULT_FULFILLMENT_URL: &str = "https://www.apple.com/in/shop/fulfillment-messages";
const DEFAULT_REFERER: &str = "https://www.apple.com/in/shop/buy-iphone/iphone-17/";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Template value shipped in example `.env` files. Treated as "not configured".
const PLACEHOLDER_BOT_TOKEN: &str = "YOUR_REAL_TELEGRAM_BOT_TOKEN";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        optional(&lookup, var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        optional(&lookup, var).unwrap_or_else(|| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("PICKUPWATCH_ENV", "development"))?;
    let bind_addr = parse_bind_addr(&lookup)?;
    let log_level = or_default("PICKUPWATCH_LOG_LEVEL", "info");
    let products_path = PathBuf::from(or_default(
        "PICKUPWATCH_PRODUCTS_PATH",
        "./config/products.yaml",
    ));

    let store_id = or_default("PICKUPWATCH_STORE_ID", "R756");
    let store_label = optional(&lookup, "PICKUPWATCH_STORE_LABEL");
    let fulfillment_url = or_default("PICKUPWATCH_FULFILLMENT_URL", DEFAULT_FULFILLMENT_URL);
    let referer = or_default("PICKUPWATCH_REFERER", DEFAULT_REFERER);
    let session_cookie = optional(&lookup, "PICKUPWATCH_SESSION_COOKIE");
    let user_agent = or_default("PICKUPWATCH_USER_AGENT", "Mozilla/5.0");

    let fetch_timeout_secs = parse_u64("PICKUPWATCH_FETCH_TIMEOUT_SECS", "30")?;
    let notify_timeout_secs = parse_u64("PICKUPWATCH_NOTIFY_TIMEOUT_SECS", "10")?;

    let mock_mode = parse_bool(
        "PICKUPWATCH_MOCK_MODE",
        &or_default("PICKUPWATCH_MOCK_MODE", "false"),
    )?;
    let fixture_path = optional(&lookup, "PICKUPWATCH_FIXTURE_PATH").map(PathBuf::from);
    let check_cron = optional(&lookup, "PICKUPWATCH_CHECK_CRON");

    let telegram = match optional(&lookup, "TELEGRAM_BOT_TOKEN")
        .filter(|token| token != PLACEHOLDER_BOT_TOKEN)
    {
        Some(bot_token) => {
            let chat_id = require("TELEGRAM_CHAT_ID")?;
            let operator_chat_id =
                optional(&lookup, "TELEGRAM_OPERATOR_CHAT_ID").unwrap_or_else(|| chat_id.clone());
            Some(TelegramConfig {
                api_url: or_default("TELEGRAM_API_URL", DEFAULT_TELEGRAM_API_URL),
                bot_token,
                chat_id,
                operator_chat_id,
            })
        }
        None => None,
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        products_path,
        store_id,
        store_label,
        fulfillment_url,
        referer,
        session_cookie,
        user_agent,
        fetch_timeout_secs,
        notify_timeout_secs,
        mock_mode,
        fixture_path,
        check_cron,
        telegram,
    })
}

/// Returns the trimmed value of `var`, treating blank values as unset.
fn optional<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    lookup(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `PICKUPWATCH_BIND_ADDR` wins; otherwise a platform-provided `PORT` binds
/// on all interfaces; otherwise `0.0.0.0:3000`.
fn parse_bind_addr<F>(lookup: &F) -> Result<SocketAddr, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let (var, raw) = match (
        optional(lookup, "PICKUPWATCH_BIND_ADDR"),
        optional(lookup, "PORT"),
    ) {
        (Some(addr), _) => ("PICKUPWATCH_BIND_ADDR", addr),
        (None, Some(port)) => ("PORT", format!("0.0.0.0:{port}")),
        (None, None) => ("PICKUPWATCH_BIND_ADDR", "0.0.0.0:3000".to_string()),
    };

    raw.parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PICKUPWATCH_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
