use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn telegram_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("TELEGRAM_BOT_TOKEN", "123:abc");
    m.insert("TELEGRAM_CHAT_ID", "-100200");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "PICKUPWATCH_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should load");

    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.store_id, "R756");
    assert!(cfg.store_label.is_none());
    assert_eq!(cfg.fulfillment_url, DEFAULT_FULFILLMENT_URL);
    assert_eq!(cfg.referer, DEFAULT_REFERER);
    assert!(cfg.session_cookie.is_none());
    assert_eq!(cfg.user_agent, "Mozilla/5.0");
    assert_eq!(cfg.fetch_timeout_secs, 30);
    assert_eq!(cfg.notify_timeout_secs, 10);
    assert!(!cfg.mock_mode);
    assert!(cfg.fixture_path.is_none());
    assert!(cfg.check_cron.is_none());
    assert!(cfg.telegram.is_none());
}

#[test]
fn port_is_used_when_bind_addr_missing() {
    let mut map = HashMap::new();
    map.insert("PORT", "10000");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:10000");
}

#[test]
fn bind_addr_takes_precedence_over_port() {
    let mut map = HashMap::new();
    map.insert("PORT", "10000");
    map.insert("PICKUPWATCH_BIND_ADDR", "127.0.0.1:8080");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
}

#[test]
fn invalid_port_reports_port_var() {
    let mut map = HashMap::new();
    map.insert("PORT", "not-a-port");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PORT"),
        "expected InvalidEnvVar(PORT), got: {result:?}"
    );
}

#[test]
fn invalid_fetch_timeout_is_rejected() {
    let mut map = HashMap::new();
    map.insert("PICKUPWATCH_FETCH_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PICKUPWATCH_FETCH_TIMEOUT_SECS"),
        "got: {result:?}"
    );
}

#[test]
fn mock_mode_accepts_common_boolean_spellings() {
    for raw in ["true", "TRUE", "1", "yes"] {
        let mut map = HashMap::new();
        map.insert("PICKUPWATCH_MOCK_MODE", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.mock_mode, "{raw} should enable mock mode");
    }
}

#[test]
fn mock_mode_rejects_garbage() {
    let mut map = HashMap::new();
    map.insert("PICKUPWATCH_MOCK_MODE", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PICKUPWATCH_MOCK_MODE"),
        "got: {result:?}"
    );
}

#[test]
fn blank_cookie_counts_as_unset() {
    let mut map = HashMap::new();
    map.insert("PICKUPWATCH_SESSION_COOKIE", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.session_cookie.is_none());
}

#[test]
fn telegram_operator_chat_falls_back_to_general_chat() {
    let map = telegram_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let telegram = cfg.telegram.expect("telegram configured");
    assert_eq!(telegram.api_url, DEFAULT_TELEGRAM_API_URL);
    assert_eq!(telegram.chat_id, "-100200");
    assert_eq!(telegram.operator_chat_id, "-100200");
}

#[test]
fn telegram_operator_chat_override() {
    let mut map = telegram_env();
    map.insert("TELEGRAM_OPERATOR_CHAT_ID", "42");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.telegram.unwrap().operator_chat_id, "42");
}

#[test]
fn telegram_token_without_chat_id_fails() {
    let mut map = HashMap::new();
    map.insert("TELEGRAM_BOT_TOKEN", "123:abc");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "TELEGRAM_CHAT_ID"),
        "got: {result:?}"
    );
}

#[test]
fn placeholder_bot_token_disables_telegram() {
    let mut map = HashMap::new();
    map.insert("TELEGRAM_BOT_TOKEN", PLACEHOLDER_BOT_TOKEN);
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.telegram.is_none());
}

#[test]
fn debug_output_redacts_secrets() {
    let mut map = telegram_env();
    map.insert("PICKUPWATCH_SESSION_COOKIE", "dssid2=secret-cookie");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret-cookie"));
    assert!(!rendered.contains("123:abc"));
    assert!(rendered.contains("[redacted]"));
}
