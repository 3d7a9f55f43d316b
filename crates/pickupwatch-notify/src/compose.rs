//! Plain-text message bodies. No I/O.

use pickupwatch_core::{CycleSummary, PickupStatus, ProductAvailability};

const SEPARATOR: &str = "--------------------------";

/// Renders the availability summary sent to the general channel.
#[must_use]
pub fn compose(summary: &CycleSummary) -> String {
    let urgent = summary.urgent_count();

    let mut message = if urgent > 0 {
        format!("🎉 PICKUP AVAILABLE ALERT 🎉\n\n{urgent} item(s) available!\n\n")
    } else {
        "📅 Pickup Availability Status 📅\n\nNo immediate pickup found.\n\n".to_string()
    };

    message.push_str(&format!("{} ({})\n", summary.store, summary.store_id));
    message.push_str(SEPARATOR);

    for result in &summary.results {
        message.push('\n');
        message.push_str(&product_line(result));
    }

    message
}

fn product_line(result: &ProductAvailability) -> String {
    let glyph = match result.status {
        PickupStatus::DataMissing => "❓",
        _ if result.is_urgent => "✅",
        _ => "❌",
    };

    if result.status_text.is_empty() {
        format!("{glyph} {}", result.name)
    } else {
        format!("{glyph} {} - {}", result.name, result.status_text)
    }
}

/// Operator alert for a rejected or expired session cookie.
#[must_use]
pub fn auth_expired_alert(store_id: &str, reason: &str) -> String {
    format!(
        "🚨 COOKIE EXPIRED: update PICKUPWATCH_SESSION_COOKIE immediately!\n\n\
         Availability check for store {store_id} failed: {reason}"
    )
}

/// Operator alert for a cycle that could not start because no cookie is set.
#[must_use]
pub fn missing_credential_alert(store_id: &str) -> String {
    format!(
        "⚠️ PICKUPWATCH_SESSION_COOKIE is not configured.\n\n\
         Availability check for store {store_id} was skipped."
    )
}

/// Operator alert for any other configuration problem found mid-cycle.
#[must_use]
pub fn config_error_alert(store_id: &str, reason: &str) -> String {
    format!("⚠️ Configuration error: {reason}\n\nAvailability check for store {store_id} was skipped.")
}

/// General-channel notice when the response does not include the store.
#[must_use]
pub fn store_not_found_notice(store_id: &str) -> String {
    format!("Store {store_id} not found in response.")
}
