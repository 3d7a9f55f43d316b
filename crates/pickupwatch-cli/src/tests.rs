use chrono::Utc;
use pickupwatch_core::CycleSummary;
use pickupwatch_fulfillment::FailureClass;
use pickupwatch_monitor::{CycleFailure, CycleOutcome, CycleReport};

use super::*;

#[test]
fn parses_check_defaults() {
    let cli = Cli::try_parse_from(["pickupwatch-cli", "check"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Check {
            mock: false,
            dry_run: false
        }
    ));
}

#[test]
fn parses_check_with_mock_and_dry_run() {
    let cli = Cli::try_parse_from(["pickupwatch-cli", "check", "--mock", "--dry-run"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Check {
            mock: true,
            dry_run: true
        }
    ));
}

#[test]
fn parses_products_and_query() {
    let products = Cli::try_parse_from(["pickupwatch-cli", "products"]).expect("valid args");
    assert!(matches!(products.command, Commands::Products));

    let query = Cli::try_parse_from(["pickupwatch-cli", "query"]).expect("valid args");
    assert!(matches!(query.command, Commands::Query));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["pickupwatch-cli"]).is_err());
}

#[test]
fn rejects_unknown_check_flag() {
    assert!(Cli::try_parse_from(["pickupwatch-cli", "check", "--store", "R001"]).is_err());
}

#[test]
fn renders_completed_cycle_with_delivery_state() {
    let outcome = CycleOutcome::Completed(CycleReport {
        summary: CycleSummary {
            store: "Saket".to_string(),
            store_id: "R756".to_string(),
            results: Vec::new(),
            checked_at: Utc::now(),
        },
        message: "summary text".to_string(),
        notified: false,
    });

    assert_eq!(
        check::render_outcome(&outcome),
        "summary text\n\n(no notification sent)"
    );
}

#[test]
fn renders_store_not_found_notice() {
    let outcome = CycleOutcome::StoreNotFound {
        store_id: "R756".to_string(),
        notice: "Store R756 not found in response.".to_string(),
    };

    assert_eq!(
        check::render_outcome(&outcome),
        "Store R756 not found in response."
    );
}

#[test]
fn renders_failure_with_code_and_alert_state() {
    let outcome = CycleOutcome::Failed(CycleFailure {
        class: FailureClass::Authentication,
        message: "session expired".to_string(),
        operator_alerted: true,
        upstream_status: Some(401),
    });

    assert_eq!(
        check::render_outcome(&outcome),
        "error [auth_expired]: session expired (operator alerted)"
    );
}
