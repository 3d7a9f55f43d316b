//! One-shot availability check for the `check` command.

use pickupwatch_core::AppConfig;
use pickupwatch_fulfillment::InventoryBackend;
use pickupwatch_monitor::{CycleConfig, CycleOutcome, Monitor};
use pickupwatch_notify::NotifierBackend;

/// Runs a single cycle and prints the result.
///
/// `mock` forces the fixture backend; `dry_run` disables notifications.
///
/// # Errors
///
/// Returns an error if the products file or backends cannot be loaded, or if
/// the cycle did not complete.
pub(crate) async fn run_check(
    mut config: AppConfig,
    mock: bool,
    dry_run: bool,
) -> anyhow::Result<()> {
    if mock {
        config.mock_mode = true;
    }

    let products = crate::load_products(&config)?;
    let cycle_config = CycleConfig::from_app_config(&config, products.products);
    let source = InventoryBackend::from_app_config(&config, &cycle_config.skus())?;
    let notifier = if dry_run {
        NotifierBackend::Disabled
    } else {
        NotifierBackend::from_app_config(&config)?
    };

    let monitor = Monitor::new(source, notifier, cycle_config);
    let outcome = monitor.run_cycle().await;
    tracing::info!(outcome = outcome.label(), dry_run, "one-shot check finished");
    println!("{}", render_outcome(&outcome));

    match outcome {
        CycleOutcome::Completed(_) => Ok(()),
        CycleOutcome::StoreNotFound { store_id, .. } => {
            anyhow::bail!("store {store_id} not found in fulfillment response")
        }
        CycleOutcome::Failed(failure) => {
            anyhow::bail!("check failed ({}): {}", failure.class.code(), failure.message)
        }
    }
}

/// Text printed for a finished cycle.
pub(crate) fn render_outcome(outcome: &CycleOutcome) -> String {
    match outcome {
        CycleOutcome::Completed(report) => {
            let delivery = if report.notified {
                "notification sent"
            } else {
                "no notification sent"
            };
            format!("{}\n\n({delivery})", report.message)
        }
        CycleOutcome::StoreNotFound { notice, .. } => notice.clone(),
        CycleOutcome::Failed(failure) => {
            let alerted = if failure.operator_alerted {
                " (operator alerted)"
            } else {
                ""
            };
            format!("error [{}]: {}{alerted}", failure.class.code(), failure.message)
        }
    }
}
