//! In-process check scheduler.
//!
//! Optional. Deployments that trigger checks over HTTP leave
//! `PICKUPWATCH_CHECK_CRON` unset and no job is registered.

use std::sync::Arc;

use pickupwatch_fulfillment::InventoryBackend;
use pickupwatch_monitor::Monitor;
use pickupwatch_notify::NotifierBackend;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

pub type ServerMonitor = Monitor<InventoryBackend, NotifierBackend>;

/// Builds and starts the scheduler, registering the check job when `cron`
/// is set.
///
/// The returned handle must be kept alive; dropping it stops every job.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the cron expression is invalid, or the scheduler fails to start.
pub async fn build_scheduler(
    monitor: Arc<ServerMonitor>,
    cron: Option<&str>,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    if let Some(cron) = cron {
        register_check_job(&scheduler, monitor, cron).await?;
    } else {
        tracing::info!("scheduler: no check cron configured; waiting for HTTP triggers");
    }

    scheduler.start().await?;
    Ok(scheduler)
}

async fn register_check_job(
    scheduler: &JobScheduler,
    monitor: Arc<ServerMonitor>,
    cron: &str,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_async(cron, move |_uuid, _lock| {
        let monitor = Arc::clone(&monitor);

        Box::pin(async move {
            tracing::info!("scheduler: starting availability check");
            let outcome = monitor.run_cycle().await;
            tracing::info!(outcome = outcome.label(), "scheduler: availability check finished");
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(cron, "scheduler: registered availability check job");
    Ok(())
}
