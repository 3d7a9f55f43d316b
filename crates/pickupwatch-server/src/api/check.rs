use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use pickupwatch_core::ProductAvailability;
use pickupwatch_fulfillment::InventorySource;
use pickupwatch_monitor::{CycleOutcome, CycleReport};
use pickupwatch_notify::Notifier;

use super::{ApiError, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Serialize)]
pub struct CheckData {
    pub status: &'static str,
    pub store: String,
    pub store_id: String,
    pub total_urgent_available: usize,
    pub products: Vec<ProductAvailability>,
    pub checked_at: DateTime<Utc>,
    pub message: String,
    pub notified: bool,
    pub meta: ResponseMeta,
}

impl CheckData {
    fn from_report(report: CycleReport, meta: ResponseMeta) -> Self {
        let total_urgent_available = report.summary.urgent_count();
        Self {
            status: "ok",
            store: report.summary.store,
            store_id: report.summary.store_id,
            total_urgent_available,
            products: report.summary.results,
            checked_at: report.summary.checked_at,
            message: report.message,
            notified: report.notified,
            meta,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StoreNotFoundData {
    pub status: &'static str,
    pub store_id: String,
    pub message: String,
    pub meta: ResponseMeta,
}

/// Runs one availability cycle. Accepts GET and POST with no parameters so
/// any external scheduler can trigger it.
pub(super) async fn trigger_check<S, N>(
    State(state): State<AppState<S, N>>,
    Extension(req_id): Extension<RequestId>,
) -> Response
where
    S: InventorySource + 'static,
    N: Notifier + 'static,
{
    let outcome = state.monitor.run_cycle().await;
    tracing::info!(
        request_id = %req_id.0,
        outcome = outcome.label(),
        "availability check triggered over HTTP"
    );

    match outcome {
        CycleOutcome::Completed(report) => (
            StatusCode::OK,
            Json(CheckData::from_report(report, ResponseMeta::new(req_id.0))),
        )
            .into_response(),
        CycleOutcome::StoreNotFound { store_id, notice } => (
            StatusCode::NOT_FOUND,
            Json(StoreNotFoundData {
                status: "not_found",
                store_id,
                message: notice,
                meta: ResponseMeta::new(req_id.0),
            }),
        )
            .into_response(),
        CycleOutcome::Failed(failure) => ApiError::from_failure(req_id.0, &failure).into_response(),
    }
}
