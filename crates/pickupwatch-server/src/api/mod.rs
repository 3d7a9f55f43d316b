mod check;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use pickupwatch_fulfillment::InventorySource;
use pickupwatch_monitor::{CycleFailure, Monitor};
use pickupwatch_notify::Notifier;

use crate::middleware::{request_id, RequestId};

pub struct AppState<S, N> {
    pub monitor: Arc<Monitor<S, N>>,
}

impl<S, N> Clone for AppState<S, N> {
    fn clone(&self) -> Self {
        Self {
            monitor: Arc::clone(&self.monitor),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Error body. `status` is always `"error"`; `code` names the failure class.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub status: &'static str,
    pub code: String,
    pub message: String,
    pub meta: ResponseMeta,
    #[serde(skip)]
    http_status: StatusCode,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    mode: &'static str,
    store_id: String,
    tracked_products: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let code = code.into();
        let http_status = match code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "auth_expired" => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status: "error",
            code,
            message: message.into(),
            meta: ResponseMeta::new(request_id.into()),
            http_status,
        }
    }

    /// An upstream 403 is mirrored as 403; every other auth failure is 401.
    pub fn from_failure(request_id: impl Into<String>, failure: &CycleFailure) -> Self {
        let mut error = Self::new(request_id, failure.class.code(), failure.message.clone());
        if failure.upstream_status == Some(StatusCode::FORBIDDEN.as_u16()) {
            error.http_status = StatusCode::FORBIDDEN;
        }
        error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.http_status, Json(self)).into_response()
    }
}

pub fn build_app<S, N>(state: AppState<S, N>) -> Router
where
    S: InventorySource + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route(
            "/",
            get(check::trigger_check::<S, N>).post(check::trigger_check::<S, N>),
        )
        .route(
            "/api/v1/check",
            get(check::trigger_check::<S, N>).post(check::trigger_check::<S, N>),
        )
        .route("/api/v1/health", get(health::<S, N>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health<S, N>(
    State(state): State<AppState<S, N>>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse
where
    S: InventorySource + 'static,
    N: Notifier + 'static,
{
    let config = state.monitor.config();
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData {
                status: "ok",
                mode: state.monitor.source().mode(),
                store_id: config.store_id.clone(),
                tracked_products: config.products.len(),
            },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}
