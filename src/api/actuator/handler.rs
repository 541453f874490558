//! Actuator Handlers

use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    database: CheckResult,
}

#[derive(Serialize)]
pub struct CheckResult {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckResult {
    fn ok() -> Self {
        Self {
            status: "ok",
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }
}

// Server start time (lazily initialized)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check - public route
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let database = match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.pool)
        .await
    {
        Ok(_) => CheckResult::ok(),
        Err(e) => CheckResult::error(format!("Database error: {e}")),
    };

    let all_ok = database.status == "ok";

    Json(HealthResponse {
        status: if all_ok { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime_seconds(),
        checks: HealthChecks { database },
    })
}

/// Prometheus exposition - public route
///
/// Every scrape re-evaluates the registered live gauges against storage.
pub async fn metrics(State(state): State<ServerState>) -> impl IntoResponse {
    let body = state.metrics.render().await;
    (
        [(http::header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
}

#[derive(Serialize)]
pub struct ShutdownResponse {
    message: &'static str,
}

/// Trigger graceful shutdown - the access policy requires ACTUATOR_ADMIN
///
/// The response is written before the listener stops accepting; in-flight
/// requests drain through the graceful shutdown path.
pub async fn shutdown(State(state): State<ServerState>) -> Json<ShutdownResponse> {
    tracing::warn!("Shutdown requested through the actuator endpoint");
    state.shutdown.request();
    Json(ShutdownResponse {
        message: "Shutting down, bye...",
    })
}
