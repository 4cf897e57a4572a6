//! Health check routes
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /health | GET | Liveness |
//! | /health/detailed | GET | Database connectivity and row count |
//!
//! # Example response
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "uptime_seconds": 42,
//!   "checks": { "database": { "status": "ok", "latency_ms": 0, "employees": 3 } }
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    database: CheckResult,
}

/// Single component check
#[derive(Serialize)]
pub struct CheckResult {
    /// ok | error
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    employees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckResult {
    fn ok(latency_ms: u64, employees: i64) -> Self {
        Self {
            status: "ok",
            latency_ms: Some(latency_ms),
            employees: Some(employees),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            latency_ms: None,
            employees: None,
            message: Some(message.into()),
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let db_start = std::time::Instant::now();
    let db_check = match state.db.ping().await {
        Ok(()) => match state.employees.count().await {
            Ok(count) => CheckResult::ok(
                u64::try_from(db_start.elapsed().as_millis()).unwrap_or(u64::MAX),
                count,
            ),
            Err(e) => CheckResult::error(e.to_string()),
        },
        Err(e) => CheckResult::error(format!("Database error: {e}")),
    };

    if db_check.status != "ok" {
        tracing::warn!(message = ?db_check.message, "Database health check failed");
    }

    Json(DetailedHealthResponse {
        status: if db_check.status == "ok" {
            "healthy"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        checks: HealthChecks { database: db_check },
    })
}
