//! Request logging middleware
//!
//! One line per request, tagged with the request id from `SetRequestIdLayer`
//! and, on `/api/employees/{id}` routes, the employee id.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tower_http::request_id::RequestId;

const EMPLOYEE_ITEM_ROUTE: &str = "/api/employees/{id}";

/// Raw `{id}` segment of an employee item route
///
/// Kept as text so unparsable ids still show up in the log.
fn employee_id_segment<'a>(route: Option<&str>, path: &'a str) -> Option<&'a str> {
    if route != Some(EMPLOYEE_ITEM_ROUTE) {
        return None;
    }
    path.rsplit('/').next().filter(|s| !s.is_empty())
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
        .to_string();

    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string());
    let path = req.uri().path().to_string();
    let employee_id = employee_id_segment(route.as_deref(), &path).map(str::to_string);

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    let route = route.as_deref().unwrap_or(&path);

    if response.status().is_client_error() || response.status().is_server_error() {
        tracing::warn!(
            request_id = %request_id,
            method = %method,
            route = %route,
            employee_id = ?employee_id,
            status,
            latency_ms,
            "Request failed"
        );
    } else {
        tracing::info!(
            request_id = %request_id,
            method = %method,
            route = %route,
            employee_id = ?employee_id,
            status,
            latency_ms,
            "Request completed"
        );
    }

    response
}
