//! Employee API Module
//!
//! | Path | Method | Success | Absent |
//! |------|--------|---------|--------|
//! | /api/employees | GET | 200 list | - |
//! | /api/employees | POST | 201 + Location | - |
//! | /api/employees/{id} | GET | 200 | 404 |
//! | /api/employees/{id} | PUT | 200 | 404 |
//! | /api/employees/{id} | DELETE | 204 | 204 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/employees", get(handler::list).post(handler::create))
        .route(
            "/api/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
