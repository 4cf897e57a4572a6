//! Employee API Handlers

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use shared::error::{AppError, AppResult};
use shared::models::{Employee, EmployeePayload};

use crate::api::extract::{EmployeeId, JsonBody};
use crate::core::ServerState;

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.find_all().await?;
    Ok(Json(employees))
}

/// Get employee by id (404 with empty body when absent)
pub async fn get_by_id(
    State(state): State<ServerState>,
    EmployeeId(id): EmployeeId,
) -> AppResult<Response> {
    match state.employees.find_by_id(id).await? {
        Some(employee) => Ok(Json(employee).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Create a new employee
///
/// Any id in the body is discarded so a create can never overwrite.
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<EmployeePayload>,
) -> AppResult<Response> {
    let saved = state
        .employees
        .save(Employee::new_unsaved(payload))
        .await?;

    let Some(id) = saved.id else {
        return Err(AppError::internal("Store returned employee without id"));
    };

    tracing::info!(employee_id = id, "Employee created");

    let location = format!("/api/employees/{id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(saved),
    )
        .into_response())
}

/// Replace the mutable fields of an existing employee
pub async fn update(
    State(state): State<ServerState>,
    EmployeeId(id): EmployeeId,
    JsonBody(payload): JsonBody<EmployeePayload>,
) -> AppResult<Response> {
    let Some(mut existing) = state.employees.find_by_id(id).await? else {
        tracing::info!(employee_id = id, "Update for unknown employee");
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    existing.apply(payload);
    let updated = state.employees.save(existing).await?;

    tracing::info!(employee_id = id, "Employee updated");
    Ok(Json(updated).into_response())
}

/// Delete an employee (204 whether or not it existed)
pub async fn delete(
    State(state): State<ServerState>,
    EmployeeId(id): EmployeeId,
) -> AppResult<StatusCode> {
    state.employees.delete(id).await?;
    tracing::info!(employee_id = id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}
