use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{info, instrument};

use super::dto::{DeleteResponse, EmployeeInput};
use super::extractors::{EmployeeId, JsonBody};
use super::repo_types::Employee;
use crate::{
    error::{ApiError, ApiResult, Operation},
    state::AppState,
};

pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/employee", get(list_employees).post(create_employee))
        .route(
            "/employee/:id",
            get(get_employee)
                .patch(update_employee)
                .delete(delete_employee),
        )
}

#[instrument(skip(state))]
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state
        .employees
        .list()
        .await
        .map_err(|e| ApiError::from_store(Operation::List, e))?;
    info!(count = employees.len(), "fetched employees");
    Ok(Json(employees))
}

#[instrument(skip(state))]
pub async fn get_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> ApiResult<Json<Employee>> {
    let employee = state
        .employees
        .find(id)
        .await
        .map_err(|e| ApiError::from_store(Operation::Get, e))?;
    info!(id, "fetched employee");
    Ok(Json(employee))
}

#[instrument(skip(state, input))]
pub async fn create_employee(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<EmployeeInput>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let employee = state
        .employees
        .create(&input)
        .await
        .map_err(|e| ApiError::from_store(Operation::Create, e))?;
    info!(id = employee.id, "created employee");
    Ok((StatusCode::CREATED, Json(employee)))
}

#[instrument(skip(state, input))]
pub async fn update_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
    JsonBody(input): JsonBody<EmployeeInput>,
) -> ApiResult<Json<Employee>> {
    let exists = state
        .employees
        .exists(id)
        .await
        .map_err(|e| ApiError::from_store(Operation::Update, e))?;
    if !exists {
        return Err(ApiError::NotFound);
    }

    let employee = state
        .employees
        .update(id, &input)
        .await
        .map_err(|e| ApiError::from_store(Operation::Update, e))?;
    info!(id, "updated employee");
    Ok(Json(employee))
}

#[instrument(skip(state))]
pub async fn delete_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = state
        .employees
        .delete(id)
        .await
        .map_err(|e| ApiError::from_store(Operation::Delete, e))?;
    info!(id, "deleted employee");
    Ok(Json(DeleteResponse::new(deleted)))
}
