use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::employees::core::employee::EmployeeInput;
use crate::shared::auth::extractor::{
    Authorized, CanCreateEmployees, CanDeleteEmployees, CanReadEmployees, CanUpdateEmployees,
};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ConfirmationResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empid: Option<i32>,
}

impl ConfirmationResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            empid: None,
        }
    }
}

fn parse_body(body: Result<Json<EmployeeInput>, JsonRejection>) -> Result<EmployeeInput, ApiError> {
    body.map(|Json(input)| input)
        .map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))
}

fn parse_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    path.map(|Path(empid)| empid)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

pub async fn list(
    _: Authorized<CanReadEmployees>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let employees = state.manage_employees.list().await?;
    Ok(Json(employees))
}

pub async fn get_by_id(
    _: Authorized<CanReadEmployees>,
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let empid = parse_id(path)?;
    match state.manage_employees.get_by_id(empid).await? {
        Some(employee) => Ok(Json(employee)),
        None => Err(ApiError::NotFound(format!("employee {empid} not found"))),
    }
}

pub async fn create(
    _: Authorized<CanCreateEmployees>,
    State(state): State<AppState>,
    body: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let input = parse_body(body)?;
    let empid = state.manage_employees.create(input).await?;
    Ok(Json(ConfirmationResponse {
        empid: Some(empid),
        ..ConfirmationResponse::new("Employee created")
    }))
}

pub async fn update(
    _: Authorized<CanUpdateEmployees>,
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let empid = parse_id(path)?;
    let input = parse_body(body)?;
    state.manage_employees.update(empid, input).await?;
    Ok(Json(ConfirmationResponse::new("Employee updated")))
}

pub async fn delete(
    _: Authorized<CanDeleteEmployees>,
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let empid = parse_id(path)?;
    state.manage_employees.delete(empid).await?;
    Ok(Json(ConfirmationResponse::new("Employee deleted")))
}
