use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    response::IntoResponse,
};

use crate::modules::employees::adapters::outbound::department_directory::HARD_TOKEN_HEADER;
use crate::shared::auth::extractor::{Authorized, CanReadEmployees};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    _: Authorized<CanReadEmployees>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let shared_secret = headers
        .get(HARD_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    let enriched = state.list_with_departments.handle(shared_secret).await?;
    Ok(Json(enriched))
}
