use axum::{Router, middleware::from_fn, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::employees::use_cases::list_employees_with_departments::inbound::http as with_departments_http;
use crate::modules::employees::use_cases::manage_employees::inbound::http as manage_http;
use crate::shared::infrastructure::request_timing::log_request_timing;
use crate::shell::state::AppState;

async fn health() -> &'static str {
    "ok"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/employee",
            get(manage_http::list).post(manage_http::create),
        )
        .route(
            "/api/employee/with-dept-simple",
            get(with_departments_http::handle),
        )
        .route(
            "/api/employee/{id}",
            get(manage_http::get_by_id)
                .put(manage_http::update)
                .delete(manage_http::delete),
        )
        .with_state(state)
        .layer(from_fn(log_request_timing))
        .layer(TraceLayer::new_for_http())
}
