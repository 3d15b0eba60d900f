use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use employees::modules::employees::adapters::outbound::department_directory_http::HttpDepartmentDirectory;
use employees::modules::employees::adapters::outbound::employee_store_postgres::PostgresEmployeeStore;
use employees::modules::employees::use_cases::list_employees_with_departments::handler::ListEmployeesWithDepartmentsHandler;
use employees::modules::employees::use_cases::manage_employees::handler::ManageEmployeesHandler;
use employees::shared::auth::identity::TokenVerifier;
use employees::shared::infrastructure::database::Database;
use employees::shell::config::AppConfig;
use employees::shell::http::router;
use employees::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let database = Database::connect(&config.database.url, config.database.max_connections).await?;
    let store = Arc::new(PostgresEmployeeStore::new(
        database.pool().clone(),
        config.database.schema.clone(),
    ));
    let directory = Arc::new(HttpDepartmentDirectory::new(
        config.department_api_url.clone(),
    )?);

    let state = AppState {
        manage_employees: Arc::new(ManageEmployeesHandler::new(store.clone())),
        list_with_departments: Arc::new(ListEmployeesWithDepartmentsHandler::new(
            store, directory,
        )),
        tokens: Arc::new(TokenVerifier::new(&config.tokens)),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Employees API listening on http://{}", config.bind_addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
