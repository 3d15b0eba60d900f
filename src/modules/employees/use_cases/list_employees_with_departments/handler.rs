use crate::modules::employees::adapters::outbound::department_directory::{
    DepartmentDirectory, HardToken,
};
use crate::modules::employees::adapters::outbound::employee_store::EmployeeStore;
use crate::modules::employees::core::department::parse_departments;
use crate::modules::employees::core::enrichment::{EnrichedEmployee, join_departments};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnrichmentError {
    #[error("Hard-Token header is required")]
    MissingSharedSecret,

    /// The Department service answered with a non-success status.
    #[error("department service returned {status}")]
    Upstream { status: u16, body: String },

    #[error("{0}")]
    Unexpected(String),
}

/// Joins local employees with departments fetched from the Department service.
pub struct ListEmployeesWithDepartmentsHandler {
    store: Arc<dyn EmployeeStore>,
    directory: Arc<dyn DepartmentDirectory>,
}

impl ListEmployeesWithDepartmentsHandler {
    pub fn new(store: Arc<dyn EmployeeStore>, directory: Arc<dyn DepartmentDirectory>) -> Self {
        Self { store, directory }
    }

    pub async fn handle(
        &self,
        shared_secret: Option<&str>,
    ) -> Result<Vec<EnrichedEmployee>, EnrichmentError> {
        let token = HardToken::parse(shared_secret).ok_or(EnrichmentError::MissingSharedSecret)?;

        let employees = self
            .store
            .list_all()
            .await
            .map_err(|e| EnrichmentError::Unexpected(e.to_string()))?;

        let response = self
            .directory
            .fetch_all(&token)
            .await
            .map_err(|e| EnrichmentError::Unexpected(e.to_string()))?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "department service call failed");
            return Err(EnrichmentError::Upstream {
                status: response.status,
                body: response.body,
            });
        }

        let departments = parse_departments(&response.body)
            .map_err(|e| EnrichmentError::Unexpected(e.to_string()))?;

        let enriched = join_departments(employees, &departments);
        tracing::debug!(
            departments = departments.len(),
            matched = enriched.len(),
            "employees enriched"
        );
        Ok(enriched)
    }
}
