use crate::modules::employees::adapters::outbound::employee_store::{EmployeeStore, StoreError};
use crate::modules::employees::core::employee::{Employee, EmployeeInput};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("path id {path_id} does not match body id {body_id}")]
    IdMismatch { path_id: i32, body_id: i32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// CRUD over employees. Pure delegation to the store plus field mapping.
pub struct ManageEmployeesHandler {
    store: Arc<dyn EmployeeStore>,
}

impl ManageEmployeesHandler {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, ApplicationError> {
        Ok(self.store.list_all().await?)
    }

    pub async fn get_by_id(&self, empid: i32) -> Result<Option<Employee>, ApplicationError> {
        Ok(self.store.find_by_id(empid).await?)
    }

    pub async fn create(&self, input: EmployeeInput) -> Result<i32, ApplicationError> {
        let employee = Employee::from(input);
        let empid = self.store.insert(&employee).await?;
        tracing::info!(empid, dept_id = employee.dept_id, "employee created");
        Ok(empid)
    }

    pub async fn update(&self, path_id: i32, input: EmployeeInput) -> Result<(), ApplicationError> {
        if path_id != input.empid {
            return Err(ApplicationError::IdMismatch {
                path_id,
                body_id: input.empid,
            });
        }
        self.store.update(&Employee::from(input)).await?;
        tracing::info!(empid = path_id, "employee updated");
        Ok(())
    }

    pub async fn delete(&self, empid: i32) -> Result<(), ApplicationError> {
        self.store.delete(empid).await?;
        tracing::info!(empid, "employee deleted");
        Ok(())
    }
}
