use crate::modules::employees::core::employee::Employee;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Narrow CRUD contract over the employee table, keyed by identifier.
///
/// "No rows" is never an error: `list_all` returns an empty vec and
/// `find_by_id` returns `None`.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Employee>, StoreError>;
    async fn find_by_id(&self, empid: i32) -> Result<Option<Employee>, StoreError>;
    /// Returns the identifier assigned to the new row.
    async fn insert(&self, employee: &Employee) -> Result<i32, StoreError>;
    async fn update(&self, employee: &Employee) -> Result<(), StoreError>;
    async fn delete(&self, empid: i32) -> Result<(), StoreError>;
}
