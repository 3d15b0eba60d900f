// PostgreSQL implementation of the EmployeeStore port.
//
// Every operation calls one stored routine. Values always travel as bound
// parameters; routine and column names come from configuration and are
// validated as plain identifiers before they reach a statement.
//
// Each statement runs on a connection borrowed from the pool, which returns
// it on every exit path.

use crate::modules::employees::adapters::outbound::employee_store::{EmployeeStore, StoreError};
use crate::modules::employees::core::employee::Employee;
use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::{PgPool, PgRow};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid SQL identifier: {0:?}")]
pub struct InvalidIdentifier(pub String);

/// A routine or column name that is safe to splice into a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlIdentifier(String);

impl SqlIdentifier {
    pub fn parse(raw: &str) -> Result<Self, InvalidIdentifier> {
        let mut chars = raw.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid_start && valid_rest && raw.len() <= 63 {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidIdentifier(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SqlIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct EmployeeColumns {
    pub id: SqlIdentifier,
    pub name: SqlIdentifier,
    pub dept_id: SqlIdentifier,
}

/// Routine names and the columns each row-returning routine yields.
///
/// List and get-by-id keep separate column sets because deployed databases
/// disagree on the name column of the get-by-id routine.
#[derive(Debug, Clone)]
pub struct StoreSchema {
    pub list_routine: SqlIdentifier,
    pub get_by_id_routine: SqlIdentifier,
    pub insert_routine: SqlIdentifier,
    pub update_routine: SqlIdentifier,
    pub delete_routine: SqlIdentifier,
    pub list_columns: EmployeeColumns,
    pub get_by_id_columns: EmployeeColumns,
}

fn call_statement(routine: &SqlIdentifier, arity: usize) -> String {
    let placeholders = (1..=arity)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT * FROM {routine}({placeholders})")
}

fn map_row(row: &PgRow, columns: &EmployeeColumns) -> Result<Employee, sqlx::Error> {
    Ok(Employee {
        empid: row.try_get(columns.id.as_str())?,
        ename: row.try_get(columns.name.as_str())?,
        dept_id: row.try_get(columns.dept_id.as_str())?,
    })
}

fn backend(context: &str, error: sqlx::Error) -> StoreError {
    StoreError::Backend(format!("{context}: {error}"))
}

pub struct PostgresEmployeeStore {
    pool: PgPool,
    schema: StoreSchema,
}

impl PostgresEmployeeStore {
    pub fn new(pool: PgPool, schema: StoreSchema) -> Self {
        Self { pool, schema }
    }
}

#[async_trait]
impl EmployeeStore for PostgresEmployeeStore {
    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        let rows = sqlx::query(&call_statement(&self.schema.list_routine, 0))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| backend("Failed to list employees", e))?;

        rows.iter()
            .map(|row| map_row(row, &self.schema.list_columns))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| backend("Failed to read employee row", e))
    }

    async fn find_by_id(&self, empid: i32) -> Result<Option<Employee>, StoreError> {
        let row = sqlx::query(&call_statement(&self.schema.get_by_id_routine, 1))
            .bind(empid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| backend("Failed to load employee", e))?;

        row.map(|row| map_row(&row, &self.schema.get_by_id_columns))
            .transpose()
            .map_err(|e| backend("Failed to read employee row", e))
    }

    async fn insert(&self, employee: &Employee) -> Result<i32, StoreError> {
        let row = sqlx::query(&call_statement(&self.schema.insert_routine, 3))
            .bind(employee.empid)
            .bind(&employee.ename)
            .bind(employee.dept_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| backend("Failed to insert employee", e))?;

        row.try_get::<i32, _>(0)
            .map_err(|e| backend("Failed to read new employee id", e))
    }

    async fn update(&self, employee: &Employee) -> Result<(), StoreError> {
        sqlx::query(&call_statement(&self.schema.update_routine, 3))
            .bind(employee.empid)
            .bind(&employee.ename)
            .bind(employee.dept_id)
            .execute(&self.pool)
            .await
            .map_err(|e| backend("Failed to update employee", e))?;
        Ok(())
    }

    async fn delete(&self, empid: i32) -> Result<(), StoreError> {
        sqlx::query(&call_statement(&self.schema.delete_routine, 1))
            .bind(empid)
            .execute(&self.pool)
            .await
            .map_err(|e| backend("Failed to delete employee", e))?;
        Ok(())
    }
}
