// In memory implementation of the EmployeeStore port.
//
// Purpose
// - Support handler and router tests and local development without a database.
//
// Responsibilities
// - Keep rows ordered by identifier.
// - Honour caller-supplied identifiers, otherwise assign the next free one.
// - Count mutations so tests can assert that nothing was written.

use crate::modules::employees::adapters::outbound::employee_store::{EmployeeStore, StoreError};
use crate::modules::employees::core::employee::Employee;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEmployeeStore {
    rows: RwLock<BTreeMap<i32, Employee>>,
    mutations: AtomicUsize,
    is_offline: bool,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            rows: RwLock::new(rows.into_iter().map(|e| (e.empid, e)).collect()),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Employee store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, empid: i32) -> Result<Option<Employee>, StoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&empid).cloned())
    }

    async fn insert(&self, employee: &Employee) -> Result<i32, StoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        let empid = if employee.empid > 0 {
            employee.empid
        } else {
            match rows.keys().next_back() {
                None => 1,
                Some(last) => last.checked_add(1).ok_or_else(|| {
                    StoreError::Backend(format!("no identifier left after {last}"))
                })?,
            }
        };
        if rows.contains_key(&empid) {
            return Err(StoreError::Backend(format!(
                "employee {empid} already exists"
            )));
        }
        rows.insert(
            empid,
            Employee {
                empid,
                ..employee.clone()
            },
        );
        self.mutations.fetch_add(1, Ordering::SeqCst);
        Ok(empid)
    }

    async fn update(&self, employee: &Employee) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        if let Some(row) = rows.get_mut(&employee.empid) {
            *row = employee.clone();
        }
        self.mutations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete(&self, empid: i32) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.rows.write().await.remove(&empid);
        self.mutations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
