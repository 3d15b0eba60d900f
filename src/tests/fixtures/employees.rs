use crate::modules::employees::core::employee::{Employee, EmployeeInput};

pub struct EmployeeBuilder {
    inner: Employee,
}

impl Default for EmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EmployeeBuilder {
    pub fn new() -> Self {
        Self {
            inner: Employee {
                empid: 1,
                ename: "Ada Lovelace".to_string(),
                dept_id: 10,
            },
        }
    }

    pub fn empid(mut self, v: i32) -> Self {
        self.inner.empid = v;
        self
    }

    pub fn ename(mut self, v: impl Into<String>) -> Self {
        self.inner.ename = v.into();
        self
    }

    pub fn dept_id(mut self, v: i32) -> Self {
        self.inner.dept_id = v;
        self
    }

    pub fn build(self) -> Employee {
        self.inner
    }
}

pub struct EmployeeInputBuilder {
    inner: EmployeeInput,
}

impl Default for EmployeeInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EmployeeInputBuilder {
    pub fn new() -> Self {
        Self {
            inner: EmployeeInput {
                empid: 1,
                ename: "Ada Lovelace".to_string(),
                dept_id: 10,
            },
        }
    }

    pub fn empid(mut self, v: i32) -> Self {
        self.inner.empid = v;
        self
    }

    pub fn ename(mut self, v: impl Into<String>) -> Self {
        self.inner.ename = v.into();
        self
    }

    pub fn dept_id(mut self, v: i32) -> Self {
        self.inner.dept_id = v;
        self
    }

    pub fn build(self) -> EmployeeInput {
        self.inner
    }
}
