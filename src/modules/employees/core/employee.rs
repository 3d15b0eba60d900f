use serde::{Deserialize, Serialize};

/// An employee record as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "Empid")]
    pub empid: i32,
    #[serde(rename = "Ename")]
    pub ename: String,
    #[serde(rename = "Dept_ID")]
    pub dept_id: i32,
}

/// Transport shape accepted on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeInput {
    #[serde(rename = "Empid", alias = "empid", default)]
    pub empid: i32,
    #[serde(rename = "Ename", alias = "ename")]
    pub ename: String,
    #[serde(rename = "Dept_ID", alias = "dept_id", alias = "DeptID")]
    pub dept_id: i32,
}

impl From<EmployeeInput> for Employee {
    fn from(input: EmployeeInput) -> Self {
        Self {
            empid: input.empid,
            ename: input.ename,
            dept_id: input.dept_id,
        }
    }
}
