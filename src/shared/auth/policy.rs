//! Permission and policy model.
//!
//! Permissions are a closed enum parsed from exact claim strings. Each policy
//! requires exactly one permission; there is no hierarchy and no wildcard.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    EmployeeRead,
    EmployeeCreate,
    EmployeeUpdate,
    EmployeeDelete,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::EmployeeRead => "Employee.Read",
            Permission::EmployeeCreate => "Employee.Create",
            Permission::EmployeeUpdate => "Employee.Update",
            Permission::EmployeeDelete => "Employee.Delete",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown permission: {0}")]
pub struct UnknownPermission(pub String);

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Employee.Read" => Ok(Permission::EmployeeRead),
            "Employee.Create" => Ok(Permission::EmployeeCreate),
            "Employee.Update" => Ok(Permission::EmployeeUpdate),
            "Employee.Delete" => Ok(Permission::EmployeeDelete),
            other => Err(UnknownPermission(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    CanReadEmployees,
    CanCreateEmployees,
    CanUpdateEmployees,
    CanDeleteEmployees,
}

impl Policy {
    pub fn required_permission(&self) -> Permission {
        match self {
            Policy::CanReadEmployees => Permission::EmployeeRead,
            Policy::CanCreateEmployees => Permission::EmployeeCreate,
            Policy::CanUpdateEmployees => Permission::EmployeeUpdate,
            Policy::CanDeleteEmployees => Permission::EmployeeDelete,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Policy::CanReadEmployees => "CanReadEmployees",
            Policy::CanCreateEmployees => "CanCreateEmployees",
            Policy::CanUpdateEmployees => "CanUpdateEmployees",
            Policy::CanDeleteEmployees => "CanDeleteEmployees",
        }
    }
}

/// The authenticated caller for the lifetime of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub username: String,
    pub role: String,
    pub permissions: HashSet<Permission>,
}

impl Identity {
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("policy {} requires {}", .policy.name(), .policy.required_permission())]
    Forbidden { policy: Policy },
}

pub fn authorize(identity: Option<&Identity>, policy: Policy) -> Result<(), AuthorizationError> {
    let identity = identity.ok_or(AuthorizationError::Unauthenticated)?;
    if identity.has_permission(policy.required_permission()) {
        Ok(())
    } else {
        Err(AuthorizationError::Forbidden { policy })
    }
}
